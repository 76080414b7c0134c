//! Placeholder names for blank header cells.

/// Prefix of the name given to a column whose header cell is blank.
const UNNAMED_PREFIX: &str = "Unnamed: ";

/// Names each blank header after its zero-based position in the row.
///
/// Blank columns stay distinct from each other, so a file with more blank
/// header cells than another has a different column set.
pub fn name_blank_columns(names: &mut [String]) {
    for (position, name) in names.iter_mut().enumerate() {
        if name.is_empty() {
            *name = format!("{UNNAMED_PREFIX}{position}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_take_their_position() {
        let mut names = vec![
            "Id".to_string(),
            String::new(),
            String::new(),
            "Total".to_string(),
        ];
        name_blank_columns(&mut names);
        assert_eq!(names, ["Id", "Unnamed: 1", "Unnamed: 2", "Total"]);
    }

    #[test]
    fn test_whitespace_names_are_kept() {
        let mut names = vec![" ".to_string(), "A".to_string()];
        name_blank_columns(&mut names);
        assert_eq!(names, [" ", "A"]);
    }
}
