//! Header field clean-up and delimiter recovery.

use super::delimiter::Delimiter;

/// Removes a UTF-8 byte-order mark left on the first header field.
pub fn strip_bom(fields: &mut [String]) {
    if let Some(first) = fields.first_mut()
        && let Some(stripped) = first.strip_prefix('\u{feff}')
    {
        *first = stripped.to_string();
    }
}

/// Re-splits a header that collapsed into one field.
///
/// Returns the recovered names when `fields` holds exactly one field that
/// still contains the delimiter, or `None` when the header is usable as is.
/// Recovered names are trimmed.
pub fn recover_collapsed_header(fields: &[String], delimiter: Delimiter) -> Option<Vec<String>> {
    let [only] = fields else {
        return None;
    };
    let separator = delimiter.as_char();
    if !only.contains(separator) {
        return None;
    }
    Some(
        only.split(separator)
            .map(|name| name.trim().to_string())
            .collect(),
    )
}
