//! Field delimiter for delimited-text files.

use std::fmt;
use std::str::FromStr;

use crate::error::{IngestError, Result};

/// A single-byte field delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiter(u8);

impl Delimiter {
    pub const COMMA: Self = Self(b',');
    pub const SEMICOLON: Self = Self(b';');
    pub const TAB: Self = Self(b'\t');
    pub const PIPE: Self = Self(b'|');

    /// Creates a delimiter from an ASCII character.
    ///
    /// Line terminators and the quote character are rejected since the CSV
    /// reader reserves them.
    pub fn new(ch: char) -> Result<Self> {
        if !ch.is_ascii() || matches!(ch, '\n' | '\r' | '"') {
            return Err(IngestError::InvalidDelimiter {
                value: ch.to_string(),
            });
        }
        Ok(Self(ch as u8))
    }

    pub fn as_byte(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(self.0)
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::COMMA
    }
}

impl FromStr for Delimiter {
    type Err = IngestError;

    /// Parses a one-character delimiter. `\t` and `tab` name the tab
    /// character, which is awkward to type at a shell.
    fn from_str(value: &str) -> Result<Self> {
        if value == "\\t" || value.eq_ignore_ascii_case("tab") {
            return Ok(Self::TAB);
        }
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => Err(IngestError::InvalidDelimiter {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            b'\t' => f.write_str("\\t"),
            byte => write!(f, "{}", char::from(byte)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_comma() {
        assert_eq!(Delimiter::default(), Delimiter::COMMA);
        assert_eq!(Delimiter::default().as_char(), ',');
    }

    #[test]
    fn test_parse_single_character() {
        assert_eq!(";".parse::<Delimiter>().unwrap(), Delimiter::SEMICOLON);
        assert_eq!("|".parse::<Delimiter>().unwrap(), Delimiter::PIPE);
    }

    #[test]
    fn test_parse_tab_aliases() {
        assert_eq!("\\t".parse::<Delimiter>().unwrap(), Delimiter::TAB);
        assert_eq!("TAB".parse::<Delimiter>().unwrap(), Delimiter::TAB);
        assert_eq!("\t".parse::<Delimiter>().unwrap(), Delimiter::TAB);
    }

    #[test]
    fn test_rejects_unusable_delimiters() {
        for value in ["", ";;", "\"", "\n", "§"] {
            assert!(
                matches!(
                    value.parse::<Delimiter>(),
                    Err(IngestError::InvalidDelimiter { .. })
                ),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Delimiter::SEMICOLON.to_string(), ";");
        assert_eq!(Delimiter::TAB.to_string(), "\\t");
    }
}
