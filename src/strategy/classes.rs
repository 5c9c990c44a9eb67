//! Named byte classes
//!
//! Closures cannot cross the NIF boundary, so the predicate strategy is
//! reached from Elixir through a fixed set of class names.

use crate::core::SplitError;

/// Predicate over a single byte
pub type ByteClass = fn(&u8) -> bool;

/// Class names accepted by `byte_class`
pub const CLASS_NAMES: [&str; 4] = ["whitespace", "ascii_digit", "ascii_punctuation", "control"];

/// Look up a byte class by name
pub fn byte_class(name: &str) -> Result<ByteClass, SplitError> {
    match name {
        "whitespace" => Ok(u8::is_ascii_whitespace),
        "ascii_digit" => Ok(u8::is_ascii_digit),
        "ascii_punctuation" => Ok(u8::is_ascii_punctuation),
        "control" => Ok(u8::is_ascii_control),
        _ => Err(SplitError::InvalidSeparator("unknown byte class")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{split_by_predicate, SplitOptions};

    #[test]
    fn test_every_listed_class_resolves() {
        for name in CLASS_NAMES {
            assert!(byte_class(name).is_ok(), "class {:?}", name);
        }
    }

    #[test]
    fn test_class_membership() {
        assert!(byte_class("whitespace").unwrap()(&b'\t'));
        assert!(byte_class("ascii_digit").unwrap()(&b'7'));
        assert!(!byte_class("ascii_digit").unwrap()(&b'x'));
        assert!(byte_class("ascii_punctuation").unwrap()(&b';'));
        assert!(byte_class("control").unwrap()(&0x07));
    }

    #[test]
    fn test_unknown_class_is_an_invalid_separator() {
        let err = byte_class("vowels").unwrap_err();
        assert_eq!(err.kind(), "invalid_separator");
        assert_eq!(err.to_string(), "invalid separator: unknown byte class");
    }

    #[test]
    fn test_split_by_named_class() {
        let input = b"a1b22c";
        let digits = byte_class("ascii_digit").unwrap();
        let ranges = split_by_predicate(input, digits, SplitOptions::new().remove_empty_entries(true));
        let parts: Vec<&[u8]> = ranges.iter().map(|r| r.slice(input)).collect();
        assert_eq!(parts, vec![&b"a"[..], &b"b"[..], &b"c"[..]]);
    }
}
