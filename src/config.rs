//! Configuration constants and validation functions for xmltract.

use encoding_rs::Encoding;

use crate::error::{ExtractError, Result};

/// Default input encoding label.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Name used for the standard-input source in logs and error messages.
pub const STDIN_SOURCE_NAME: &str = "<stdin>";

/// Resolve an encoding label to a concrete encoding.
///
/// Labels follow the WHATWG Encoding Standard and are matched
/// case-insensitively, so `utf-8`, `UTF-8` and `latin1` all work.
///
/// # Arguments
/// * `label` - Encoding label to resolve (e.g., "UTF-8", "ISO-8859-1")
///
/// # Returns
/// * `Ok(&'static Encoding)` if the label is known
/// * `Err(ExtractError::InvalidEncoding)` otherwise
///
/// # Examples
/// ```
/// use xmltract::config::resolve_encoding;
///
/// assert!(resolve_encoding("UTF-8").is_ok());
/// assert!(resolve_encoding("latin1").is_ok());
/// assert!(resolve_encoding("not-an-encoding").is_err());
/// ```
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| ExtractError::InvalidEncoding(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_encoding_utf8() {
        let enc = resolve_encoding("UTF-8").unwrap();
        assert_eq!(enc, encoding_rs::UTF_8);
    }

    #[test]
    fn test_resolve_encoding_case_insensitive() {
        assert_eq!(resolve_encoding("utf-8").unwrap(), encoding_rs::UTF_8);
    }

    #[test]
    fn test_resolve_encoding_latin1_alias() {
        // "latin1" is a WHATWG alias for windows-1252
        let enc = resolve_encoding("latin1").unwrap();
        assert_eq!(enc, encoding_rs::WINDOWS_1252);
    }

    #[test]
    fn test_resolve_encoding_unknown() {
        let err = resolve_encoding("not-an-encoding").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidEncoding(_)));
    }
}
