//! Input byte decoding.
//!
//! Wiki dump exports carry a fixed UTF-8 encoding, so unlike general web
//! content there is no charset to sniff: the byte entry points decode
//! strictly and report failure instead of substituting replacement
//! characters, since silently corrupted text would poison downstream NLP
//! consumers.

use encoding_rs::UTF_8;

use crate::error::{Error, Result};

/// Decode raw document bytes as UTF-8.
///
/// Returns `Error::Encoding` if the bytes are not valid UTF-8. A leading
/// byte-order mark is not treated specially; dump exports do not carry one.
pub fn decode_utf8(bytes: &[u8]) -> Result<String> {
    match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(decoded) => Ok(decoded.into_owned()),
        None => Err(Error::Encoding(
            "input is not valid UTF-8".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_ascii() {
        let result = decode_utf8(b"plain text").unwrap();
        assert_eq!(result, "plain text");
    }

    #[test]
    fn decodes_multibyte_utf8() {
        let result = decode_utf8("Encyclopédie «générale»".as_bytes()).unwrap();
        assert_eq!(result, "Encyclopédie «générale»");
    }

    #[test]
    fn rejects_invalid_utf8() {
        let result = decode_utf8(b"caf\xE9");
        assert!(matches!(result, Err(Error::Encoding(_))));
    }

    #[test]
    fn decodes_empty_input() {
        let result = decode_utf8(b"").unwrap();
        assert!(result.is_empty());
    }
}
