//! Sealing serialized text into portable tokens and opening them again.

use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{FrameError, FrameResult};
use crate::tag::{strip_tag, FORMAT_TAG};

/// Seals serialized text into a portable token:
/// gzip-compress, base64-encode, prepend the format tag.
#[must_use]
pub fn seal(text: &str) -> String {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    // Writing into a Vec cannot fail.
    encoder.write_all(text.as_bytes()).unwrap();
    let compressed = encoder.finish().unwrap();
    format!("{FORMAT_TAG}{}", BASE64.encode(compressed))
}

/// Opens a sealed token back into its serialized text.
///
/// Validates the format tag before touching the payload; on any failure no
/// partial output is produced.
pub fn open(token: &str) -> FrameResult<String> {
    let payload = strip_tag(token)?;
    let compressed = BASE64.decode(payload).map_err(|e| FrameError::Base64 {
        message: e.to_string(),
    })?;

    let mut decoder = GzDecoder::new(compressed.as_slice());
    let mut text = Vec::new();
    decoder
        .read_to_end(&mut text)
        .map_err(|e| FrameError::Corrupt {
            message: e.to_string(),
        })?;

    String::from_utf8(text).map_err(|e| FrameError::Utf8 {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    #[test]
    fn seal_prepends_the_format_tag() {
        let token = seal("{}");
        assert!(token.starts_with(FORMAT_TAG));
    }

    #[test]
    fn seal_output_is_ascii() {
        let token = seal("padding and r\u{f8}unding");
        assert!(token.is_ascii());
    }

    #[test]
    fn open_seal_roundtrip() {
        for text in ["", "{}", "{\"a\":1.0}", "non-ascii \u{2764} payload"] {
            assert_eq!(open(&seal(text)).as_deref(), Ok(text));
        }
    }

    #[test]
    fn open_seal_roundtrip_large_text() {
        let text = "{\"col\":{\"Text\":[1.0,1.0,1.0,1.0]}}".repeat(500);
        assert_eq!(open(&seal(&text)), Ok(text));
    }

    #[test]
    fn open_rejects_missing_tag() {
        assert_eq!(
            open(""),
            Err(FrameError::Format(FormatError::TooShort { len: 0 }))
        );
    }

    #[test]
    fn open_rejects_foreign_tag_with_valid_payload() {
        let token = seal("{}");
        let forged = format!("ZZZ{}", &token[3..]);
        assert!(matches!(
            open(&forged),
            Err(FrameError::Format(FormatError::UnknownTag { .. }))
        ));
    }

    #[test]
    fn open_rejects_bad_base64() {
        let err = open("DS1!!!not-base64!!!").unwrap_err();
        assert!(matches!(err, FrameError::Base64 { .. }));
    }

    #[test]
    fn open_rejects_corrupt_stream() {
        // Valid base64 that does not decompress.
        let token = format!("DS1{}", BASE64.encode(b"definitely not gzip"));
        let err = open(&token).unwrap_err();
        assert!(matches!(err, FrameError::Corrupt { .. }));
    }

    #[test]
    fn open_rejects_truncated_stream() {
        let token = seal("{\"a\":1.0,\"b\":[8.0,8.0]}");
        let payload = BASE64.decode(&token[3..]).unwrap();
        let truncated = format!("DS1{}", BASE64.encode(&payload[..payload.len() / 2]));
        let err = open(&truncated).unwrap_err();
        assert!(matches!(err, FrameError::Corrupt { .. }));
    }

    #[test]
    fn open_rejects_non_utf8_payload() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&[0xFF, 0xFE, 0x80]).unwrap();
        let token = format!("DS1{}", BASE64.encode(encoder.finish().unwrap()));
        let err = open(&token).unwrap_err();
        assert!(matches!(err, FrameError::Utf8 { .. }));
    }
}
