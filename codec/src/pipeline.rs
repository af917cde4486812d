//! The encode/decode pipeline.

use model::StyleSheet;

use crate::error::{CodecResult, DecodeError};

/// Encodes a style sheet into a portable text token.
///
/// The sheet is serialized to its keyed text form, compressed, base64
/// encoded, and tagged with the current format version. Pure and
/// stateless; safe to call from any thread.
#[must_use]
pub fn encode(sheet: &StyleSheet) -> String {
    // The sheet schema is closed: string-keyed maps, finite depth. Serialization cannot fail.
    let text = serde_json::to_string(sheet).unwrap();
    wire::seal(&text)
}

/// Decodes a portable text token back into a style sheet.
///
/// The inverse of [`encode`]: validates the format tag, unwraps the
/// envelope, and parses the keyed text. All scalar/vector fields are
/// present in the result (missing keys fall back to defaults); color
/// entries with unknown slot names are dropped. On any failure no partial
/// sheet is produced.
pub fn decode(token: &str) -> CodecResult<StyleSheet> {
    let text = wire::open(token)?;
    serde_json::from_str(&text).map_err(|e| DecodeError::Structure {
        message: e.to_string(),
    })
}
