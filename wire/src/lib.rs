//! Portable token framing for the stylecap codec.
//!
//! This crate handles the token envelope: the leading format tag, gzip
//! compression, and base64 text-safe encoding. It does not know about
//! style semantics—only the shape of the envelope.
//!
//! # Design Principles
//!
//! - **Stable wire format** - The 3-character tag is the sole versioning
//!   mechanism and is validated before any payload work.
//! - **All-or-nothing** - Opening a token either yields the full serialized
//!   text or an error; there is no partial output.
//! - **No domain knowledge** - This crate frames text, it never parses it.

mod error;
mod frame;
mod tag;

pub use error::{FormatError, FrameError, FrameResult};
pub use frame::{open, seal};
pub use tag::{strip_tag, FORMAT_TAG, TAG_LEN};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = FORMAT_TAG;
        let _ = TAG_LEN;
        let _ = seal("");
        let _ = strip_tag("DS1");

        // Error types
        let _: FrameResult<()> = Ok(());
    }

    #[test]
    fn format_tag_is_version_one() {
        assert_eq!(FORMAT_TAG, "DS1");
        assert_eq!(TAG_LEN, FORMAT_TAG.len());
    }

    #[test]
    fn token_layout_is_tag_then_base64() {
        let token = seal("{}");
        assert_eq!(&token[..TAG_LEN], FORMAT_TAG);
        assert!(token[TAG_LEN..]
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == b'='));
    }
}
