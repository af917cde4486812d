//! Error types for codec operations.

use std::fmt;

use wire::{FormatError, FrameError};

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding a portable style token.
///
/// Encoding has no error path: the sheet schema is closed and always
/// serializable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// Missing, truncated, or unrecognized format tag.
    Format(FormatError),

    /// Bad text-safe encoding or corrupt compressed stream.
    Frame(FrameError),

    /// Decompressed text is not a structurally valid style sheet.
    Structure { message: String },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(e) => write!(f, "format error: {e}"),
            Self::Frame(e) => write!(f, "frame error: {e}"),
            Self::Structure { message } => {
                write!(f, "malformed style sheet: {message}")
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format(e) => Some(e),
            Self::Frame(e) => Some(e),
            Self::Structure { .. } => None,
        }
    }
}

impl From<FormatError> for DecodeError {
    fn from(err: FormatError) -> Self {
        Self::Format(err)
    }
}

impl From<FrameError> for DecodeError {
    fn from(err: FrameError) -> Self {
        // Tag failures stay distinguishable no matter which layer saw them.
        match err {
            FrameError::Format(e) => Self::Format(e),
            other => Self::Frame(other),
        }
    }
}
