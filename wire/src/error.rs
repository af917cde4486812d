//! Error types for token framing.

use std::fmt;

/// Result type for framing operations.
pub type FrameResult<T> = Result<T, FrameError>;

/// Version-tag failures.
///
/// Raised before any payload work happens; a token that fails here was
/// never partially decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// Token is shorter than the format tag.
    TooShort { len: usize },

    /// Leading tag is not a supported format version.
    UnknownTag { found: String },
}

/// Failures while opening a sealed token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FrameError {
    /// Version-tag validation failed.
    Format(FormatError),

    /// Payload is not valid base64.
    Base64 { message: String },

    /// Compressed stream is corrupt or truncated.
    Corrupt { message: String },

    /// Decompressed payload is not valid UTF-8 text.
    Utf8 { message: String },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len } => {
                write!(f, "token too short for a format tag: {len} bytes")
            }
            Self::UnknownTag { found } => {
                write!(f, "unknown format tag: {found:?}")
            }
        }
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(e) => write!(f, "format error: {e}"),
            Self::Base64 { message } => write!(f, "invalid base64 payload: {message}"),
            Self::Corrupt { message } => write!(f, "corrupt compressed stream: {message}"),
            Self::Utf8 { message } => write!(f, "payload is not valid UTF-8: {message}"),
        }
    }
}

impl std::error::Error for FormatError {}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FormatError> for FrameError {
    fn from(err: FormatError) -> Self {
        Self::Format(err)
    }
}
