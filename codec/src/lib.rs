//! Style sheet encoding and decoding for the stylecap codec.
//!
//! This is the crate callers use to turn a [`model::StyleSheet`] into a
//! portable `DS1…` token and back. It ties the model's keyed text form to
//! the wire envelope (gzip + base64 + format tag).
//!
//! # Design Principles
//!
//! - **Pure and stateless** - Encode/decode touch only their arguments;
//!   they may run concurrently from any thread.
//! - **Exact round trip** - `decode(&encode(&sheet))` reproduces every
//!   field, including partial color maps and an absent accent palette.
//! - **All-or-nothing decode** - A failed decode never yields a partial
//!   sheet; callers keep their current state.

mod error;
mod pipeline;

pub use error::{CodecResult, DecodeError};
pub use pipeline::{decode, encode};
pub use wire::{FormatError, FrameError, FORMAT_TAG, TAG_LEN};
