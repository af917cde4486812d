//! Live-state capture and apply for the stylecap codec.
//!
//! Moves data between a [`model::StyleSheet`] and the two externally owned
//! pieces of mutable state: the renderer's live style block and the
//! application palette. Both are passed in explicitly; nothing here reaches
//! for globals, and exclusive access is expressed through plain borrows.

mod apply;
mod capture;
mod state;

pub use apply::apply;
pub use capture::capture;
pub use state::{AppPalette, LiveStyle};
