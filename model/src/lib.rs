//! Style sheet data model and wire key table for the stylecap codec.
//!
//! This crate defines what a captured style looks like in memory:
//! - Value types for vectors, colors, and the menu-button direction
//! - The canonical color-slot table (sentinel-free by construction)
//! - The style sheet descriptor with its stable wire key table
//! - The optional accent palette sub-document
//! - The two canonical built-in presets
//!
//! # Design Principles
//!
//! - **Total schema** - Every scalar/vector field exists after any
//!   successful decode; only the color map and accent palette are partial.
//! - **Stable wire keys** - Field tokens are part of the wire contract and
//!   are never renumbered; both codec directions read one declaration.
//! - **Drift tolerance** - Unknown keys, unknown slot names, and missing
//!   fields degrade gracefully instead of failing the whole document.

mod palette;
mod preset;
mod sheet;
mod slot;
mod vec;

pub use palette::AccentPalette;
pub use sheet::{StyleSheet, PLACEHOLDER_NAME, WIRE_KEYS};
pub use slot::ColorSlot;
pub use vec::{Dir, Rgba, Vec2};
