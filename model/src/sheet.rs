//! The serializable style descriptor.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{AccentPalette, ColorSlot, Dir, Rgba, Vec2};

/// Display name used until a sheet is explicitly named.
pub const PLACEHOLDER_NAME: &str = "Unknown";

/// Field-name → wire-token table.
///
/// This mirrors the serde attributes on [`StyleSheet`] and is part of the
/// stable wire contract: tokens must never be renumbered or reassigned
/// across format versions. A regression test asserts the serialized form
/// uses exactly these tokens.
pub const WIRE_KEYS: [(&str, &str); 30] = [
    ("name", "name"),
    ("alpha", "a"),
    ("window_padding", "b"),
    ("window_rounding", "c"),
    ("window_border_size", "d"),
    ("window_title_align", "e"),
    ("window_menu_button_position", "f"),
    ("child_rounding", "g"),
    ("child_border_size", "h"),
    ("popup_rounding", "i"),
    ("frame_padding", "j"),
    ("frame_rounding", "k"),
    ("frame_border_size", "l"),
    ("item_spacing", "m"),
    ("item_inner_spacing", "n"),
    ("cell_padding", "o"),
    ("touch_extra_padding", "p"),
    ("indent_spacing", "q"),
    ("scrollbar_size", "r"),
    ("scrollbar_rounding", "s"),
    ("grab_min_size", "t"),
    ("grab_rounding", "u"),
    ("log_slider_deadzone", "v"),
    ("tab_rounding", "w"),
    ("tab_border_size", "x"),
    ("button_text_align", "y"),
    ("selectable_text_align", "z"),
    ("display_safe_area_padding", "aa"),
    ("colors", "col"),
    ("accent", "dol"),
];

/// A complete, self-describing snapshot of style configuration.
///
/// The scalar/vector schema is flat and total: every field is present after
/// any successful decode. Tokens written by other format generations stay
/// readable because missing fields fall back to defaults and unknown keys
/// are ignored. The color map may cover any subset of [`ColorSlot::ALL`];
/// an absent [`AccentPalette`] means "leave the application palette alone".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "a")]
    pub alpha: f32,
    #[serde(rename = "b")]
    pub window_padding: Vec2,
    #[serde(rename = "c")]
    pub window_rounding: f32,
    #[serde(rename = "d")]
    pub window_border_size: f32,
    #[serde(rename = "e")]
    pub window_title_align: Vec2,
    #[serde(rename = "f")]
    pub window_menu_button_position: Dir,
    #[serde(rename = "g")]
    pub child_rounding: f32,
    #[serde(rename = "h")]
    pub child_border_size: f32,
    #[serde(rename = "i")]
    pub popup_rounding: f32,
    #[serde(rename = "j")]
    pub frame_padding: Vec2,
    #[serde(rename = "k")]
    pub frame_rounding: f32,
    #[serde(rename = "l")]
    pub frame_border_size: f32,
    #[serde(rename = "m")]
    pub item_spacing: Vec2,
    #[serde(rename = "n")]
    pub item_inner_spacing: Vec2,
    #[serde(rename = "o")]
    pub cell_padding: Vec2,
    #[serde(rename = "p")]
    pub touch_extra_padding: Vec2,
    #[serde(rename = "q")]
    pub indent_spacing: f32,
    #[serde(rename = "r")]
    pub scrollbar_size: f32,
    #[serde(rename = "s")]
    pub scrollbar_rounding: f32,
    #[serde(rename = "t")]
    pub grab_min_size: f32,
    #[serde(rename = "u")]
    pub grab_rounding: f32,
    #[serde(rename = "v")]
    pub log_slider_deadzone: f32,
    #[serde(rename = "w")]
    pub tab_rounding: f32,
    #[serde(rename = "x")]
    pub tab_border_size: f32,
    #[serde(rename = "y")]
    pub button_text_align: Vec2,
    #[serde(rename = "z")]
    pub selectable_text_align: Vec2,
    #[serde(rename = "aa")]
    pub display_safe_area_padding: Vec2,
    #[serde(rename = "col", deserialize_with = "deserialize_colors")]
    pub colors: BTreeMap<ColorSlot, Rgba>,
    #[serde(rename = "dol", skip_serializing_if = "Option::is_none")]
    pub accent: Option<AccentPalette>,
}

impl StyleSheet {
    /// Creates an empty sheet: placeholder name, zeroed fields, no colors,
    /// no accent palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_owned(),
            alpha: 0.0,
            window_padding: Vec2::default(),
            window_rounding: 0.0,
            window_border_size: 0.0,
            window_title_align: Vec2::default(),
            window_menu_button_position: Dir::None,
            child_rounding: 0.0,
            child_border_size: 0.0,
            popup_rounding: 0.0,
            frame_padding: Vec2::default(),
            frame_rounding: 0.0,
            frame_border_size: 0.0,
            item_spacing: Vec2::default(),
            item_inner_spacing: Vec2::default(),
            cell_padding: Vec2::default(),
            touch_extra_padding: Vec2::default(),
            indent_spacing: 0.0,
            scrollbar_size: 0.0,
            scrollbar_rounding: 0.0,
            grab_min_size: 0.0,
            grab_rounding: 0.0,
            log_slider_deadzone: 0.0,
            tab_rounding: 0.0,
            tab_border_size: 0.0,
            button_text_align: Vec2::default(),
            selectable_text_align: Vec2::default(),
            display_safe_area_padding: Vec2::default(),
            colors: BTreeMap::new(),
            accent: None,
        }
    }
}

// The wire carries slot names as plain strings. Typing the keys here means
// the sentinel and unknown slots are unrepresentable after decode; names
// from a newer slot table are dropped rather than failing the whole sheet.
fn deserialize_colors<'de, D>(deserializer: D) -> Result<BTreeMap<ColorSlot, Rgba>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Rgba>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(name, color)| ColorSlot::from_name(&name).map(|slot| (slot, color)))
        .collect())
}
