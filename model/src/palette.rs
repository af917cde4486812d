//! The accent palette sub-document.

use serde::{Deserialize, Serialize};

use crate::Rgba;

/// The fixed 10-entry accent color table layered above the rendering
/// library's own slots (role and branding colors).
///
/// This is a separate document with its own key table, nested optionally in
/// the style sheet so decoders built against other versions tolerate its
/// absence. When present it always carries all ten fields; missing keys
/// decode to the stock values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccentPalette {
    #[serde(rename = "a")]
    pub red: Rgba,
    #[serde(rename = "b")]
    pub grey: Rgba,
    #[serde(rename = "c")]
    pub grey2: Rgba,
    #[serde(rename = "d")]
    pub grey3: Rgba,
    #[serde(rename = "e")]
    pub white: Rgba,
    #[serde(rename = "f")]
    pub white2: Rgba,
    #[serde(rename = "g")]
    pub orange: Rgba,
    #[serde(rename = "h")]
    pub role_blue: Rgba,
    #[serde(rename = "i")]
    pub role_green: Rgba,
    #[serde(rename = "j")]
    pub role_red: Rgba,
}

impl Default for AccentPalette {
    fn default() -> Self {
        Self::STOCK
    }
}

impl AccentPalette {
    /// The product's stock accent values.
    pub const STOCK: Self = Self {
        red: Rgba::new(1.0, 0.0, 0.0, 1.0),
        grey: Rgba::new(0.7, 0.7, 0.7, 1.0),
        grey2: Rgba::new(0.7, 0.7, 0.7, 1.0),
        grey3: Rgba::new(0.5, 0.5, 0.5, 1.0),
        white: Rgba::new(1.0, 1.0, 1.0, 1.0),
        white2: Rgba::new(0.878, 0.878, 0.878, 1.0),
        orange: Rgba::new(1.0, 0.709, 0.0, 1.0),
        role_blue: Rgba::new(0.0, 0.6, 1.0, 1.0),
        role_green: Rgba::new(0.0, 0.8, 0.133_333_3, 1.0),
        role_red: Rgba::new(0.705_882_4, 0.0, 0.0, 1.0),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_stock() {
        assert_eq!(AccentPalette::default(), AccentPalette::STOCK);
    }

    #[test]
    fn serializes_with_short_keys() {
        let value = serde_json::to_value(AccentPalette::STOCK).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 10);
        for key in ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"] {
            assert!(obj.contains_key(key), "missing palette key {key}");
        }
    }

    #[test]
    fn roundtrips_through_json() {
        let mut palette = AccentPalette::STOCK;
        palette.role_blue = Rgba::new(0.1, 0.2, 0.3, 0.4);
        let json = serde_json::to_string(&palette).unwrap();
        let back: AccentPalette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette);
    }

    #[test]
    fn missing_keys_fall_back_to_stock() {
        let back: AccentPalette = serde_json::from_str(r#"{"a":[0,0,0,1]}"#).unwrap();
        assert_eq!(back.red, Rgba::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(back.grey, AccentPalette::STOCK.grey);
        assert_eq!(back.role_red, AccentPalette::STOCK.role_red);
    }
}
