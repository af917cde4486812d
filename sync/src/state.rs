//! The externally owned mutable state the synchronizer reads and writes.
//!
//! Both objects are owned by their subsystems (the renderer and the
//! application shell) and are passed into [`capture`](crate::capture) and
//! [`apply`](crate::apply) by reference. Exclusive access for the duration
//! of a call is the caller's responsibility and is what the `&`/`&mut`
//! borrows express; the synchronizer itself does no locking.

use model::{ColorSlot, Dir, Rgba, Vec2};

/// The rendering library's live style block: the same scalar/vector fields
/// as the style sheet plus the indexed color table.
///
/// The color array is indexed by [`ColorSlot::index`]; its length comes
/// from [`ColorSlot::COUNT`], so the sentinel-free slot table is the only
/// iteration source.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveStyle {
    pub alpha: f32,
    pub window_padding: Vec2,
    pub window_rounding: f32,
    pub window_border_size: f32,
    pub window_title_align: Vec2,
    pub window_menu_button_position: Dir,
    pub child_rounding: f32,
    pub child_border_size: f32,
    pub popup_rounding: f32,
    pub frame_padding: Vec2,
    pub frame_rounding: f32,
    pub frame_border_size: f32,
    pub item_spacing: Vec2,
    pub item_inner_spacing: Vec2,
    pub cell_padding: Vec2,
    pub touch_extra_padding: Vec2,
    pub indent_spacing: f32,
    pub scrollbar_size: f32,
    pub scrollbar_rounding: f32,
    pub grab_min_size: f32,
    pub grab_rounding: f32,
    pub log_slider_deadzone: f32,
    pub tab_rounding: f32,
    pub tab_border_size: f32,
    pub button_text_align: Vec2,
    pub selectable_text_align: Vec2,
    pub display_safe_area_padding: Vec2,
    pub colors: [Rgba; ColorSlot::COUNT],
}

impl Default for LiveStyle {
    fn default() -> Self {
        Self {
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
            colors: [Rgba::TRANSPARENT; ColorSlot::COUNT],
        }
    }
}

impl LiveStyle {
    /// Reads one slot of the indexed color table.
    #[must_use]
    pub fn color(&self, slot: ColorSlot) -> Rgba {
        self.colors[slot.index()]
    }

    /// Writes one slot of the indexed color table.
    pub fn set_color(&mut self, slot: ColorSlot, color: Rgba) {
        self.colors[slot.index()] = color;
    }
}

/// The application palette: ten accent colors independently mutable from
/// the live style. Always fully populated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppPalette {
    pub red: Rgba,
    pub grey: Rgba,
    pub grey2: Rgba,
    pub grey3: Rgba,
    pub white: Rgba,
    pub white2: Rgba,
    pub orange: Rgba,
    pub role_blue: Rgba,
    pub role_green: Rgba,
    pub role_red: Rgba,
}

impl Default for AppPalette {
    fn default() -> Self {
        let stock = model::AccentPalette::STOCK;
        Self {
            red: stock.red,
            grey: stock.grey,
            grey2: stock.grey2,
            grey3: stock.grey3,
            white: stock.white,
            white2: stock.white2,
            orange: stock.orange,
            role_blue: stock.role_blue,
            role_green: stock.role_green,
            role_red: stock.role_red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_style_starts_neutral() {
        let style = LiveStyle::default();
        assert_eq!(style.alpha, 0.0);
        assert_eq!(style.window_menu_button_position, Dir::None);
        assert!(style.colors.iter().all(|c| *c == Rgba::TRANSPARENT));
    }

    #[test]
    fn color_accessors_address_the_right_slot() {
        let mut style = LiveStyle::default();
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
        style.set_color(ColorSlot::Border, red);
        assert_eq!(style.color(ColorSlot::Border), red);
        assert_eq!(style.color(ColorSlot::BorderShadow), Rgba::TRANSPARENT);
        assert_eq!(style.colors[ColorSlot::Border.index()], red);
    }

    #[test]
    fn app_palette_default_matches_stock_accents() {
        let palette = AppPalette::default();
        let stock = model::AccentPalette::STOCK;
        assert_eq!(palette.red, stock.red);
        assert_eq!(palette.role_green, stock.role_green);
    }
}
