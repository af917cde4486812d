use model::{AccentPalette, ColorSlot, StyleSheet};

use crate::state::{AppPalette, LiveStyle};

/// Captures the current live style and application palette into a new
/// style sheet.
///
/// Every scalar/vector field is copied, every slot of the indexed color
/// table lands in the map (Capture always yields a complete map), and the
/// accent sub-document is always present because the palette source is
/// always fully populated. The sheet keeps its placeholder name; naming is
/// the caller's business.
#[must_use]
pub fn capture(style: &LiveStyle, palette: &AppPalette) -> StyleSheet {
    let mut sheet = StyleSheet::new();

    sheet.alpha = style.alpha;
    sheet.window_padding = style.window_padding;
    sheet.window_rounding = style.window_rounding;
    sheet.window_border_size = style.window_border_size;
    sheet.window_title_align = style.window_title_align;
    sheet.window_menu_button_position = style.window_menu_button_position;
    sheet.child_rounding = style.child_rounding;
    sheet.child_border_size = style.child_border_size;
    sheet.popup_rounding = style.popup_rounding;
    sheet.frame_padding = style.frame_padding;
    sheet.frame_rounding = style.frame_rounding;
    sheet.frame_border_size = style.frame_border_size;
    sheet.item_spacing = style.item_spacing;
    sheet.item_inner_spacing = style.item_inner_spacing;
    sheet.cell_padding = style.cell_padding;
    sheet.touch_extra_padding = style.touch_extra_padding;
    sheet.indent_spacing = style.indent_spacing;
    sheet.scrollbar_size = style.scrollbar_size;
    sheet.scrollbar_rounding = style.scrollbar_rounding;
    sheet.grab_min_size = style.grab_min_size;
    sheet.grab_rounding = style.grab_rounding;
    sheet.log_slider_deadzone = style.log_slider_deadzone;
    sheet.tab_rounding = style.tab_rounding;
    sheet.tab_border_size = style.tab_border_size;
    sheet.button_text_align = style.button_text_align;
    sheet.selectable_text_align = style.selectable_text_align;
    sheet.display_safe_area_padding = style.display_safe_area_padding;

    for slot in ColorSlot::ALL {
        sheet.colors.insert(slot, style.color(slot));
    }

    sheet.accent = Some(AccentPalette {
        red: palette.red,
        grey: palette.grey,
        grey2: palette.grey2,
        grey3: palette.grey3,
        white: palette.white,
        white2: palette.white2,
        orange: palette.orange,
        role_blue: palette.role_blue,
        role_green: palette.role_green,
        role_red: palette.role_red,
    });

    sheet
}
