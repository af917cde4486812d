use model::{ColorSlot, StyleSheet};

use crate::state::{AppPalette, LiveStyle};

/// Applies a style sheet to the live style and application palette.
///
/// Scalar/vector fields are a total overwrite. Color slots are handled per
/// entry: a slot present in the sheet overwrites the live slot, a slot
/// missing from the sheet keeps its prior live value. An absent accent
/// sub-document leaves the application palette entirely untouched.
///
/// Total over well-formed state: there is no failure path, and the sheet
/// itself is never mutated.
pub fn apply(sheet: &StyleSheet, style: &mut LiveStyle, palette: &mut AppPalette) {
    style.alpha = sheet.alpha;
    style.window_padding = sheet.window_padding;
    style.window_rounding = sheet.window_rounding;
    style.window_border_size = sheet.window_border_size;
    style.window_title_align = sheet.window_title_align;
    style.window_menu_button_position = sheet.window_menu_button_position;
    style.child_rounding = sheet.child_rounding;
    style.child_border_size = sheet.child_border_size;
    style.popup_rounding = sheet.popup_rounding;
    style.frame_padding = sheet.frame_padding;
    style.frame_rounding = sheet.frame_rounding;
    style.frame_border_size = sheet.frame_border_size;
    style.item_spacing = sheet.item_spacing;
    style.item_inner_spacing = sheet.item_inner_spacing;
    style.cell_padding = sheet.cell_padding;
    style.touch_extra_padding = sheet.touch_extra_padding;
    style.indent_spacing = sheet.indent_spacing;
    style.scrollbar_size = sheet.scrollbar_size;
    style.scrollbar_rounding = sheet.scrollbar_rounding;
    style.grab_min_size = sheet.grab_min_size;
    style.grab_rounding = sheet.grab_rounding;
    style.log_slider_deadzone = sheet.log_slider_deadzone;
    style.tab_rounding = sheet.tab_rounding;
    style.tab_border_size = sheet.tab_border_size;
    style.button_text_align = sheet.button_text_align;
    style.selectable_text_align = sheet.selectable_text_align;
    style.display_safe_area_padding = sheet.display_safe_area_padding;

    for slot in ColorSlot::ALL {
        if let Some(color) = sheet.colors.get(&slot) {
            style.set_color(slot, *color);
        }
    }

    if let Some(accent) = &sheet.accent {
        palette.red = accent.red;
        palette.grey = accent.grey;
        palette.grey2 = accent.grey2;
        palette.grey3 = accent.grey3;
        palette.white = accent.white;
        palette.white2 = accent.white2;
        palette.orange = accent.orange;
        palette.role_blue = accent.role_blue;
        palette.role_green = accent.role_green;
        palette.role_red = accent.role_red;
    }
}
