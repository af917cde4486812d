//! The two canonical built-in presets.
//!
//! These are complete constant documents: every scalar/vector field set,
//! the color map covering the full slot table, and the accent palette
//! present. They double as default themes and as regression fixtures for
//! the codec.

use std::collections::BTreeMap;

use crate::{AccentPalette, ColorSlot, Dir, Rgba, StyleSheet, Vec2};

impl StyleSheet {
    /// The standard product look.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            name: "Standard".to_owned(),
            alpha: 1.0,
            window_padding: Vec2::new(8.0, 8.0),
            window_rounding: 4.0,
            window_border_size: 0.0,
            window_title_align: Vec2::new(0.0, 0.5),
            window_menu_button_position: Dir::Right,
            child_rounding: 0.0,
            child_border_size: 1.0,
            popup_rounding: 0.0,
            frame_padding: Vec2::new(4.0, 3.0),
            frame_rounding: 4.0,
            frame_border_size: 0.0,
            item_spacing: Vec2::new(8.0, 4.0),
            item_inner_spacing: Vec2::new(4.0, 4.0),
            cell_padding: Vec2::new(4.0, 2.0),
            touch_extra_padding: Vec2::new(0.0, 0.0),
            indent_spacing: 21.0,
            scrollbar_size: 16.0,
            scrollbar_rounding: 9.0,
            grab_min_size: 13.0,
            grab_rounding: 3.0,
            log_slider_deadzone: 4.0,
            tab_rounding: 4.0,
            tab_border_size: 0.0,
            button_text_align: Vec2::new(0.5, 0.5),
            selectable_text_align: Vec2::new(0.0, 0.0),
            display_safe_area_padding: Vec2::new(3.0, 3.0),
            colors: color_map(&[
                (ColorSlot::Text, Rgba::new(1.0, 1.0, 1.0, 1.0)),
                (ColorSlot::TextDisabled, Rgba::new(0.5, 0.5, 0.5, 1.0)),
                (ColorSlot::WindowBg, Rgba::new(0.06, 0.06, 0.06, 0.87)),
                (ColorSlot::ChildBg, Rgba::new(0.0, 0.0, 0.0, 0.0)),
                (ColorSlot::PopupBg, Rgba::new(0.08, 0.08, 0.08, 0.94)),
                (ColorSlot::Border, Rgba::new(0.43, 0.43, 0.5, 0.5)),
                (ColorSlot::BorderShadow, Rgba::new(0.0, 0.0, 0.0, 0.0)),
                (ColorSlot::FrameBg, Rgba::new(0.29, 0.29, 0.29, 0.54)),
                (ColorSlot::FrameBgHovered, Rgba::new(0.54, 0.54, 0.54, 0.4)),
                (ColorSlot::FrameBgActive, Rgba::new(0.64, 0.64, 0.64, 0.67)),
                (
                    ColorSlot::TitleBg,
                    Rgba::new(0.022624433, 0.022624206, 0.022624206, 0.85067874),
                ),
                (
                    ColorSlot::TitleBgActive,
                    Rgba::new(0.38914025, 0.10917056, 0.10917056, 0.8280543),
                ),
                (ColorSlot::TitleBgCollapsed, Rgba::new(0.0, 0.0, 0.0, 0.51)),
                (ColorSlot::MenuBarBg, Rgba::new(0.14, 0.14, 0.14, 1.0)),
                (ColorSlot::ScrollbarBg, Rgba::new(0.0, 0.0, 0.0, 0.0)),
                (ColorSlot::ScrollbarGrab, Rgba::new(0.31, 0.31, 0.31, 1.0)),
                (
                    ColorSlot::ScrollbarGrabHovered,
                    Rgba::new(0.41, 0.41, 0.41, 1.0),
                ),
                (
                    ColorSlot::ScrollbarGrabActive,
                    Rgba::new(0.51, 0.51, 0.51, 1.0),
                ),
                (ColorSlot::CheckMark, Rgba::new(0.86, 0.86, 0.86, 1.0)),
                (ColorSlot::SliderGrab, Rgba::new(0.54, 0.54, 0.54, 1.0)),
                (ColorSlot::SliderGrabActive, Rgba::new(0.67, 0.67, 0.67, 1.0)),
                (ColorSlot::Button, Rgba::new(0.71, 0.71, 0.71, 0.4)),
                (
                    ColorSlot::ButtonHovered,
                    Rgba::new(0.3647059, 0.078431375, 0.078431375, 0.94509804),
                ),
                (
                    ColorSlot::ButtonActive,
                    Rgba::new(0.48416287, 0.10077597, 0.10077597, 0.94509804),
                ),
                (ColorSlot::Header, Rgba::new(0.59, 0.59, 0.59, 0.31)),
                (ColorSlot::HeaderHovered, Rgba::new(0.5, 0.5, 0.5, 0.8)),
                (ColorSlot::HeaderActive, Rgba::new(0.6, 0.6, 0.6, 1.0)),
                (ColorSlot::Separator, Rgba::new(0.43, 0.43, 0.5, 0.5)),
                (
                    ColorSlot::SeparatorHovered,
                    Rgba::new(0.3647059, 0.078431375, 0.078431375, 0.78280544),
                ),
                (
                    ColorSlot::SeparatorActive,
                    Rgba::new(0.3647059, 0.078431375, 0.078431375, 0.94509804),
                ),
                (ColorSlot::ResizeGrip, Rgba::new(0.79, 0.79, 0.79, 0.25)),
                (ColorSlot::ResizeGripHovered, Rgba::new(0.78, 0.78, 0.78, 0.67)),
                (
                    ColorSlot::ResizeGripActive,
                    Rgba::new(0.3647059, 0.078431375, 0.078431375, 0.94509804),
                ),
                (ColorSlot::Tab, Rgba::new(0.23, 0.23, 0.23, 0.86)),
                (
                    ColorSlot::TabHovered,
                    Rgba::new(0.58371043, 0.30374074, 0.30374074, 0.7647059),
                ),
                (
                    ColorSlot::TabActive,
                    Rgba::new(0.47963798, 0.15843244, 0.15843244, 0.7647059),
                ),
                (
                    ColorSlot::TabUnfocused,
                    Rgba::new(0.068, 0.10199998, 0.14800003, 0.9724),
                ),
                (
                    ColorSlot::TabUnfocusedActive,
                    Rgba::new(0.13599998, 0.26199996, 0.424, 1.0),
                ),
                (ColorSlot::DockingPreview, Rgba::new(0.26, 0.59, 0.98, 0.7)),
                (ColorSlot::DockingEmptyBg, Rgba::new(0.2, 0.2, 0.2, 1.0)),
                (ColorSlot::PlotLines, Rgba::new(0.61, 0.61, 0.61, 1.0)),
                (ColorSlot::PlotLinesHovered, Rgba::new(1.0, 0.43, 0.35, 1.0)),
                (ColorSlot::PlotHistogram, Rgba::new(0.9, 0.7, 0.0, 1.0)),
                (ColorSlot::PlotHistogramHovered, Rgba::new(1.0, 0.6, 0.0, 1.0)),
                (ColorSlot::TableHeaderBg, Rgba::new(0.19, 0.19, 0.2, 1.0)),
                (ColorSlot::TableBorderStrong, Rgba::new(0.31, 0.31, 0.35, 1.0)),
                (ColorSlot::TableBorderLight, Rgba::new(0.23, 0.23, 0.25, 1.0)),
                (ColorSlot::TableRowBg, Rgba::new(0.0, 0.0, 0.0, 0.0)),
                (ColorSlot::TableRowBgAlt, Rgba::new(1.0, 1.0, 1.0, 0.06)),
                (ColorSlot::TextSelectedBg, Rgba::new(0.26, 0.59, 0.98, 0.35)),
                (ColorSlot::DragDropTarget, Rgba::new(1.0, 1.0, 0.0, 0.9)),
                (ColorSlot::NavHighlight, Rgba::new(0.26, 0.59, 0.98, 1.0)),
                (
                    ColorSlot::NavWindowingHighlight,
                    Rgba::new(1.0, 1.0, 1.0, 0.7),
                ),
                (ColorSlot::NavWindowingDimBg, Rgba::new(0.8, 0.8, 0.8, 0.2)),
                (ColorSlot::ModalWindowDimBg, Rgba::new(0.8, 0.8, 0.8, 0.35)),
            ]),
            accent: Some(AccentPalette::STOCK),
        }
    }

    /// The earlier, greyer look kept for users who prefer it.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            name: "Classic".to_owned(),
            grab_min_size: 10.0,
            colors: color_map(&[
                (ColorSlot::Text, Rgba::new(1.0, 1.0, 1.0, 1.0)),
                (ColorSlot::TextDisabled, Rgba::new(0.5, 0.5, 0.5, 1.0)),
                (ColorSlot::WindowBg, Rgba::new(0.06, 0.06, 0.06, 0.87)),
                (ColorSlot::ChildBg, Rgba::new(0.0, 0.0, 0.0, 0.0)),
                (ColorSlot::PopupBg, Rgba::new(0.08, 0.08, 0.08, 0.94)),
                (ColorSlot::Border, Rgba::new(0.43, 0.43, 0.5, 0.5)),
                (ColorSlot::BorderShadow, Rgba::new(0.0, 0.0, 0.0, 0.0)),
                (ColorSlot::FrameBg, Rgba::new(0.29, 0.29, 0.29, 0.54)),
                (ColorSlot::FrameBgHovered, Rgba::new(0.54, 0.54, 0.54, 0.4)),
                (ColorSlot::FrameBgActive, Rgba::new(0.64, 0.64, 0.64, 0.67)),
                (ColorSlot::TitleBg, Rgba::new(0.04, 0.04, 0.04, 1.0)),
                (ColorSlot::TitleBgActive, Rgba::new(0.29, 0.29, 0.29, 1.0)),
                (ColorSlot::TitleBgCollapsed, Rgba::new(0.0, 0.0, 0.0, 0.51)),
                (ColorSlot::MenuBarBg, Rgba::new(0.14, 0.14, 0.14, 1.0)),
                (ColorSlot::ScrollbarBg, Rgba::new(0.0, 0.0, 0.0, 0.0)),
                (ColorSlot::ScrollbarGrab, Rgba::new(0.31, 0.31, 0.31, 1.0)),
                (
                    ColorSlot::ScrollbarGrabHovered,
                    Rgba::new(0.41, 0.41, 0.41, 1.0),
                ),
                (
                    ColorSlot::ScrollbarGrabActive,
                    Rgba::new(0.51, 0.51, 0.51, 1.0),
                ),
                (ColorSlot::CheckMark, Rgba::new(0.86, 0.86, 0.86, 1.0)),
                (ColorSlot::SliderGrab, Rgba::new(0.54, 0.54, 0.54, 1.0)),
                (ColorSlot::SliderGrabActive, Rgba::new(0.67, 0.67, 0.67, 1.0)),
                (ColorSlot::Button, Rgba::new(0.71, 0.71, 0.71, 0.4)),
                (ColorSlot::ButtonHovered, Rgba::new(0.47, 0.47, 0.47, 1.0)),
                (ColorSlot::ButtonActive, Rgba::new(0.74, 0.74, 0.74, 1.0)),
                (ColorSlot::Header, Rgba::new(0.59, 0.59, 0.59, 0.31)),
                (ColorSlot::HeaderHovered, Rgba::new(0.5, 0.5, 0.5, 0.8)),
                (ColorSlot::HeaderActive, Rgba::new(0.6, 0.6, 0.6, 1.0)),
                (ColorSlot::Separator, Rgba::new(0.43, 0.43, 0.5, 0.5)),
                (ColorSlot::SeparatorHovered, Rgba::new(0.1, 0.4, 0.75, 0.78)),
                (ColorSlot::SeparatorActive, Rgba::new(0.1, 0.4, 0.75, 1.0)),
                (ColorSlot::ResizeGrip, Rgba::new(0.79, 0.79, 0.79, 0.25)),
                (ColorSlot::ResizeGripHovered, Rgba::new(0.78, 0.78, 0.78, 0.67)),
                (ColorSlot::ResizeGripActive, Rgba::new(0.88, 0.88, 0.88, 0.95)),
                (ColorSlot::Tab, Rgba::new(0.23, 0.23, 0.23, 0.86)),
                (ColorSlot::TabHovered, Rgba::new(0.71, 0.71, 0.71, 0.8)),
                (ColorSlot::TabActive, Rgba::new(0.36, 0.36, 0.36, 1.0)),
                (
                    ColorSlot::TabUnfocused,
                    Rgba::new(0.068, 0.10199998, 0.14800003, 0.9724),
                ),
                (
                    ColorSlot::TabUnfocusedActive,
                    Rgba::new(0.13599998, 0.26199996, 0.424, 1.0),
                ),
                (ColorSlot::DockingPreview, Rgba::new(0.26, 0.59, 0.98, 0.7)),
                (ColorSlot::DockingEmptyBg, Rgba::new(0.2, 0.2, 0.2, 1.0)),
                (ColorSlot::PlotLines, Rgba::new(0.61, 0.61, 0.61, 1.0)),
                (ColorSlot::PlotLinesHovered, Rgba::new(1.0, 0.43, 0.35, 1.0)),
                (ColorSlot::PlotHistogram, Rgba::new(0.9, 0.7, 0.0, 1.0)),
                (ColorSlot::PlotHistogramHovered, Rgba::new(1.0, 0.6, 0.0, 1.0)),
                (ColorSlot::TableHeaderBg, Rgba::new(0.19, 0.19, 0.2, 1.0)),
                (ColorSlot::TableBorderStrong, Rgba::new(0.31, 0.31, 0.35, 1.0)),
                (ColorSlot::TableBorderLight, Rgba::new(0.23, 0.23, 0.25, 1.0)),
                (ColorSlot::TableRowBg, Rgba::new(0.0, 0.0, 0.0, 0.0)),
                (ColorSlot::TableRowBgAlt, Rgba::new(1.0, 1.0, 1.0, 0.06)),
                (ColorSlot::TextSelectedBg, Rgba::new(0.26, 0.59, 0.98, 0.35)),
                (ColorSlot::DragDropTarget, Rgba::new(1.0, 1.0, 0.0, 0.9)),
                (ColorSlot::NavHighlight, Rgba::new(0.26, 0.59, 0.98, 1.0)),
                (
                    ColorSlot::NavWindowingHighlight,
                    Rgba::new(1.0, 1.0, 1.0, 0.7),
                ),
                (ColorSlot::NavWindowingDimBg, Rgba::new(0.8, 0.8, 0.8, 0.2)),
                (ColorSlot::ModalWindowDimBg, Rgba::new(0.8, 0.8, 0.8, 0.35)),
            ]),
            ..Self::standard()
        }
    }
}

fn color_map(entries: &[(ColorSlot, Rgba)]) -> BTreeMap<ColorSlot, Rgba> {
    entries.iter().copied().collect()
}
