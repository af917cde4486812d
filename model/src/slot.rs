//! The canonical table of rendering-library color slots.

use serde::{Serialize, Serializer};

// Single declaration site for the slot table: variants, iteration order,
// and wire spellings are all generated from the same list, so encode and
// decode cannot disagree about it.
macro_rules! color_slots {
    ($($slot:ident),+ $(,)?) => {
        /// A named slot in the rendering library's indexed color table.
        ///
        /// The library's trailing "count" pseudo-slot is not a variant;
        /// [`ColorSlot::ALL`] covers exactly the real slots, and
        /// [`ColorSlot::COUNT`] plays the array-sizing role.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum ColorSlot {
            $($slot,)+
        }

        impl ColorSlot {
            /// Every slot, in enumeration order.
            pub const ALL: [Self; color_slots!(@count $($slot),+)] = [$(Self::$slot,)+];

            /// Number of slots; sizes the live style's color array.
            pub const COUNT: usize = Self::ALL.len();

            /// The stable wire spelling of this slot.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$slot => stringify!($slot),)+
                }
            }

            /// Looks up a slot by its wire spelling.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($slot) => Some(Self::$slot),)+
                    _ => None,
                }
            }
        }
    };
    (@count $($slot:ident),+) => { 0usize $(+ color_slots!(@one $slot))+ };
    (@one $slot:ident) => { 1 };
}

color_slots! {
    Text,
    TextDisabled,
    WindowBg,
    ChildBg,
    PopupBg,
    Border,
    BorderShadow,
    FrameBg,
    FrameBgHovered,
    FrameBgActive,
    TitleBg,
    TitleBgActive,
    TitleBgCollapsed,
    MenuBarBg,
    ScrollbarBg,
    ScrollbarGrab,
    ScrollbarGrabHovered,
    ScrollbarGrabActive,
    CheckMark,
    SliderGrab,
    SliderGrabActive,
    Button,
    ButtonHovered,
    ButtonActive,
    Header,
    HeaderHovered,
    HeaderActive,
    Separator,
    SeparatorHovered,
    SeparatorActive,
    ResizeGrip,
    ResizeGripHovered,
    ResizeGripActive,
    Tab,
    TabHovered,
    TabActive,
    TabUnfocused,
    TabUnfocusedActive,
    DockingPreview,
    DockingEmptyBg,
    PlotLines,
    PlotLinesHovered,
    PlotHistogram,
    PlotHistogramHovered,
    TableHeaderBg,
    TableBorderStrong,
    TableBorderLight,
    TableRowBg,
    TableRowBgAlt,
    TextSelectedBg,
    DragDropTarget,
    NavHighlight,
    NavWindowingHighlight,
    NavWindowingDimBg,
    ModalWindowDimBg,
}

impl ColorSlot {
    /// Index into the live style's color array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Serialize for ColorSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
