//! Semantic color overrides written by each interface theme on entry.
//!
//! Keys live in the `colors.` namespace of the settings store.

use engine::Rgba;

pub type ColorTable = &'static [(&'static str, Rgba)];

/// Written for Native before the light/dark branch.
pub const NATIVE_BASE: ColorTable = &[
    ("gui.cflow", Rgba::rgb(0, 0, 0)),
    ("gui.imports", Rgba::rgb(50, 140, 255)),
    ("gui.main", Rgba::rgb(0, 128, 0)),
    ("gui.navbar.seek", Rgba::rgb(255, 0, 0)),
    ("gui.navbar.pc", Rgba::rgb(66, 238, 244)),
    ("gui.navbar.code", Rgba::rgb(104, 229, 69)),
    ("gui.navbar.str", Rgba::rgb(69, 104, 229)),
    ("gui.navbar.sym", Rgba::rgb(229, 150, 69)),
    ("gui.navbar.empty", Rgba::rgb(100, 100, 100)),
    ("gui.breakpoint_background", Rgba::rgb(233, 143, 143)),
    ("gui.item_invalid", Rgba::rgb(155, 155, 155)),
    ("gui.item_unsafe", Rgba::rgb(255, 129, 123)),
    ("gui.overview.node", Rgba::rgb(200, 200, 200)),
    ("gui.tooltip.background", Rgba::rgb(250, 252, 254)),
    ("gui.tooltip.foreground", Rgba::rgb(42, 44, 46)),
];

/// Native on a dark window.
pub const NATIVE_DARK: ColorTable = &[
    ("gui.border", Rgba::rgb(0, 0, 0)),
    ("gui.background", Rgba::rgb(30, 30, 30)),
    ("gui.alt_background", Rgba::rgb(42, 42, 42)),
    ("gui.disass_selected", Rgba::rgb(35, 35, 35)),
    ("lineHighlight", Rgba::new(255, 255, 255, 15)),
    ("wordHighlight", Rgba::new(20, 20, 20, 255)),
    ("highlightPC", Rgba::rgb(87, 26, 7)),
    ("gui.tooltip.background", Rgba::rgb(42, 44, 46)),
    ("gui.tooltip.foreground", Rgba::rgb(250, 252, 254)),
    ("gui.dataoffset", Rgba::rgb(255, 255, 255)),
    ("gui.overview.fill", Rgba::new(255, 255, 255, 40)),
    ("gui.overview.border", Rgba::new(99, 218, 232, 50)),
];

/// Native on a light window.
pub const NATIVE_LIGHT: ColorTable = &[
    ("gui.border", Rgba::rgb(0, 0, 0)),
    ("gui.background", Rgba::rgb(255, 255, 255)),
    ("gui.alt_background", Rgba::rgb(245, 250, 255)),
    ("gui.disass_selected", Rgba::rgb(255, 255, 255)),
    ("lineHighlight", Rgba::new(210, 210, 255, 150)),
    ("wordHighlight", Rgba::new(179, 119, 214, 60)),
    ("highlightPC", Rgba::rgb(214, 255, 210)),
    ("gui.dataoffset", Rgba::rgb(0, 0, 0)),
    ("gui.overview.fill", Rgba::new(175, 217, 234, 65)),
    ("gui.overview.border", Rgba::new(99, 218, 232, 50)),
];

pub const DARK_BASE: ColorTable = &[
    ("gui.cflow", Rgba::rgb(255, 255, 255)),
    ("gui.dataoffset", Rgba::rgb(255, 255, 255)),
    ("gui.imports", Rgba::rgb(50, 140, 255)),
    ("gui.item_invalid", Rgba::rgb(155, 155, 155)),
    ("gui.item_unsafe", Rgba::rgb(255, 129, 123)),
    ("gui.main", Rgba::rgb(0, 128, 0)),
    // navbar
    ("gui.navbar.seek", Rgba::rgb(233, 86, 86)),
    ("gui.navbar.pc", Rgba::rgb(66, 238, 244)),
    ("gui.navbar.code", Rgba::rgb(130, 200, 111)),
    ("gui.navbar.str", Rgba::rgb(111, 134, 216)),
    ("gui.navbar.sym", Rgba::rgb(221, 163, 104)),
    ("gui.navbar.empty", Rgba::rgb(100, 100, 100)),
    // debugger PC line
    ("highlightPC", Rgba::rgb(87, 26, 7)),
    ("gui.breakpoint_background", Rgba::rgb(140, 76, 76)),
    ("gui.overview.node", Rgba::rgb(100, 100, 100)),
    ("gui.overview.fill", Rgba::new(255, 255, 255, 40)),
    ("gui.overview.border", Rgba::new(99, 218, 232, 50)),
];

/// Written after [`DARK_BASE`].
pub const DARK: ColorTable = &[
    ("gui.border", Rgba::rgb(100, 100, 100)),
    ("gui.background", Rgba::rgb(37, 40, 43)),
    ("gui.alt_background", Rgba::rgb(28, 31, 36)),
    ("gui.disass_selected", Rgba::rgb(31, 34, 40)),
    ("gui.tooltip.background", Rgba::rgb(42, 44, 46)),
    ("gui.tooltip.foreground", Rgba::rgb(250, 252, 254)),
    ("lineHighlight", Rgba::new(21, 29, 29, 150)),
    ("wordHighlight", Rgba::new(52, 58, 71, 255)),
];

pub const LIGHT: ColorTable = &[
    ("gui.border", Rgba::rgb(145, 200, 250)),
    ("gui.background", Rgba::rgb(255, 255, 255)),
    ("gui.alt_background", Rgba::rgb(245, 250, 255)),
    ("gui.disass_selected", Rgba::rgb(255, 255, 255)),
    ("lineHighlight", Rgba::new(210, 210, 255, 150)),
    ("wordHighlight", Rgba::new(179, 119, 214, 60)),
    ("highlightPC", Rgba::rgb(214, 255, 210)),
    ("gui.navbar.empty", Rgba::rgb(220, 236, 245)),
    ("gui.navbar.err", Rgba::rgb(3, 170, 245)),
    ("gui.tooltip.background", Rgba::rgb(250, 252, 254)),
    ("gui.tooltip.foreground", Rgba::rgb(42, 44, 46)),
    ("gui.overview.node", Rgba::rgb(245, 250, 255)),
    ("gui.overview.fill", Rgba::new(175, 217, 234, 65)),
    ("gui.overview.border", Rgba::new(99, 218, 232, 50)),
];
