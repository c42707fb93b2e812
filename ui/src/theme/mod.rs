//! # Interface Themes
//!
//! The structural look of the application: which stylesheet is loaded,
//! which palette the widgets get, and which semantic colors every theme
//! writes on entry.
//!
//! ## Components
//!
//! - **[`INTERFACE_THEMES`]** - Native, Dark and Light, in selection-index order
//! - **[`ThemeLoader`]** - Applies a theme's stylesheet and palette to a [`ThemeHost`]
//!   and returns its semantic color overrides
//! - **[`ThemeHost`]** - The widget toolkit seam; [`HeadlessHost`] records calls
//! - **[`ResourceProvider`]** - Stylesheet and logo lookup by resource id
//!
//! ## Index Fallback
//!
//! Selection indices outside the registry resolve to Native:
//!
//! ```no_run
//! use cutlass::theme::registry;
//!
//! let (index, theme) = registry::resolve(7).into_inner();
//! assert_eq!(index, 0);
//! assert_eq!(theme.name, "Native");
//! ```
//!
//! ## Missing Resources
//!
//! A missing stylesheet is logged and skipped. The palette tweak that goes
//! with it is skipped as well, but the theme's color table is still written.

pub mod host;
pub mod loader;
pub mod palettes;
pub mod registry;
pub mod resources;
pub mod types;
pub mod validation;

pub use host::{HeadlessHost, ThemeHost};
pub use loader::{AppliedTheme, ThemeLoader, is_dark_window};
pub use registry::INTERFACE_THEMES;
pub use resources::{DirectoryResources, MemoryResources, ResourceProvider};
pub use types::{Appearance, InterfaceTheme, InterfaceThemeKind, Palette};
