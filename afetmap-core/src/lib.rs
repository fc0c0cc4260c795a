//! # afetmap-core
//!
//! Presentation logic of the location drawer that does not depend
//! on any UI framework.

use std::time::Duration;

pub mod coords;
pub mod drawer;
pub mod labels;
pub mod links;
pub mod panel;

pub use afetmap_entities as entities;

use self::labels::Language;

/// Viewports wider than this (in CSS pixels) show the drawer on the left side.
pub const DEFAULT_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_PANEL_WIDTH_PX: u32 = 400;
pub const DEFAULT_SNACKBAR_AUTO_HIDE: Duration = Duration::from_millis(2_000);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerConfig {
    pub breakpoint_px: f64,
    pub panel_width_px: u32,
    pub snackbar_auto_hide: Duration,
    pub language: Language,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            panel_width_px: DEFAULT_PANEL_WIDTH_PX,
            snackbar_auto_hide: DEFAULT_SNACKBAR_AUTO_HIDE,
            language: Language::default(),
        }
    }
}
