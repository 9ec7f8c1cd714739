//! Shared integration test helpers.
//!
//! Include with `mod common;` at the top of each test file. The
//! `#[allow(dead_code)]` keeps files that use only some helpers quiet.

#![allow(dead_code)]

use lcd_panel::headless::HeadlessCanvas;
use lcd_panel::{CharacterPanel, Color, PanelConfig, PanelLayout};

pub const DIM: Color = Color::new(0x8f, 0xb4, 0x3a);
pub const GLOW: Color = Color::new(0x1a, 0x26, 0x00);

/// 2-row x 5-column panel: one glyph row plus the cursor row.
pub fn small_config() -> PanelConfig {
    PanelConfig::new()
        .with_grid(2, 5)
        .with_pixel_size(2.0, 2.0)
        .with_intra_spacing(0.5)
        .with_colors(DIM, GLOW)
}

/// Build a panel on a fresh headless canvas.
///
/// The canvas shares its registry with the one the panel drew on, so it can
/// be inspected after every operation.
pub fn panel_on_canvas(layout: PanelLayout) -> (CharacterPanel, HeadlessCanvas) {
    let mut canvas = HeadlessCanvas::new();
    let panel = CharacterPanel::new(layout, &mut canvas).expect("Failed to build panel");
    (panel, canvas)
}

pub fn small_panel() -> (CharacterPanel, HeadlessCanvas) {
    panel_on_canvas(PanelLayout::new(small_config(), (0, 0)))
}
