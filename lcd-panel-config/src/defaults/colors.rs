//! Default pixel colors.

use crate::types::Color;

// Unlit dot, pale backlight green
pub fn bar_color() -> Color {
    Color::new(0x8f, 0xb4, 0x3a)
}

// Lit dot, near-black
pub fn bar_glow_color() -> Color {
    Color::new(0x1a, 0x26, 0x00)
}
