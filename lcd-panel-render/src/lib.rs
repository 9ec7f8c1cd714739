//! Pixel-grid rendering and animation engine for simulated LCD character
//! panels (HD44780-style 5x8 cells).
//!
//! This crate provides:
//!
//! - `Pixel`: one dot with deferred on/off commits and immediate
//!   shift/visibility/blink-mask updates
//! - `CharacterPanel`: a grid of pixels with glyph drawing, cursor row,
//!   horizontal shifting and a timer-driven blink animation
//! - The `Drawable` / `DrawableFactory` seam to whatever draws the shapes
//! - `Bitmap` and the `BitmapSource` lookup consumed by `clear`

pub mod backend;
pub mod bitmap;
pub mod error;
pub mod panel;
pub mod pixel;

#[cfg(test)]
mod test_support;

// Re-export main public types
pub use backend::{CanvasRepr, DrawAttributes, Drawable, DrawableFactory, ShapeKind};
pub use bitmap::{Bitmap, BitmapSource, BlankBitmaps, SwitchValue};
pub use error::RenderError;
pub use panel::{BlinkTimer, CharacterPanel, PanelLayout, PixelGrid};
pub use pixel::{Pixel, PixelSpec};

// Re-export shared types from dependencies for convenience
pub use lcd_panel_config::{Color, PanelConfig};
