//! Simulated LCD character panels for circuit simulation front ends.
//!
//! Facade over the workspace crates plus an in-memory backend:
//!
//! - [`config`]: panel geometry, colors and blink rate (`lcd-panel-config`)
//! - [`render`]: pixels, character panels and the blink engine
//!   (`lcd-panel-render`)
//! - [`headless`]: a `DrawableFactory` that records shape state in memory
//!
//! ```no_run
//! use lcd_panel::headless::HeadlessCanvas;
//! use lcd_panel::{Bitmap, CharacterPanel, PanelConfig, PanelLayout};
//!
//! # fn main() -> Result<(), lcd_panel::RenderError> {
//! let mut canvas = HeadlessCanvas::new();
//! let layout = PanelLayout::new(PanelConfig::new().with_grid(2, 5), (0, 0));
//! let mut panel = CharacterPanel::new(layout, &mut canvas)?;
//! panel.draw_character(&Bitmap::parse("10101")?)?;
//! panel.refresh();
//! # Ok(())
//! # }
//! ```

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod headless;

pub mod config {
    //! Configuration re-exports from the lcd-panel-config crate.
    pub use lcd_panel_config::{Color, ColorParseError, ConfigError, PanelConfig, defaults};
}

pub mod render {
    //! Engine re-exports from the lcd-panel-render crate.
    pub use lcd_panel_render::{
        Bitmap, BitmapSource, BlankBitmaps, BlinkTimer, CanvasRepr, CharacterPanel,
        DrawAttributes, Drawable, DrawableFactory, PanelLayout, Pixel, PixelGrid, PixelSpec,
        RenderError, ShapeKind, SwitchValue,
    };
}

pub use config::{Color, ConfigError, PanelConfig};
pub use render::{
    Bitmap, BitmapSource, CanvasRepr, CharacterPanel, Drawable, DrawableFactory, PanelLayout,
    Pixel, RenderError,
};
