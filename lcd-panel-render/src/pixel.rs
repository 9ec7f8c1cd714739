//! A single lit/unlit dot of a character panel.
//!
//! Logical state (`is_on`) and visual state (the drawable's fill) are kept
//! apart: `switch` only marks the pixel dirty, `refresh` commits it. Shifting,
//! visibility and blink masking on the other hand are applied immediately.

use crate::backend::{CanvasRepr, DrawAttributes, Drawable, ShapeKind};
use crate::bitmap::SwitchValue;
use lcd_panel_config::Color;

/// Brightness every pixel is created with. Stored, not yet applied.
pub const DEFAULT_BRIGHTNESS: u8 = 100;

/// Static geometry and colors of a pixel, known before its drawable exists.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelSpec {
    /// (row, col) of the owning panel in the display
    pub parent_index: (usize, usize),
    /// (row, col) inside the panel grid
    pub index: (usize, usize),
    pub pos_x: f32,
    pub pos_y: f32,
    /// Display origin
    pub lcd_x: f32,
    pub lcd_y: f32,
    pub width: f32,
    pub height: f32,
    pub dim_color: Color,
    pub glow_color: Color,
}

impl PixelSpec {
    /// Stable shape name, `G:<panel row>:<panel col>:<row>:<col>`.
    pub fn name(&self) -> String {
        format!(
            "G:{}:{}:{}:{}",
            self.parent_index.0, self.parent_index.1, self.index.0, self.index.1
        )
    }

    /// Description of a freshly created (switched-off) pixel.
    pub fn canvas_repr(&self) -> CanvasRepr {
        CanvasRepr {
            name: self.name(),
            kind: ShapeKind::Rectangle,
            width: self.width,
            height: self.height,
            x: self.pos_x + self.lcd_x,
            y: self.pos_y + self.lcd_y,
            fill: self.dim_color,
        }
    }
}

pub struct Pixel {
    spec: PixelSpec,
    is_on: bool,
    brightness: u8,
    hidden: bool,
    blink_hidden: bool,
    changes_pending: bool,
    drawable: Box<dyn Drawable>,
}

impl Pixel {
    /// Attach a drawable created from `spec.canvas_repr()`.
    pub fn new(spec: PixelSpec, drawable: Box<dyn Drawable>) -> Self {
        Self {
            spec,
            is_on: false,
            brightness: DEFAULT_BRIGHTNESS,
            hidden: false,
            blink_hidden: false,
            changes_pending: false,
            drawable,
        }
    }

    pub fn spec(&self) -> &PixelSpec {
        &self.spec
    }

    pub fn name(&self) -> String {
        self.spec.name()
    }

    pub fn index(&self) -> (usize, usize) {
        self.spec.index
    }

    pub fn parent_index(&self) -> (usize, usize) {
        self.spec.parent_index
    }

    pub fn pos_x(&self) -> f32 {
        self.spec.pos_x
    }

    pub fn pos_y(&self) -> f32 {
        self.spec.pos_y
    }

    /// Absolute x on the canvas.
    pub fn canvas_x(&self) -> f32 {
        self.spec.pos_x + self.spec.lcd_x
    }

    /// Absolute y on the canvas.
    pub fn canvas_y(&self) -> f32 {
        self.spec.pos_y + self.spec.lcd_y
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_blink_hidden(&self) -> bool {
        self.blink_hidden
    }

    pub fn has_pending_changes(&self) -> bool {
        self.changes_pending
    }

    /// Set the logical state. Only marks the pixel dirty when the state
    /// actually changes; nothing is drawn until [`Pixel::refresh`].
    pub fn switch(&mut self, value: impl SwitchValue) {
        let lit = value.is_lit();
        if lit != self.is_on {
            self.is_on = lit;
            // a second flip back before refresh cancels the pending commit
            self.changes_pending = !self.changes_pending;
        }
    }

    pub fn color(&self) -> Color {
        if self.is_on {
            self.spec.glow_color
        } else {
            self.spec.dim_color
        }
    }

    pub fn canvas_repr(&self) -> CanvasRepr {
        CanvasRepr {
            fill: self.color(),
            ..self.spec.canvas_repr()
        }
    }

    pub fn show(&mut self) {
        self.hidden = false;
        self.drawable.show();
    }

    pub fn hide(&mut self) {
        self.hidden = true;
        self.drawable.hide();
    }

    /// Mask the pixel with the blank color without touching `is_on`.
    pub fn blink_on(&mut self) {
        self.blink_hidden = true;
        self.drawable.set_attributes(&DrawAttributes::fill(Color::BLANK));
    }

    /// Undo [`Pixel::blink_on`]. No-op unless currently masked.
    pub fn blink_off(&mut self) {
        if !self.blink_hidden {
            return;
        }
        self.drawable.set_attributes(&DrawAttributes::fill(self.color()));
        self.blink_hidden = false;
    }

    /// Commit pending changes to the drawable. Returns whether anything was
    /// drawn.
    pub fn refresh(&mut self) -> bool {
        if !self.changes_pending {
            return false;
        }
        self.drawable.set_attributes(&DrawAttributes::placed(
            self.canvas_x(),
            self.canvas_y(),
            self.color(),
        ));
        self.changes_pending = false;
        true
    }

    /// Move horizontally, applied to the drawable right away, then bring
    /// visibility in line with `hidden`.
    pub fn shift(&mut self, distance: f32, hidden: bool) {
        self.spec.pos_x += distance;
        self.drawable.set_attributes(&DrawAttributes::x(self.canvas_x()));

        if self.hidden != hidden {
            if hidden {
                self.hide();
            } else {
                self.show();
            }
        }
    }
}

impl std::fmt::Debug for Pixel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pixel")
            .field("name", &self.name())
            .field("is_on", &self.is_on)
            .field("hidden", &self.hidden)
            .field("blink_hidden", &self.blink_hidden)
            .field("changes_pending", &self.changes_pending)
            .finish_non_exhaustive()
    }
}
