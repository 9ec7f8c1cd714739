//! Placement of one character panel inside a display.

use crate::pixel::PixelSpec;
use lcd_panel_config::PanelConfig;

/// Everything needed to build a `CharacterPanel`: the shared grid config plus
/// where this particular cell sits.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub config: PanelConfig,
    /// (row, col) of this panel in the display matrix
    pub index: (usize, usize),
    /// Top-left of the panel, relative to the display origin
    pub pos_x: f32,
    pub pos_y: f32,
    /// Display origin on the canvas
    pub lcd_x: f32,
    pub lcd_y: f32,
    // Visible-window bookkeeping for scrolling displays. Carried for the
    // display's benefit; the panel never reads it.
    pub display_start_index: (usize, usize),
    pub display_end_index: (usize, usize),
    pub display_index: (usize, usize),
    /// Whether the panel starts scrolled out of view
    pub hidden: bool,
}

impl PanelLayout {
    pub fn new(config: PanelConfig, index: (usize, usize)) -> Self {
        Self {
            config,
            index,
            pos_x: 0.0,
            pos_y: 0.0,
            lcd_x: 0.0,
            lcd_y: 0.0,
            display_start_index: (0, 0),
            display_end_index: (0, 0),
            display_index: index,
            hidden: false,
        }
    }

    pub fn at(mut self, pos_x: f32, pos_y: f32) -> Self {
        self.pos_x = pos_x;
        self.pos_y = pos_y;
        self
    }

    pub fn with_display_origin(mut self, lcd_x: f32, lcd_y: f32) -> Self {
        self.lcd_x = lcd_x;
        self.lcd_y = lcd_y;
        self
    }

    pub fn with_display_window(
        mut self,
        start: (usize, usize),
        end: (usize, usize),
        display_index: (usize, usize),
    ) -> Self {
        self.display_start_index = start;
        self.display_end_index = end;
        self.display_index = display_index;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Pixel geometry in row-major order, starting at the panel's top-left and
    /// stepping by pixel size plus spacing on both axes.
    pub fn pixel_specs(&self) -> Vec<PixelSpec> {
        let config = &self.config;
        let mut specs = Vec::with_capacity(config.rows * config.columns);

        let mut pos_y = self.pos_y;
        for row in 0..config.rows {
            let mut pos_x = self.pos_x;
            for col in 0..config.columns {
                specs.push(PixelSpec {
                    parent_index: self.index,
                    index: (row, col),
                    pos_x,
                    pos_y,
                    lcd_x: self.lcd_x,
                    lcd_y: self.lcd_y,
                    width: config.pixel_width,
                    height: config.pixel_height,
                    dim_color: config.bar_color,
                    glow_color: config.bar_glow_color,
                });
                pos_x += config.step_x();
            }
            pos_y += config.step_y();
        }

        specs
    }
}
