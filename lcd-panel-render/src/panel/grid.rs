//! Fixed-size pixel matrix owned by one panel.

use crate::backend::CanvasRepr;
use crate::pixel::Pixel;

/// `rows x columns` pixels in row-major order. Never resized.
#[derive(Debug)]
pub struct PixelGrid {
    rows: usize,
    columns: usize,
    pixels: Vec<Pixel>,
    /// Set while the periodic blink task is allowed to toggle pixels.
    /// Read under the same lock as the pixels, so a tick that lost the race
    /// against `stop` sees `false` and leaves the grid alone.
    pub(crate) blink_active: bool,
}

impl PixelGrid {
    /// `pixels` must hold exactly `rows * columns` entries in row-major order.
    pub(crate) fn new(rows: usize, columns: usize, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(pixels.len(), rows * columns);
        Self {
            rows,
            columns,
            pixels,
            blink_active: false,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn pixel(&self, row: usize, col: usize) -> Option<&Pixel> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.pixels.get(row * self.columns + col)
    }

    pub fn pixel_mut(&mut self, row: usize, col: usize) -> Option<&mut Pixel> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.pixels.get_mut(row * self.columns + col)
    }

    /// All pixels, row-major.
    pub fn iter(&self) -> impl Iterator<Item = &Pixel> {
        self.pixels.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Pixel> {
        self.pixels.iter_mut()
    }

    /// One row of pixels.
    pub fn row(&self, row: usize) -> &[Pixel] {
        let start = row.min(self.rows) * self.columns;
        let end = (row + 1).min(self.rows) * self.columns;
        &self.pixels[start..end]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [Pixel] {
        let start = row.min(self.rows) * self.columns;
        let end = (row + 1).min(self.rows) * self.columns;
        &mut self.pixels[start..end]
    }

    /// Commit every dirty pixel. Returns how many were drawn.
    pub fn refresh(&mut self) -> usize {
        self.pixels.iter_mut().map(Pixel::refresh).filter(|drawn| *drawn).count()
    }

    /// Flip every pixel between masked and true color, each according to its
    /// own blink flag.
    pub fn toggle_blink(&mut self) {
        for pixel in &mut self.pixels {
            if pixel.is_blink_hidden() {
                pixel.blink_off();
            } else {
                pixel.blink_on();
            }
        }
    }

    /// Restore the true color of every masked pixel.
    pub fn unmask_all(&mut self) {
        for pixel in &mut self.pixels {
            pixel.blink_off();
        }
    }

    pub fn canvas_repr(&self) -> Vec<CanvasRepr> {
        self.pixels.iter().map(Pixel::canvas_repr).collect()
    }
}
