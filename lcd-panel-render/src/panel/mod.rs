//! One character cell of the LCD.
//!
//! A `CharacterPanel` owns a `rows x columns` grid of [`Pixel`]s. The top
//! `rows - 1` rows show the glyph; the bottom row is reserved for the cursor
//! bar and is only ever written through [`CharacterPanel::change_cursor_display`].
//!
//! Blinking runs on a tokio task that shares the grid through an
//! `Arc<Mutex<_>>`. Every path that cancels blinking (`set_blinking(false)`,
//! hiding the cursor, `clear`) releases the task and unmasks all pixels.

mod blink;
mod grid;
mod layout;

pub use blink::BlinkTimer;
pub use grid::PixelGrid;
pub use layout::PanelLayout;

use crate::backend::{CanvasRepr, DrawableFactory};
use crate::bitmap::{Bitmap, BitmapSource, BlankBitmaps};
use crate::error::RenderError;
use crate::pixel::Pixel;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

pub struct CharacterPanel {
    layout: PanelLayout,
    contains_cursor: bool,
    grid: Arc<Mutex<PixelGrid>>,
    blink: BlinkTimer,
    bitmaps: Box<dyn BitmapSource>,
}

impl CharacterPanel {
    /// Build the panel and create one drawable per pixel through `factory`.
    pub fn new(
        layout: PanelLayout,
        factory: &mut dyn DrawableFactory,
    ) -> Result<Self, RenderError> {
        layout.config.validate()?;

        let grid = Self::initialise_pixels(&layout, factory)?;
        let blink = BlinkTimer::new(layout.config.blink_interval());

        Ok(Self {
            layout,
            contains_cursor: false,
            grid: Arc::new(Mutex::new(grid)),
            blink,
            bitmaps: Box::new(BlankBitmaps),
        })
    }

    /// Replace the source `clear` takes its blank glyph from.
    pub fn with_bitmap_source(mut self, source: impl BitmapSource + 'static) -> Self {
        self.bitmaps = Box::new(source);
        self
    }

    // Describe the grid, let the backend create every shape in one batch, then
    // hand each pixel its drawable.
    fn initialise_pixels(
        layout: &PanelLayout,
        factory: &mut dyn DrawableFactory,
    ) -> Result<PixelGrid, RenderError> {
        let specs = layout.pixel_specs();
        let reprs: Vec<CanvasRepr> = specs.iter().map(|spec| spec.canvas_repr()).collect();

        let drawables = factory.create_batch(&reprs);
        if drawables.len() != specs.len() {
            return Err(RenderError::BatchSize {
                expected: specs.len(),
                actual: drawables.len(),
            });
        }

        let pixels = specs
            .into_iter()
            .zip(drawables)
            .map(|(spec, drawable)| Pixel::new(spec, drawable))
            .collect();

        log::debug!(
            "Panel {:?}: created {}x{} pixel grid",
            layout.index,
            layout.config.rows,
            layout.config.columns
        );

        Ok(PixelGrid::new(layout.config.rows, layout.config.columns, pixels))
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    pub fn index(&self) -> (usize, usize) {
        self.layout.index
    }

    pub fn rows(&self) -> usize {
        self.layout.config.rows
    }

    pub fn columns(&self) -> usize {
        self.layout.config.columns
    }

    pub fn pos_x(&self) -> f32 {
        self.layout.pos_x
    }

    pub fn pos_y(&self) -> f32 {
        self.layout.pos_y
    }

    pub fn is_hidden(&self) -> bool {
        self.layout.hidden
    }

    /// Mark the panel as scrolled in or out of view. Takes effect on the
    /// pixels at the next [`CharacterPanel::shift`].
    pub fn set_hidden(&mut self, hidden: bool) {
        self.layout.hidden = hidden;
    }

    pub fn contains_cursor(&self) -> bool {
        self.contains_cursor
    }

    pub fn is_blinking(&self) -> bool {
        self.blink.is_running()
    }

    /// Lock the pixel grid for inspection or direct pixel access.
    pub fn grid(&self) -> MutexGuard<'_, PixelGrid> {
        self.grid.lock()
    }

    fn cursor_row(&self) -> usize {
        self.rows() - 1
    }

    /// Switch the glyph rows to `bitmap`. The bitmap must be exactly
    /// `(rows - 1) x columns`; nothing is switched otherwise. Does not
    /// refresh.
    pub fn draw_character(&mut self, bitmap: &Bitmap) -> Result<(), RenderError> {
        let expected_rows = self.cursor_row();
        let expected_columns = self.columns();
        if bitmap.rows() != expected_rows || bitmap.columns() != expected_columns {
            log::warn!(
                "Panel {:?}: rejected {}x{} bitmap",
                self.layout.index,
                bitmap.rows(),
                bitmap.columns()
            );
            return Err(RenderError::ShapeMismatch {
                expected_rows,
                expected_columns,
                rows: bitmap.rows(),
                columns: bitmap.columns(),
            });
        }

        let mut grid = self.grid.lock();
        for (row, bits) in bitmap.iter_rows().enumerate() {
            for (pixel, &lit) in grid.row_mut(row).iter_mut().zip(bits) {
                pixel.switch(lit);
            }
        }
        Ok(())
    }

    /// Commit every dirty pixel. Returns how many were drawn.
    pub fn refresh(&mut self) -> usize {
        let drawn = self.grid.lock().refresh();
        log::trace!("Panel {:?}: refreshed {} pixels", self.layout.index, drawn);
        drawn
    }

    /// Cursor off, blank glyph, immediate refresh, blinking stopped.
    pub fn clear(&mut self) -> Result<(), RenderError> {
        self.change_cursor_display(false);
        let blank = self.bitmaps.blank(self.cursor_row(), self.columns());
        let drawn = self.draw_character(&blank);
        self.refresh();
        self.set_blinking(false)?;
        drawn
    }

    /// Light or darken the whole cursor row. Returns whether the cursor
    /// changed. Hiding the cursor also stops blinking, even when the cursor
    /// was already hidden.
    pub fn change_cursor_display(&mut self, show: bool) -> bool {
        if !show {
            self.stop_blinking();
        }
        if self.contains_cursor == show {
            return false;
        }

        let cursor_row = self.cursor_row();
        {
            let mut grid = self.grid.lock();
            for pixel in grid.row_mut(cursor_row) {
                pixel.switch(show);
            }
        }
        self.contains_cursor = show;
        log::debug!(
            "Panel {:?}: cursor {}",
            self.layout.index,
            if show { "shown" } else { "hidden" }
        );
        true
    }

    /// Start or stop the blink animation.
    ///
    /// Starting needs a tokio runtime and is a no-op while already blinking.
    /// Stopping never fails and always leaves every pixel unmasked.
    pub fn set_blinking(&mut self, blinking: bool) -> Result<(), RenderError> {
        if !blinking {
            self.stop_blinking();
            return Ok(());
        }

        if self.blink.is_running() {
            log::warn!(
                "Panel {:?}: blinking already active, keeping existing timer",
                self.layout.index
            );
            return Ok(());
        }

        let grid = Arc::clone(&self.grid);
        self.blink.start(move || {
            let mut grid = grid.lock();
            if grid.blink_active {
                grid.toggle_blink();
            }
        })?;
        self.grid.lock().blink_active = true;

        log::debug!(
            "Panel {:?}: blinking every {:?}",
            self.layout.index,
            self.blink.period()
        );
        Ok(())
    }

    fn stop_blinking(&mut self) {
        let was_running = self.blink.stop();
        let mut grid = self.grid.lock();
        grid.blink_active = false;
        grid.unmask_all();
        if was_running {
            log::debug!("Panel {:?}: blinking stopped", self.layout.index);
        }
    }

    /// Advance the blink animation by one step. For hosts that drive
    /// animation from their own frame loop instead of the timer.
    pub fn blink_tick(&mut self) {
        log::trace!("Panel {:?}: blink tick", self.layout.index);
        self.grid.lock().toggle_blink();
    }

    /// Scroll the panel horizontally. Every pixel moves right away and takes
    /// on the panel's hidden flag.
    pub fn shift(&mut self, distance: f32) {
        self.layout.pos_x += distance;
        let hidden = self.layout.hidden;
        for pixel in self.grid.lock().iter_mut() {
            pixel.shift(distance, hidden);
        }
    }

    /// Creation descriptions of every pixel, row-major.
    pub fn canvas_repr(&self) -> Vec<CanvasRepr> {
        self.grid.lock().canvas_repr()
    }
}

impl std::fmt::Debug for CharacterPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterPanel")
            .field("index", &self.layout.index)
            .field("rows", &self.rows())
            .field("columns", &self.columns())
            .field("hidden", &self.layout.hidden)
            .field("contains_cursor", &self.contains_cursor)
            .field("blinking", &self.is_blinking())
            .finish_non_exhaustive()
    }
}
