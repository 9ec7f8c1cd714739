//! Typed error types for lcd-panel-render.
//!
//! The engine trusts its own state; these errors cover data handed in from
//! outside (bitmaps, drawing backends, layouts) and the ambient runtime.

use thiserror::Error;

/// Top-level error type for the panel rendering engine.
#[derive(Debug, Error)]
pub enum RenderError {
    // -----------------------------------------------------------------------
    // Bitmap input
    // -----------------------------------------------------------------------
    /// A bitmap does not match the glyph area of the panel it was drawn on.
    #[error(
        "bitmap shape mismatch: expected {expected_rows}x{expected_columns}, got {rows}x{columns}"
    )]
    ShapeMismatch {
        /// Glyph rows of the panel (cursor row excluded).
        expected_rows: usize,
        /// Columns of the panel.
        expected_columns: usize,
        /// Rows of the supplied bitmap.
        rows: usize,
        /// Columns of the supplied bitmap (of its widest row).
        columns: usize,
    },

    /// A bitmap row has a different width than the first row.
    #[error("ragged bitmap: row {row} has {actual} columns, expected {expected}")]
    RaggedBitmap {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },

    /// Bitmap text contained something other than `0`, `1` or whitespace.
    #[error("invalid bitmap character {found:?} on line {line}")]
    BitmapSyntax {
        /// One-based line number.
        line: usize,
        /// The rejected character.
        found: char,
    },

    // -----------------------------------------------------------------------
    // Backend
    // -----------------------------------------------------------------------
    /// The drawable factory returned a different number of shapes than were
    /// described.
    #[error("drawable batch size mismatch: described {expected} shapes, backend created {actual}")]
    BatchSize {
        /// Number of canvas descriptions passed to the factory.
        expected: usize,
        /// Number of drawables it returned.
        actual: usize,
    },

    // -----------------------------------------------------------------------
    // Layout / runtime
    // -----------------------------------------------------------------------
    /// The panel configuration cannot produce a valid grid.
    #[error("invalid panel layout: {0}")]
    Layout(#[from] lcd_panel_config::ConfigError),

    /// Blinking was requested outside of a tokio runtime.
    #[error("blink timer requires a running tokio runtime")]
    NoRuntime,
}
