//! Dot-matrix bitmaps and the values a pixel can be switched with.

use crate::error::RenderError;

/// A value that can switch a pixel on or off.
///
/// The contract is explicit: booleans map directly, integers are on when
/// nonzero, `'1'` is the only lit character, and strings are read as base-2
/// numbers (on when they parse to a nonzero value, off otherwise).
pub trait SwitchValue {
    fn is_lit(&self) -> bool;
}

impl SwitchValue for bool {
    fn is_lit(&self) -> bool {
        *self
    }
}

macro_rules! impl_switch_value_for_int {
    ($($t:ty),*) => {
        $(
            impl SwitchValue for $t {
                fn is_lit(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_switch_value_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

impl SwitchValue for char {
    fn is_lit(&self) -> bool {
        *self == '1'
    }
}

impl SwitchValue for str {
    fn is_lit(&self) -> bool {
        u64::from_str_radix(self.trim(), 2).is_ok_and(|v| v != 0)
    }
}

impl SwitchValue for String {
    fn is_lit(&self) -> bool {
        self.as_str().is_lit()
    }
}

impl<T: SwitchValue + ?Sized> SwitchValue for &T {
    fn is_lit(&self) -> bool {
        (**self).is_lit()
    }
}

/// Row-major matrix of lit/unlit dots for one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    rows: usize,
    columns: usize,
    bits: Vec<bool>,
}

impl Bitmap {
    /// All-dark bitmap.
    pub fn blank(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            bits: vec![false; rows * columns],
        }
    }

    /// Build from nested rows of switch values. Every row must have the width
    /// of the first one.
    pub fn from_rows<R, T>(rows: impl IntoIterator<Item = R>) -> Result<Self, RenderError>
    where
        R: IntoIterator<Item = T>,
        T: SwitchValue,
    {
        let mut bits = Vec::new();
        let mut columns = None;
        let mut row_count = 0;

        for (row, values) in rows.into_iter().enumerate() {
            let before = bits.len();
            bits.extend(values.into_iter().map(|v| v.is_lit()));
            let width = bits.len() - before;
            match columns {
                None => columns = Some(width),
                Some(expected) if expected != width => {
                    return Err(RenderError::RaggedBitmap {
                        row,
                        expected,
                        actual: width,
                    });
                }
                Some(_) => {}
            }
            row_count += 1;
        }

        Ok(Self {
            rows: row_count,
            columns: columns.unwrap_or(0),
            bits,
        })
    }

    /// Parse one row per non-empty line, `1` lit and `0` dark. Whitespace
    /// inside a line is ignored, so `"1 0 1"` and `"101"` are the same row.
    pub fn parse(text: &str) -> Result<Self, RenderError> {
        let mut rows = Vec::new();
        for (n, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                match ch {
                    '0' | '1' => row.push(ch),
                    found => return Err(RenderError::BitmapSyntax { line: n + 1, found }),
                }
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Bit at `(row, col)`; out-of-range reads are dark.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.columns {
            return false;
        }
        self.bits[row * self.columns + col]
    }

    pub fn is_blank(&self) -> bool {
        self.bits.iter().all(|lit| !lit)
    }

    /// Iterate rows as bit slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks(0) panics; an empty bitmap has no rows anyway
        self.bits.chunks(self.columns.max(1)).take(self.rows)
    }
}

/// Character-to-bitmap lookup consumed by the panel.
///
/// The engine itself only ever asks for the blank glyph (when clearing);
/// hosts resolve real characters before calling `draw_character`.
pub trait BitmapSource: Send + Sync {
    fn blank(&self, rows: usize, columns: usize) -> Bitmap;
}

/// Default source: plain all-dark bitmaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankBitmaps;

impl BitmapSource for BlankBitmaps {
    fn blank(&self, rows: usize, columns: usize) -> Bitmap {
        Bitmap::blank(rows, columns)
    }
}
