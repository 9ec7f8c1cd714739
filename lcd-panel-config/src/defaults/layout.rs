//! Default grid geometry for one HD44780 character cell.

/// 7 glyph rows plus the cursor row.
pub fn rows() -> usize {
    8
}

pub fn columns() -> usize {
    5
}

pub fn pixel_width() -> f32 {
    2.0
}

pub fn pixel_height() -> f32 {
    2.0
}

pub fn intra_spacing() -> f32 {
    0.4
}

pub fn blink_interval_ms() -> u64 {
    600 // toggle every 600 ms, matching the controller's blink rate
}
