//! Default value functions for configuration.
//!
//! Each sub-module groups related free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on `PanelConfig`
//! fields.

mod colors;
mod layout;

// ── Colors ─────────────────────────────────────────────────────────────────
pub use colors::{bar_color, bar_glow_color};

// ── Grid geometry & animation ──────────────────────────────────────────────
pub use layout::{blink_interval_ms, columns, intra_spacing, pixel_height, pixel_width, rows};
