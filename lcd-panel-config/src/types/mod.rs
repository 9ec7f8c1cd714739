//! Configuration value types.

mod color;

pub use color::{Color, ColorParseError};
