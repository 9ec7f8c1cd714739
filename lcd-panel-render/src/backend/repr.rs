//! Declarative shape descriptions and attribute updates exchanged with the
//! drawing backend.

use lcd_panel_config::Color;
use serde::Serialize;

/// Shape primitive a backend is asked to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
}

/// One-shot creation description for a single pixel.
///
/// `x`/`y` are absolute canvas coordinates (display origin already applied).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasRepr {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
    pub fill: Color,
}

/// Partial attribute update. `None` fields are left untouched by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawAttributes {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub fill: Option<Color>,
}

impl DrawAttributes {
    /// Full commit of position and color.
    pub fn placed(x: f32, y: f32, fill: Color) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            fill: Some(fill),
        }
    }

    pub fn x(x: f32) -> Self {
        Self {
            x: Some(x),
            ..Self::default()
        }
    }

    pub fn fill(fill: Color) -> Self {
        Self {
            fill: Some(fill),
            ..Self::default()
        }
    }
}
