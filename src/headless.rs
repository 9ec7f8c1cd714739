//! In-memory drawing backend.
//!
//! `HeadlessCanvas` keeps the current attributes of every shape it created so
//! hosts without a real canvas (servers, snapshot tools, tests) can read back
//! exactly what a graphical backend would be showing.

use lcd_panel_render::{CanvasRepr, Color, DrawAttributes, Drawable, DrawableFactory, ShapeKind};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Visual state of one shape as last set by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeState {
    pub name: String,
    pub kind: ShapeKind,
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
    pub fill: Color,
    pub visible: bool,
    /// Number of `set_attributes` calls received after creation
    pub updates: usize,
}

impl ShapeState {
    fn from_repr(repr: &CanvasRepr) -> Self {
        Self {
            name: repr.name.clone(),
            kind: repr.kind,
            width: repr.width,
            height: repr.height,
            x: repr.x,
            y: repr.y,
            fill: repr.fill,
            visible: true,
            updates: 0,
        }
    }
}

/// Drawable handed to the panel; writes through to the canvas registry.
#[derive(Debug)]
pub struct HeadlessShape {
    state: Arc<Mutex<ShapeState>>,
}

impl Drawable for HeadlessShape {
    fn set_attributes(&mut self, attrs: &DrawAttributes) {
        let mut state = self.state.lock();
        if let Some(x) = attrs.x {
            state.x = x;
        }
        if let Some(y) = attrs.y {
            state.y = y;
        }
        if let Some(fill) = attrs.fill {
            state.fill = fill;
        }
        state.updates += 1;
    }

    fn show(&mut self) {
        self.state.lock().visible = true;
    }

    fn hide(&mut self) {
        self.state.lock().visible = false;
    }
}

/// Registry of every shape created through it, in creation order.
///
/// Cloning the canvas shares the registry.
#[derive(Debug, Clone, Default)]
pub struct HeadlessCanvas {
    shapes: Arc<Mutex<Registry>>,
}

#[derive(Debug, Default)]
struct Registry {
    order: Vec<Arc<Mutex<ShapeState>>>,
    by_name: HashMap<String, usize>,
}

impl HeadlessCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of one shape by name.
    pub fn shape(&self, name: &str) -> Option<ShapeState> {
        let registry = self.shapes.lock();
        let idx = *registry.by_name.get(name)?;
        Some(registry.order[idx].lock().clone())
    }

    /// Snapshot of every shape, in creation order.
    pub fn shapes(&self) -> Vec<ShapeState> {
        self.shapes
            .lock()
            .order
            .iter()
            .map(|state| state.lock().clone())
            .collect()
    }

    /// Total attribute updates across all shapes.
    pub fn total_updates(&self) -> usize {
        self.shapes
            .lock()
            .order
            .iter()
            .map(|state| state.lock().updates)
            .sum()
    }

    /// Render the shapes whose names start with `prefix` as text, one line
    /// per pixel row: `#` for `lit`, `.` for any other fill, space when
    /// hidden. Rows and columns are taken from the last two name fields.
    pub fn to_text(&self, prefix: &str, lit: Color) -> String {
        let mut cells: Vec<(usize, usize, char)> = Vec::new();
        for shape in self.shapes() {
            let Some(rest) = shape.name.strip_prefix(prefix) else {
                continue;
            };
            let mut fields = rest.rsplit(':');
            let (Some(col), Some(row)) = (fields.next(), fields.next()) else {
                continue;
            };
            let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) else {
                continue;
            };
            let glyph = if !shape.visible {
                ' '
            } else if shape.fill == lit {
                '#'
            } else {
                '.'
            };
            cells.push((row, col, glyph));
        }

        let rows = cells.iter().map(|c| c.0 + 1).max().unwrap_or(0);
        let cols = cells.iter().map(|c| c.1 + 1).max().unwrap_or(0);
        let mut lines = vec![vec![' '; cols]; rows];
        for (row, col, glyph) in cells {
            lines[row][col] = glyph;
        }
        lines
            .into_iter()
            .map(|line| line.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DrawableFactory for HeadlessCanvas {
    fn create(&mut self, repr: &CanvasRepr) -> Box<dyn Drawable> {
        let state = Arc::new(Mutex::new(ShapeState::from_repr(repr)));
        let mut registry = self.shapes.lock();
        if registry.by_name.contains_key(&repr.name) {
            log::warn!("Headless canvas: shape {} created twice, keeping the newest", repr.name);
        }
        let idx = registry.order.len();
        registry.order.push(Arc::clone(&state));
        registry.by_name.insert(repr.name.clone(), idx);
        Box::new(HeadlessShape { state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repr(name: &str) -> CanvasRepr {
        CanvasRepr {
            name: name.to_string(),
            kind: ShapeKind::Rectangle,
            width: 1.0,
            height: 1.0,
            x: 0.0,
            y: 0.0,
            fill: Color::new(1, 1, 1),
        }
    }

    #[test]
    fn test_shape_tracks_attribute_updates() {
        let mut canvas = HeadlessCanvas::new();
        let mut shape = canvas.create(&repr("G:0:0:0:0"));
        shape.set_attributes(&DrawAttributes::x(4.0));
        shape.set_attributes(&DrawAttributes::fill(Color::BLANK));
        shape.hide();

        let state = canvas.shape("G:0:0:0:0").expect("shape");
        assert_eq!(state.x, 4.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.fill, Color::BLANK);
        assert!(!state.visible);
        assert_eq!(state.updates, 2);
        assert_eq!(canvas.total_updates(), 2);
    }

    #[test]
    fn test_to_text_layout() {
        let mut canvas = HeadlessCanvas::new();
        let lit = Color::new(9, 9, 9);
        let mut a = canvas.create(&repr("G:0:1:0:0"));
        let _b = canvas.create(&repr("G:0:1:0:1"));
        let mut c = canvas.create(&repr("G:0:1:1:1"));
        let _other = canvas.create(&repr("G:0:2:0:0"));
        a.set_attributes(&DrawAttributes::fill(lit));
        c.hide();

        assert_eq!(canvas.to_text("G:0:1:", lit), "#.\n  ");
        assert_eq!(canvas.len(), 4);
    }
}
