//! Recording backend used by the unit tests of this crate.

use crate::backend::{CanvasRepr, DrawAttributes, Drawable, DrawableFactory};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    Attrs(DrawAttributes),
    Show,
    Hide,
}

/// Drawable that appends every call to a shared log.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingDrawable {
    ops: Arc<Mutex<Vec<Op>>>,
}

impl RecordingDrawable {
    pub(crate) fn ops(&self) -> Vec<Op> {
        self.ops.lock().clone()
    }

    pub(crate) fn clear(&self) {
        self.ops.lock().clear();
    }

    /// Fill of the most recent attribute update that set one.
    pub(crate) fn last_fill(&self) -> Option<lcd_panel_config::Color> {
        self.ops.lock().iter().rev().find_map(|op| match op {
            Op::Attrs(attrs) => attrs.fill,
            _ => None,
        })
    }
}

impl Drawable for RecordingDrawable {
    fn set_attributes(&mut self, attrs: &DrawAttributes) {
        self.ops.lock().push(Op::Attrs(*attrs));
    }

    fn show(&mut self) {
        self.ops.lock().push(Op::Show);
    }

    fn hide(&mut self) {
        self.ops.lock().push(Op::Hide);
    }
}

/// Factory keeping a clone of every drawable it hands out, in creation order.
#[derive(Debug, Default)]
pub(crate) struct RecordingFactory {
    pub(crate) created: Vec<(CanvasRepr, RecordingDrawable)>,
    /// Number of shapes to silently drop from each batch
    pub(crate) drop_from_batch: usize,
}

impl RecordingFactory {
    pub(crate) fn drawable(&self, name: &str) -> &RecordingDrawable {
        self.created
            .iter()
            .find(|(repr, _)| repr.name == name)
            .map(|(_, d)| d)
            .unwrap_or_else(|| panic!("no drawable named {name}"))
    }

    pub(crate) fn clear_ops(&self) {
        for (_, d) in &self.created {
            d.clear();
        }
    }
}

impl DrawableFactory for RecordingFactory {
    fn create(&mut self, repr: &CanvasRepr) -> Box<dyn Drawable> {
        let drawable = RecordingDrawable::default();
        self.created.push((repr.clone(), drawable.clone()));
        Box::new(drawable)
    }

    fn create_batch(&mut self, reprs: &[CanvasRepr]) -> Vec<Box<dyn Drawable>> {
        let keep = reprs.len().saturating_sub(self.drop_from_batch);
        reprs[..keep].iter().map(|repr| self.create(repr)).collect()
    }
}
