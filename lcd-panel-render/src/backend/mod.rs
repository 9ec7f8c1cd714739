//! Drawing backend seam.
//!
//! The engine never talks to a graphics library directly. A backend creates
//! one [`Drawable`] per pixel from a [`CanvasRepr`] and afterwards only ever
//! receives attribute updates and visibility toggles through it.

mod repr;

pub use repr::{CanvasRepr, DrawAttributes, ShapeKind};

/// Handle to one backend-rendered shape.
///
/// `Send` because the blink task mutates pixels from the runtime's worker.
pub trait Drawable: Send {
    /// Apply the `Some` fields of `attrs`.
    fn set_attributes(&mut self, attrs: &DrawAttributes);

    fn show(&mut self);

    fn hide(&mut self);
}

/// Creates drawables from canvas descriptions.
pub trait DrawableFactory {
    fn create(&mut self, repr: &CanvasRepr) -> Box<dyn Drawable>;

    /// Create a whole grid at once. Backends that prefer batch creation
    /// override this; the result must be in the same order as `reprs`.
    fn create_batch(&mut self, reprs: &[CanvasRepr]) -> Vec<Box<dyn Drawable>> {
        reprs.iter().map(|repr| self.create(repr)).collect()
    }
}
