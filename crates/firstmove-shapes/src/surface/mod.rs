//! Drawing surface contract and stock implementations.
//!
//! A surface receives a complete replacement shape set on every call. An
//! empty list clears it. Callers never read display state back.

mod error;
mod recording;
mod script;

pub use error::SurfaceError;
pub use recording::RecordingSurface;
pub use script::{JsonSurface, ScriptSurface, DEFAULT_BINDING};

use crate::scene::ShapeList;

/// External renderer accepting a full replacement list of shapes.
pub trait DrawingSurface {
    /// Replaces the displayed shape set with `shapes`.
    fn set_shapes(&mut self, shapes: ShapeList);
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    #[inline]
    fn set_shapes(&mut self, shapes: ShapeList) {
        (**self).set_shapes(shapes);
    }
}
