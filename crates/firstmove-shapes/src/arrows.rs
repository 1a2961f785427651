//! Render / clear controller bound to one injected drawing surface.

use crate::scene::{build_shapes_with, Brush, ShapeList, SquareId, ARROW_BRUSH};
use crate::surface::DrawingSurface;

/// Sends arrow sets to the surface it was constructed with.
///
/// Holds no display state of its own; each call hands the surface a fresh
/// replacement list. Pass `&mut surface` to keep ownership at the call site.
#[derive(Debug)]
pub struct Arrows<S> {
    surface: S,
    brush: Brush,
}

impl<S: DrawingSurface> Arrows<S> {
    /// Controller using the stock arrow brush.
    pub fn new(surface: S) -> Self {
        Self::with_brush(surface, ARROW_BRUSH)
    }

    pub fn with_brush(surface: S, brush: Brush) -> Self {
        Self { surface, brush }
    }

    /// Builds one shape per destination and replaces the surface's set.
    ///
    /// `None` destinations become point markers on `origin`. An empty
    /// `destinations` clears the surface.
    pub fn render<I, D>(&mut self, origin: &SquareId, destinations: I)
    where
        I: IntoIterator<Item = Option<D>>,
        D: Into<SquareId>,
    {
        let shapes = build_shapes_with(origin, destinations, &self.brush);
        log::debug!("render {} shape(s) from {origin}", shapes.len());
        self.surface.set_shapes(shapes);
    }

    /// Removes every displayed shape.
    pub fn clear(&mut self) {
        log::debug!("clear shapes");
        self.surface.set_shapes(ShapeList::new());
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
