//! Shape descriptors for a board drawing surface.
//!
//! Responsibilities:
//! - opaque square ids and brush tags
//! - the `Shape` record and ordered `ShapeList`
//! - the arrow builder (pure map, no surface access)

mod brush;
mod builder;
mod list;
mod shape;
mod square;

pub use brush::Brush;
pub use builder::{build_arrow_shapes, build_shapes_with, ARROW_BRUSH};
pub use list::ShapeList;
pub use shape::Shape;
pub use square::SquareId;
