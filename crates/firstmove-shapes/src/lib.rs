//! Board arrow shapes.
//!
//! This crate turns an origin square plus a list of destination squares into a
//! shape list and hands it to a [`DrawingSurface`]. It never renders anything
//! itself and never reads state back from the surface.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`scene`] | `SquareId`, `Brush`, `Shape`, `ShapeList`, `build_arrow_shapes` |
//! | [`surface`] | `DrawingSurface`, `RecordingSurface`, `ScriptSurface`, `JsonSurface` |
//! | [`arrows`] | `Arrows` controller (render / clear against an injected surface) |
//! | [`logging`] | `init_logging` |
//!
//! # Quick start
//!
//! ```rust
//! use firstmove_shapes::{Arrows, RecordingSurface, SquareId};
//!
//! let mut arrows = Arrows::new(RecordingSurface::new());
//! arrows.render(&SquareId::from("d5"), [Some("e4"), None]);
//!
//! let shown = arrows.surface().current();
//! assert_eq!(shown.len(), 2);
//! assert!(shown.items()[0].is_arrow());
//! assert!(shown.items()[1].is_point());
//! ```

pub mod arrows;
pub mod logging;
pub mod scene;
pub mod surface;

pub use arrows::Arrows;
pub use scene::{build_arrow_shapes, build_shapes_with, Brush, Shape, ShapeList, SquareId, ARROW_BRUSH};
pub use surface::{DrawingSurface, JsonSurface, RecordingSurface, ScriptSurface, SurfaceError};
