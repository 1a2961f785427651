use serde::{Deserialize, Serialize};

use super::{Brush, SquareId};

/// One visual marker: an arrow when `dest` is set, a point marker otherwise.
///
/// Serializes to the drawing surface's object form,
/// `{"orig": "d5", "dest": "e4", "brush": "blue"}`, with `dest` omitted
/// (not `null`) for point markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub orig: SquareId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest: Option<SquareId>,
    pub brush: Brush,
}

impl Shape {
    #[inline]
    pub fn new(orig: SquareId, dest: Option<SquareId>, brush: Brush) -> Self {
        Self { orig, dest, brush }
    }

    #[inline]
    pub fn arrow(orig: SquareId, dest: SquareId, brush: Brush) -> Self {
        Self::new(orig, Some(dest), brush)
    }

    #[inline]
    pub fn point(orig: SquareId, brush: Brush) -> Self {
        Self::new(orig, None, brush)
    }

    #[inline]
    pub fn is_arrow(&self) -> bool {
        self.dest.is_some()
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        self.dest.is_none()
    }
}
