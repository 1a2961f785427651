use serde::{Deserialize, Serialize};

use super::Shape;

/// Ordered shape set handed to a drawing surface in one call.
///
/// Built fresh per call; surfaces take it by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeList {
    items: Vec<Shape>,
}

impl ShapeList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns shapes in insertion order.
    #[inline]
    pub fn items(&self) -> &[Shape] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.items.iter()
    }
}

impl From<Vec<Shape>> for ShapeList {
    #[inline]
    fn from(items: Vec<Shape>) -> Self {
        Self { items }
    }
}

impl FromIterator<Shape> for ShapeList {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}
