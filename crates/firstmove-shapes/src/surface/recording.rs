use crate::scene::ShapeList;

use super::DrawingSurface;

/// In-memory surface that keeps the displayed set and every set it was given.
///
/// History is never pruned. Meant for tests and short-lived sessions; a
/// long-running embedder should implement [`DrawingSurface`] on its own
/// renderer instead.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    history: Vec<ShapeList>,
}

impl RecordingSurface {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The set currently displayed (last call wins). Empty before any call.
    pub fn current(&self) -> ShapeList {
        self.history.last().cloned().unwrap_or_default()
    }

    /// Every set received, oldest first.
    #[inline]
    pub fn history(&self) -> &[ShapeList] {
        &self.history
    }

    /// Number of `set_shapes` calls received.
    #[inline]
    pub fn calls(&self) -> usize {
        self.history.len()
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_shapes(&mut self, shapes: ShapeList) {
        self.history.push(shapes);
    }
}
