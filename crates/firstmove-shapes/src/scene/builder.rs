use super::{Brush, Shape, ShapeList, SquareId};

/// Brush used for every shape produced by [`build_arrow_shapes`].
pub const ARROW_BRUSH: Brush = Brush::Blue;

/// Maps each destination to one shape rooted at `origin`.
///
/// - output length equals input length; no filtering or dedup
/// - `None` entries become point markers (no `dest`)
/// - every shape carries [`ARROW_BRUSH`]
///
/// Pure: never touches a drawing surface.
pub fn build_arrow_shapes<I, D>(origin: &SquareId, destinations: I) -> ShapeList
where
    I: IntoIterator<Item = Option<D>>,
    D: Into<SquareId>,
{
    build_shapes_with(origin, destinations, &ARROW_BRUSH)
}

/// Like [`build_arrow_shapes`] but with an explicit brush.
pub fn build_shapes_with<I, D>(origin: &SquareId, destinations: I, brush: &Brush) -> ShapeList
where
    I: IntoIterator<Item = Option<D>>,
    D: Into<SquareId>,
{
    debug_assert!(!origin.is_empty(), "arrow origin must be a non-empty square id");

    destinations
        .into_iter()
        .map(|dest| Shape::new(origin.clone(), dest.map(Into::into), brush.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> SquareId { SquareId::from(s) }

    // ── build_arrow_shapes ────────────────────────────────────────────────

    #[test]
    fn arrow_and_point_from_mixed_input() {
        let shapes = build_arrow_shapes(&sq("d5"), [Some("e4"), None]);
        let expected = ShapeList::from(vec![
            Shape::arrow(sq("d5"), sq("e4"), Brush::Blue),
            Shape::point(sq("d5"), Brush::Blue),
        ]);
        assert_eq!(shapes, expected);
    }

    #[test]
    fn empty_destinations_give_empty_list() {
        let shapes = build_arrow_shapes(&sq("d4"), Vec::<Option<SquareId>>::new());
        assert!(shapes.is_empty());
    }

    #[test]
    fn length_and_order_preserved_with_duplicates() {
        let dests = [Some("a1"), Some("h8"), Some("a1"), None, None, Some("c3")];
        let shapes = build_arrow_shapes(&sq("e2"), dests);
        assert_eq!(shapes.len(), dests.len());
        for (shape, dest) in shapes.iter().zip(dests) {
            assert_eq!(shape.orig, sq("e2"));
            assert_eq!(shape.dest.as_ref().map(SquareId::as_str), dest);
        }
    }

    #[test]
    fn brush_is_constant_across_call() {
        let shapes = build_arrow_shapes(&sq("g1"), [Some("f3"), Some("h3"), None]);
        assert!(shapes.iter().all(|s| s.brush == ARROW_BRUSH));
    }

    #[test]
    fn json_matches_surface_object_form() {
        let shapes = build_arrow_shapes(&sq("d5"), [Some("e4"), None]);
        assert_eq!(
            serde_json::to_string(&shapes).unwrap(),
            r#"[{"orig":"d5","dest":"e4","brush":"blue"},{"orig":"d5","brush":"blue"}]"#
        );
    }

    // ── build_shapes_with ─────────────────────────────────────────────────

    #[test]
    fn explicit_brush_applies_to_all() {
        let shapes = build_shapes_with(&sq("d5"), [Some("e4"), None], &Brush::Red);
        assert!(shapes.iter().all(|s| s.brush == Brush::Red));
    }
}
