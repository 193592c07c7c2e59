use glyph_core::Point;

/// The external polygon-builder capability set (spec §6, §9 "Dynamic
/// dispatch"): a mutable, reusable, single-producer object the tessellator
/// drives through exactly one `reset → point* → build` cycle per call to
/// [`crate::Tessellator::build`].
///
/// Modeled as a trait so the tessellator can be exercised against a
/// recording fake in tests, rather than any concrete rendering backend.
pub trait PolygonBuilder {
    type Output;

    /// Clear any vertices accumulated from a previous cycle.
    fn reset(&mut self);

    /// Append a vertex. `first` marks the start of a new contour. Returns
    /// `false` if the builder refuses the vertex (spec §6: `point(...) ->
    /// ok`).
    fn point(&mut self, first: bool, p: Point) -> bool;

    /// Finalize the accumulated vertices into a polygon handle. Returns
    /// `None` if the builder refuses to finalize.
    fn build(&mut self) -> Option<Self::Output>;
}
