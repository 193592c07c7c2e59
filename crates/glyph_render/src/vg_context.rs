use glam::Mat4;

use crate::style::Style;

/// The vector-graphics context consumed by `draw()` (spec §6 "VG context").
/// `Polygon` is the opaque handle type a [`glyph_tess::PolygonBuilder`]
/// produces — this trait only draws it, it never builds one.
pub trait VgContext {
    type Polygon;

    /// Reset the context for a new frame with the given model-view-projection
    /// matrix (spec §4.3's orthographic MVP construction).
    fn reset(&mut self, mvp: Mat4);

    /// Bind whatever polygon storage backs subsequent `draw_polygon` calls.
    fn bind_polygons(&mut self);

    fn draw_polygon(&mut self, poly: &Self::Polygon, style: Style);
}
