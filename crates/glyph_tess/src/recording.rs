use glyph_core::Point;

use crate::builder::PolygonBuilder;

/// A [`PolygonBuilder`] test fake that records the exact `(first_flag, x, y)`
/// event stream it's driven through, rather than assembling any real
/// rasterizer-facing geometry.
///
/// Useful outside this crate too — anything that takes a generic
/// `B: PolygonBuilder` can be exercised against this to assert the vertex
/// sequence a tessellation pass produced.
#[derive(Debug, Default, Clone)]
pub struct RecordingPolygonBuilder {
    events: Vec<(bool, Point)>,
    built: bool,
}

impl RecordingPolygonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The events recorded since the last `reset()`, regardless of whether
    /// `build()` has been called yet.
    pub fn events(&self) -> &[(bool, Point)] {
        &self.events
    }

    /// Whether `build()` has been called since the last `reset()`.
    pub fn was_built(&self) -> bool {
        self.built
    }
}

impl PolygonBuilder for RecordingPolygonBuilder {
    type Output = Vec<(bool, Point)>;

    fn reset(&mut self) {
        self.events.clear();
        self.built = false;
    }

    fn point(&mut self, first: bool, p: Point) -> bool {
        self.events.push((first, p));
        true
    }

    fn build(&mut self) -> Option<Self::Output> {
        self.built = true;
        Some(self.events.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_events_in_order_and_reports_built() {
        let mut b = RecordingPolygonBuilder::new();
        assert!(!b.was_built());
        b.point(true, Point::new(0.0, 0.0));
        b.point(false, Point::new(1.0, 0.0));
        let out = b.build().unwrap();
        assert_eq!(out, vec![(true, Point::new(0.0, 0.0)), (false, Point::new(1.0, 0.0))]);
        assert!(b.was_built());
    }

    #[test]
    fn reset_clears_events_and_built_flag() {
        let mut b = RecordingPolygonBuilder::new();
        b.point(true, Point::new(0.0, 0.0));
        b.build();
        b.reset();
        assert!(b.events().is_empty());
        assert!(!b.was_built());
    }
}
