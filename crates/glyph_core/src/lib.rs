//! Shared primitives used across the glyph tessellation engine.
//!
//! Kept deliberately small: the types here have no opinion about how a
//! glyph is loaded, tessellated, or drawn — they're the vocabulary every
//! other crate in the workspace shares.

pub mod tag;
pub mod time;

pub use tag::Tag;
pub use time::{Clock, FakeClock, Instant, SystemClock};

/// A point in a glyph's em-space.
///
/// Glyph coordinates are plain 2-D floats, so we reuse `glam::Vec2` rather
/// than hand-rolling an `(x, y)` struct — it comes with `lerp`, arithmetic
/// operators, and `Default`, all of which the tessellator needs.
pub type Point = glam::Vec2;

/// Midpoint of two points: `a + (b - a) / 2`.
///
/// Used both to synthesize virtual on-curve points between consecutive
/// off-curve control points, and (scaled) inside the adaptive error
/// estimator's fan decomposition.
#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    a + (b - a) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(5.0, -2.0);
        assert_eq!(midpoint(a, b), midpoint(b, a));
    }

    #[test]
    fn midpoint_of_a_point_with_itself_is_itself() {
        let a = Point::new(3.0, 4.0);
        assert_eq!(midpoint(a, a), a);
    }
}
