use glyph_core::{midpoint, Point, Tag};
use glyph_data::{CacheKey, GlyphRecord};

use crate::adaptive::{choose_steps, quad_point};
use crate::builder::PolygonBuilder;
use crate::error::BuildError;

/// Minimum point count below which a contour set cannot enclose an area
/// (spec §4.2 "Degenerate guard").
const MIN_POINTS: usize = 3;

/// Builds a polygon for a [`GlyphRecord`] by driving a [`PolygonBuilder`]
/// through its vertex-event protocol (spec §4.2).
///
/// `steps` and `thresh` select the tessellation mode:
/// - `(0, 0)`: naive, on-curve points only.
/// - `(>0, 0)`: fixed-step quadratic interpolation.
/// - `(_, >0)`: adaptive, per-arc step count chosen from `{1,2,4,8,16}`.
pub fn build<B>(
    record: &GlyphRecord<B::Output>,
    builder: &mut B,
    steps: i32,
    thresh: i32,
) -> Result<Option<B::Output>, BuildError>
where
    B: PolygonBuilder,
    B::Output: Clone,
{
    let key = CacheKey { steps, thresh };
    if let Some(poly) = record.cached(key) {
        return Ok(Some(poly));
    }
    if record.point_count() < MIN_POINTS {
        log::debug!(
            "glyph has only {} point(s); skipping tessellation (degenerate)",
            record.point_count()
        );
        return Ok(None);
    }

    builder.reset();
    let mut index = 0usize;
    let mut emit = |first: bool, p: Point| -> Result<(), BuildError> {
        let ok = builder.point(first, p);
        index += 1;
        if ok {
            Ok(())
        } else {
            log::warn!("polygon builder rejected vertex at index {}", index - 1);
            Err(BuildError::VertexRejected { index: index - 1 })
        }
    };

    if steps == 0 && thresh == 0 {
        emit_naive(record, &mut emit)?;
    } else {
        emit_quadratic(record, steps, thresh, &mut emit)?;
    }

    let poly = builder.build().ok_or_else(|| {
        log::warn!("polygon builder rejected build(); cache left untouched");
        BuildError::BuildRejected
    })?;
    record.store_cache(key, poly.clone());
    Ok(Some(poly))
}

/// §4.2.1 naive mode: a single flat walk over all points, dropping any
/// off-curve point that isn't immediately followed by an on-curve one at a
/// contour's start.
fn emit_naive<P>(
    record: &GlyphRecord<P>,
    emit: &mut impl FnMut(bool, Point) -> Result<(), BuildError>,
) -> Result<(), BuildError> {
    let np = record.point_count();
    let mut first = true;
    let mut c = 0usize;
    for p in 0..np {
        let tag = record.tags[p];
        if tag.is_on() {
            emit(first, record.points[p])?;
            first = false;
        }
        if c < record.contour_ends.len() && record.contour_ends[c] as usize == p {
            c += 1;
            first = true;
        }
    }
    Ok(())
}

/// §4.2.2 quadratic decomposition, shared by fixed-step and adaptive mode.
/// `steps > 0` with `thresh == 0` uses a fixed step count for every arc;
/// `thresh > 0` chooses a step count per arc via [`choose_steps`].
fn emit_quadratic<P>(
    record: &GlyphRecord<P>,
    steps: i32,
    thresh: i32,
    emit: &mut impl FnMut(bool, Point) -> Result<(), BuildError>,
) -> Result<(), BuildError> {
    for k in 0..record.contour_count() {
        let range = record.contour_range(k);
        let start = *range.start();
        let end = *range.end();
        let mut first = true;

        for p in start..=end {
            let p0 = if p == start { end } else { p - 1 };
            let p2 = if p == end { start } else { p + 1 };

            let t0 = record.tags[p0];
            let t1 = record.tags[p];
            let t2 = record.tags[p2];

            let pp0 = record.points[p0];
            let pp1 = record.points[p];
            let pp2 = record.points[p2];

            use Tag::{Off, On};
            match (t0, t1, t2) {
                (Off, Off, Off) => {
                    let a = midpoint(pp0, pp1);
                    let b = midpoint(pp1, pp2);
                    emit_arc(a, pp1, b, steps, thresh, &mut first, emit)?;
                }
                (Off, Off, On) => {
                    let a = midpoint(pp0, pp1);
                    emit_arc(a, pp1, pp2, steps, thresh, &mut first, emit)?;
                }
                (Off, On, _) => {
                    // Handled by the neighboring iteration centered on this
                    // off-curve point.
                }
                (On, Off, Off) => {
                    let b = midpoint(pp1, pp2);
                    emit_arc(pp0, pp1, b, steps, thresh, &mut first, emit)?;
                }
                (On, Off, On) => {
                    emit_arc(pp0, pp1, pp2, steps, thresh, &mut first, emit)?;
                }
                (On, On, _) => {
                    emit(first, pp1)?;
                    first = false;
                }
            }
        }
    }
    Ok(())
}

/// Emit one quadratic arc's vertices via the step generator (spec §4.2.3):
/// `B(i/steps)` for `i = 1..=steps`, never the `t = 0` startpoint. Only the
/// arc's first emitted vertex can carry the contour's `first` flag.
fn emit_arc(
    p0: Point,
    p1: Point,
    p2: Point,
    steps: i32,
    thresh: i32,
    first: &mut bool,
    emit: &mut impl FnMut(bool, Point) -> Result<(), BuildError>,
) -> Result<(), BuildError> {
    let n = if thresh > 0 {
        choose_steps(p0, p1, p2, thresh).0
    } else {
        steps
    };
    for i in 1..=n {
        let t = i as f32 / n as f32;
        let p = quad_point(p0, p1, p2, t);
        emit(*first, p)?;
        *first = false;
    }
    Ok(())
}
