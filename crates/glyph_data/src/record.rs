use std::cell::RefCell;

use glyph_core::{Point, Tag};

use crate::error::RecordError;

/// Tessellation parameters a cached polygon was built with (spec §3,
/// `cache_key`). Two builds with the same key are considered identical —
/// [`GlyphRecord::cached`] returns the existing polygon instead of
/// rebuilding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheKey {
    pub steps: i32,
    pub thresh: i32,
}

struct Cache<P> {
    key: CacheKey,
    poly: P,
}

/// Immutable per-glyph contour data (spec §3).
///
/// `GlyphRecord` exclusively owns its point, tag, and contour arrays and at
/// most one cached polygon handle of type `P` (the type the tessellator's
/// `PolygonBuilder::Output` produces). The cache is the only mutable part
/// of an otherwise immutable record; it is accessed through `&self` via
/// interior mutability because a record is shared (by reference) with
/// every draw that looks it up in a [`crate::GlyphTable`].
pub struct GlyphRecord<P> {
    pub id: i32,
    pub w: f32,
    pub h: f32,
    pub points: Vec<Point>,
    pub tags: Vec<Tag>,
    pub contour_ends: Vec<i32>,
    cache: RefCell<Option<Cache<P>>>,
}

impl<P: Clone> GlyphRecord<P> {
    /// Construct and validate a record. Mirrors `glyph_object_new`'s final
    /// consistency check in the original C source, expressed as the
    /// explicit invariants from spec §3 rather than a handful of sentinel
    /// comparisons.
    pub fn new(
        id: i32,
        w: f32,
        h: f32,
        points: Vec<Point>,
        tags: Vec<Tag>,
        contour_ends: Vec<i32>,
    ) -> Result<Self, RecordError> {
        let np = points.len() as i32;
        let nc = contour_ends.len() as i32;

        if id < 0 || w < 0.0 || h < 0.0 || np < 0 || nc < 0 {
            let err = RecordError::NegativeField { id, w, h, np, nc };
            log::warn!("{err}");
            return Err(err);
        }
        if points.len() != tags.len() {
            let err = RecordError::TagsLengthMismatch {
                id,
                expected: np,
                actual: tags.len(),
            };
            log::warn!("{err}");
            return Err(err);
        }
        if let Err(err) = validate_contour_ends(id, np, &contour_ends) {
            log::warn!("{err}");
            return Err(err);
        }

        Ok(Self {
            id,
            w,
            h,
            points,
            tags,
            contour_ends,
            cache: RefCell::new(None),
        })
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn contour_count(&self) -> usize {
        self.contour_ends.len()
    }

    /// The range of point indices belonging to contour `k` (spec §3:
    /// `[prev_end+1 .. contour_ends[k]]`, inclusive on both ends).
    pub fn contour_range(&self, k: usize) -> std::ops::RangeInclusive<usize> {
        let start = if k == 0 {
            0
        } else {
            (self.contour_ends[k - 1] + 1) as usize
        };
        let end = self.contour_ends[k] as usize;
        start..=end
    }

    /// Returns the cached polygon if present and built with exactly `key`.
    pub fn cached(&self, key: CacheKey) -> Option<P> {
        self.cache
            .borrow()
            .as_ref()
            .filter(|c| c.key == key)
            .map(|c| c.poly.clone())
    }

    /// Replace the cache with a freshly built polygon. Any previous entry
    /// (built under a different key) is dropped first, per spec §4.2
    /// ("Otherwise drop any existing cached polygon before rebuilding").
    pub fn store_cache(&self, key: CacheKey, poly: P) {
        *self.cache.borrow_mut() = Some(Cache { key, poly });
    }

    /// Drop the cache without storing a replacement — used when a rebuild
    /// fails, so a stale polygon isn't mistakenly served later under a key
    /// that never actually succeeded. A failed build does *not* call this:
    /// spec §4.2 requires the existing cache survive a failed rebuild.
    #[cfg(test)]
    pub fn clear_cache(&self) {
        *self.cache.borrow_mut() = None;
    }
}

fn validate_contour_ends(id: i32, np: i32, contour_ends: &[i32]) -> Result<(), RecordError> {
    let nc = contour_ends.len() as i32;

    for (i, pair) in contour_ends.windows(2).enumerate() {
        if pair[0] >= pair[1] {
            return Err(RecordError::ContourEndsNotIncreasing { id, index: i + 1 });
        }
    }

    if np == 0 && nc == 0 {
        return Ok(());
    }

    match contour_ends.last() {
        Some(&last) if last == np - 1 => Ok(()),
        Some(&last) => Err(RecordError::LastContourEndMismatch {
            id,
            expected: np - 1,
            actual: last,
        }),
        None => {
            // nc == 0 but np > 0: no contour claims any point.
            Err(RecordError::LastContourEndMismatch {
                id,
                expected: np - 1,
                actual: -1,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn valid_square_record_builds() {
        let rec = GlyphRecord::<u32>::new(
            'g' as i32,
            1.0,
            1.0,
            vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)],
            vec![Tag::On, Tag::On, Tag::On, Tag::On],
            vec![3],
        );
        assert!(rec.is_ok());
    }

    #[test]
    fn mismatched_tag_length_is_rejected() {
        let rec = GlyphRecord::<u32>::new(
            1,
            1.0,
            1.0,
            vec![pt(0.0, 0.0), pt(1.0, 0.0)],
            vec![Tag::On],
            vec![1],
        );
        assert_eq!(
            rec.unwrap_err(),
            RecordError::TagsLengthMismatch {
                id: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn contour_ends_must_be_strictly_increasing() {
        let rec = GlyphRecord::<u32>::new(
            1,
            1.0,
            1.0,
            vec![pt(0.0, 0.0); 4],
            vec![Tag::On; 4],
            vec![1, 1, 3],
        );
        assert!(matches!(
            rec.unwrap_err(),
            RecordError::ContourEndsNotIncreasing { .. }
        ));
    }

    #[test]
    fn last_contour_end_must_equal_np_minus_one() {
        let rec = GlyphRecord::<u32>::new(
            1,
            1.0,
            1.0,
            vec![pt(0.0, 0.0); 4],
            vec![Tag::On; 4],
            vec![2],
        );
        assert!(matches!(
            rec.unwrap_err(),
            RecordError::LastContourEndMismatch { .. }
        ));
    }

    #[test]
    fn empty_glyph_with_zero_contours_is_permitted() {
        let rec = GlyphRecord::<u32>::new(' ' as i32, 0.5, 1.0, vec![], vec![], vec![]);
        assert!(rec.is_ok());
    }

    #[test]
    fn cache_hit_returns_same_handle() {
        let rec = GlyphRecord::<u32>::new(
            'g' as i32,
            1.0,
            1.0,
            vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0)],
            vec![Tag::On; 3],
            vec![2],
        )
        .unwrap();
        let key = CacheKey {
            steps: 4,
            thresh: 0,
        };
        rec.store_cache(key, 42u32);
        assert_eq!(rec.cached(key), Some(42));
        assert_eq!(
            rec.cached(CacheKey {
                steps: 5,
                thresh: 0
            }),
            None
        );
    }
}
