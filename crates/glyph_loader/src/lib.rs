//! Turns a structured-text glyph table (spec §4.1, §6 "Asset format") into a
//! validated [`glyph_data::GlyphTable`].
//!
//! Field order inside each glyph object is meaningful: `p`/`t` may only
//! appear once `np` has been set, and `c` may only appear once `nc` has been
//! set. This relies on `serde_json`'s `preserve_order` feature so object
//! keys are visited in source order rather than sorted.

mod error;

pub use error::IngestError;

// `serde_json::Map` (even indexmap-backed, via the `preserve_order` feature)
// folds a literal duplicate key in the source text down to one entry —
// last value wins — before we ever see it. The sentinel-based duplicate
// checks below are therefore unreachable from `load`'s own JSON parsing;
// they exist because `parse_glyph` takes a `&Value`, which a caller could
// in principle build by hand (e.g. from a non-JSON structured-text source)
// without going through `serde_json`'s object parser.

use glyph_data::{GlyphRecord, GlyphTable};
use serde_json::Value;

const SENTINEL_I: i32 = -1;
const SENTINEL_F: f32 = -1.0;

/// Per-object scratch state while scanning one glyph's fields.
#[derive(Default)]
struct PartialGlyph {
    i: i32,
    w: f32,
    h: f32,
    np: i32,
    nc: i32,
    p: Option<Vec<glyph_core::Point>>,
    t: Option<Vec<glyph_core::Tag>>,
    c: Option<Vec<i32>>,
}

impl PartialGlyph {
    fn new() -> Self {
        Self {
            i: SENTINEL_I,
            w: SENTINEL_F,
            h: SENTINEL_F,
            np: SENTINEL_I,
            nc: SENTINEL_I,
            p: None,
            t: None,
            c: None,
        }
    }
}

/// Parse a structured-text blob (a JSON document, per spec §6) into a
/// [`GlyphTable`]. `P` is the opaque polygon-handle type the eventual
/// tessellator will cache against each record; the loader never constructs
/// one, so any `P` is accepted.
pub fn load<P>(blob: &str) -> Result<GlyphTable<P>, IngestError> {
    let root: Value = serde_json::from_str(blob).map_err(|_| IngestError::RootNotArray)?;
    let elements = root.as_array().ok_or(IngestError::RootNotArray)?;

    let mut table = GlyphTable::new();
    for (glyph, element) in elements.iter().enumerate() {
        let record = parse_glyph(glyph, element).map_err(|err| {
            log::warn!("glyph table load abandoned: {err}");
            err
        })?;
        table.insert(record);
    }
    log::debug!("glyph table loaded with {} glyphs", table.len());
    Ok(table)
}

fn parse_glyph<P>(glyph: usize, element: &Value) -> Result<GlyphRecord<P>, IngestError> {
    let object = element
        .as_object()
        .ok_or(IngestError::ElementNotObject { glyph })?;

    let mut g = PartialGlyph::new();

    for (key, value) in object.iter() {
        match key.as_str() {
            "i" => {
                if g.i != SENTINEL_I {
                    return Err(IngestError::DuplicateField { glyph, field: "i" });
                }
                g.i = value.as_i64().ok_or(IngestError::WrongPrimitiveType {
                    glyph,
                    field: "i",
                })? as i32;
            }
            "w" => {
                if g.w != SENTINEL_F {
                    return Err(IngestError::DuplicateField { glyph, field: "w" });
                }
                g.w = value.as_f64().ok_or(IngestError::WrongPrimitiveType {
                    glyph,
                    field: "w",
                })? as f32;
            }
            "h" => {
                if g.h != SENTINEL_F {
                    return Err(IngestError::DuplicateField { glyph, field: "h" });
                }
                g.h = value.as_f64().ok_or(IngestError::WrongPrimitiveType {
                    glyph,
                    field: "h",
                })? as f32;
            }
            "np" => {
                if g.np != SENTINEL_I {
                    return Err(IngestError::DuplicateField { glyph, field: "np" });
                }
                g.np = value.as_i64().ok_or(IngestError::WrongPrimitiveType {
                    glyph,
                    field: "np",
                })? as i32;
            }
            "nc" => {
                if g.nc != SENTINEL_I {
                    return Err(IngestError::DuplicateField { glyph, field: "nc" });
                }
                g.nc = value.as_i64().ok_or(IngestError::WrongPrimitiveType {
                    glyph,
                    field: "nc",
                })? as i32;
            }
            "p" => {
                if g.p.is_some() {
                    return Err(IngestError::DuplicateField { glyph, field: "p" });
                }
                if g.np == SENTINEL_I {
                    return Err(IngestError::FieldBeforeDependency {
                        glyph,
                        field: "p",
                        dependency: "np",
                    });
                }
                g.p = Some(parse_points(glyph, value, g.np)?);
            }
            "t" => {
                if g.t.is_some() {
                    return Err(IngestError::DuplicateField { glyph, field: "t" });
                }
                if g.np == SENTINEL_I {
                    return Err(IngestError::FieldBeforeDependency {
                        glyph,
                        field: "t",
                        dependency: "np",
                    });
                }
                g.t = Some(parse_tags(glyph, value, g.np)?);
            }
            "c" => {
                if g.c.is_some() {
                    return Err(IngestError::DuplicateField { glyph, field: "c" });
                }
                if g.nc == SENTINEL_I {
                    return Err(IngestError::FieldBeforeDependency {
                        glyph,
                        field: "c",
                        dependency: "nc",
                    });
                }
                g.c = Some(parse_ints(glyph, "c", value, g.nc)?);
            }
            _ => {}
        }
    }

    if g.i == SENTINEL_I {
        return Err(IngestError::MissingField { glyph, field: "i" });
    }
    if g.w == SENTINEL_F {
        return Err(IngestError::MissingField { glyph, field: "w" });
    }
    if g.h == SENTINEL_F {
        return Err(IngestError::MissingField { glyph, field: "h" });
    }
    if g.np == SENTINEL_I {
        return Err(IngestError::MissingField { glyph, field: "np" });
    }
    if g.nc == SENTINEL_I {
        return Err(IngestError::MissingField { glyph, field: "nc" });
    }
    let points = g.p.ok_or(IngestError::MissingField { glyph, field: "p" })?;
    let tags = g.t.ok_or(IngestError::MissingField { glyph, field: "t" })?;
    let contour_ends = g.c.ok_or(IngestError::MissingField { glyph, field: "c" })?;

    GlyphRecord::new(g.i, g.w, g.h, points, tags, contour_ends)
        .map_err(|source| IngestError::InvalidRecord { glyph, source })
}

fn parse_points(glyph: usize, value: &Value, np: i32) -> Result<Vec<glyph_core::Point>, IngestError> {
    let raw = value.as_array().ok_or(IngestError::NotAnArray {
        glyph,
        field: "p",
    })?;
    let expected = (2 * np).max(0) as usize;
    if raw.len() != expected {
        return Err(IngestError::SizeMismatch {
            glyph,
            field: "p",
            expected,
            actual: raw.len(),
        });
    }
    let mut points = Vec::with_capacity(np.max(0) as usize);
    for pair in raw.chunks_exact(2) {
        let x = pair[0].as_f64().ok_or(IngestError::WrongPrimitiveType {
            glyph,
            field: "p",
        })? as f32;
        let y = pair[1].as_f64().ok_or(IngestError::WrongPrimitiveType {
            glyph,
            field: "p",
        })? as f32;
        points.push(glyph_core::Point::new(x, y));
    }
    Ok(points)
}

fn parse_tags(glyph: usize, value: &Value, np: i32) -> Result<Vec<glyph_core::Tag>, IngestError> {
    let raw = parse_ints(glyph, "t", value, np)?;
    Ok(raw.into_iter().map(glyph_core::Tag::from_raw).collect())
}

fn parse_ints(glyph: usize, field: &'static str, value: &Value, expected_len: i32) -> Result<Vec<i32>, IngestError> {
    let raw = value.as_array().ok_or(IngestError::NotAnArray { glyph, field })?;
    let expected = expected_len.max(0) as usize;
    if raw.len() != expected {
        return Err(IngestError::SizeMismatch {
            glyph,
            field,
            expected,
            actual: raw.len(),
        });
    }
    raw.iter()
        .map(|v| v.as_i64().map(|n| n as i32).ok_or(IngestError::WrongPrimitiveType { glyph, field }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_a_single_square_glyph() {
        let blob = r#"[
            {"i": 103, "w": 1.0, "h": 1.0, "np": 4,
             "p": [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
             "t": [1, 1, 1, 1],
             "nc": 1, "c": [3]}
        ]"#;
        let table: GlyphTable<u32> = load(blob).unwrap();
        let rec = table.get(103).unwrap();
        assert_eq!(rec.point_count(), 4);
        assert_eq!(rec.contour_count(), 1);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let blob = r#"[
            {"i": 1, "w": 1.0, "h": 1.0, "np": 0, "p": [], "t": [], "nc": 0, "c": [], "name": "ignored"}
        ]"#;
        let table: GlyphTable<u32> = load(blob).unwrap();
        assert!(table.get(1).is_some());
    }

    #[test]
    fn p_before_np_is_rejected() {
        let blob = r#"[
            {"i": 1, "w": 1.0, "h": 1.0, "p": [0.0, 0.0], "np": 1, "t": [1], "nc": 0, "c": []}
        ]"#;
        let err = load::<u32>(blob).unwrap_err();
        assert!(matches!(
            err,
            IngestError::FieldBeforeDependency { field: "p", dependency: "np", .. }
        ));
    }

    #[test]
    fn c_before_nc_is_rejected() {
        let blob = r#"[
            {"i": 1, "w": 1.0, "h": 1.0, "np": 0, "p": [], "t": [], "c": [], "nc": 0}
        ]"#;
        let err = load::<u32>(blob).unwrap_err();
        assert!(matches!(
            err,
            IngestError::FieldBeforeDependency { field: "c", dependency: "nc", .. }
        ));
    }

    #[test]
    fn missing_field_is_rejected() {
        let blob = r#"[
            {"i": 1, "w": 1.0, "h": 1.0, "np": 0, "p": [], "t": [], "nc": 0}
        ]"#;
        let err = load::<u32>(blob).unwrap_err();
        assert!(matches!(err, IngestError::MissingField { field: "c", .. }));
    }

    #[test]
    fn size_mismatch_in_p_is_rejected() {
        let blob = r#"[
            {"i": 1, "w": 1.0, "h": 1.0, "np": 2, "p": [0.0, 0.0], "t": [1, 1], "nc": 1, "c": [1]}
        ]"#;
        let err = load::<u32>(blob).unwrap_err();
        assert!(matches!(err, IngestError::SizeMismatch { field: "p", .. }));
    }

    #[test]
    fn invalid_record_surfaces_as_invalid_record_error() {
        let blob = r#"[
            {"i": 1, "w": 1.0, "h": 1.0, "np": 2, "p": [0.0, 0.0, 1.0, 0.0], "t": [1, 1], "nc": 1, "c": [0]}
        ]"#;
        let err = load::<u32>(blob).unwrap_err();
        assert!(matches!(err, IngestError::InvalidRecord { .. }));
    }

    #[test]
    fn whole_table_is_abandoned_when_one_glyph_fails() {
        let blob = r#"[
            {"i": 1, "w": 1.0, "h": 1.0, "np": 0, "p": [], "t": [], "nc": 0, "c": []},
            {"i": 2, "w": 1.0, "h": 1.0, "np": 0, "p": [], "t": [], "nc": 1, "c": []}
        ]"#;
        assert!(load::<u32>(blob).is_err());
    }
}
