/// Violations of the invariants a [`crate::GlyphRecord`] must satisfy after
/// construction (spec §3, "Invariants").
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecordError {
    #[error("glyph {id}: negative field (w={w}, h={h}, np={np}, nc={nc})")]
    NegativeField {
        id: i32,
        w: f32,
        h: f32,
        np: i32,
        nc: i32,
    },

    #[error("glyph {id}: tags length {actual} != np {expected}")]
    TagsLengthMismatch { id: i32, expected: i32, actual: usize },

    #[error("glyph {id}: contour_ends is not strictly increasing at index {index}")]
    ContourEndsNotIncreasing { id: i32, index: usize },

    #[error("glyph {id}: last contour end {actual} != np - 1 ({expected})")]
    LastContourEndMismatch { id: i32, expected: i32, actual: i32 },
}
