/// Everything that can go wrong while turning a structured-text blob into a
/// [`glyph_data::GlyphTable`] (spec §4.1, §7 `IngestError`).
///
/// `glyph` identifies which element of the root array failed, by its
/// position (the glyph's own `i` field may not be known yet if the failure
/// happened before `i` was parsed).
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("root value is not an array of glyph objects")]
    RootNotArray,

    #[error("glyph[{glyph}] is not an object")]
    ElementNotObject { glyph: usize },

    #[error("glyph[{glyph}]: duplicate field `{field}`")]
    DuplicateField { glyph: usize, field: &'static str },

    #[error("glyph[{glyph}]: field `{field}` appeared before `{dependency}` was set")]
    FieldBeforeDependency {
        glyph: usize,
        field: &'static str,
        dependency: &'static str,
    },

    #[error("glyph[{glyph}]: field `{field}` is not the expected primitive type")]
    WrongPrimitiveType { glyph: usize, field: &'static str },

    #[error("glyph[{glyph}]: field `{field}` is not an array")]
    NotAnArray { glyph: usize, field: &'static str },

    #[error("glyph[{glyph}]: field `{field}` has size {actual}, expected {expected}")]
    SizeMismatch {
        glyph: usize,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("glyph[{glyph}]: field `{field}` is missing")]
    MissingField { glyph: usize, field: &'static str },

    #[error("glyph[{glyph}]: {source}")]
    InvalidRecord {
        glyph: usize,
        #[source]
        source: glyph_data::RecordError,
    },
}
