//! Immutable per-glyph contour data and the table that owns it.
//!
//! A [`GlyphRecord`] is the validated result of ingesting one glyph's
//! structured-text description (see `glyph_loader`). Once built, its point,
//! tag, and contour arrays never change; the only mutable part is the
//! tessellation cache (spec §4.2, "Caching").

mod error;
mod record;
mod table;

pub use error::RecordError;
pub use record::{CacheKey, GlyphRecord};
pub use table::GlyphTable;
