//! Quadratic Bezier tessellation of glyph contours.
//!
//! Converts a [`glyph_data::GlyphRecord`]'s on/off-curve point stream into a
//! sequence of vertex events driven into an external [`PolygonBuilder`],
//! per the FreeType-style decomposition and caching rules in spec §4.2.

mod adaptive;
mod builder;
mod error;
mod recording;
mod tessellator;

pub use builder::PolygonBuilder;
pub use error::BuildError;
pub use recording::RecordingPolygonBuilder;
pub use tessellator::build;
