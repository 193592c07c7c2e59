use crate::color::Color;

/// Draw style for a single polygon (spec §6 "VG context").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Color,
}

impl Style {
    /// The engine draws every glyph, and the default fallback polygon, in a
    /// fixed magenta on black (spec §6, §4.3).
    pub const FALLBACK_MAGENTA: Style = Style {
        color: Color::MAGENTA,
    };
}
