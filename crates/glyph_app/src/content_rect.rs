/// The engine's installed content rect (spec §4.3 "Content-rect event").
///
/// `raw_width`/`raw_height` are deliberately computed from the *wrong* pair
/// of fields — `raw_width = rect.b - rect.t` and `raw_height = rect.r -
/// rect.l` swap the natural axes. Spec §9 flags this as almost certainly a
/// bug in the original source, but calls for preserving it bit-exactly
/// rather than silently fixing it, so that's what this does; the `raw_`
/// prefix is there so a reader doesn't mistake these for the rect's actual
/// width/height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRect {
    pub top: i32,
    pub left: i32,
    pub raw_width: i32,
    pub raw_height: i32,
}

impl ContentRect {
    pub fn from_event(e: crate::events::ContentRectEvent) -> Self {
        Self {
            top: e.t,
            left: e.l,
            raw_width: e.b - e.t,
            raw_height: e.r - e.l,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.raw_width > 0 && self.raw_height > 0
    }
}
