/// Key transition direction (spec §6 "Key events": `type ∈ {KEY_DOWN,
/// KEY_UP}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Down,
    Up,
}

/// The well-known ESCAPE keycode (spec §6).
pub const ESCAPE: u32 = 27;

/// A key event, as delivered by the platform (spec §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    pub keycode: u32,
    pub repeat: bool,
}

impl KeyEvent {
    /// `event()` only reacts to a key-up, or a key-down that is an
    /// auto-repeat (spec §4.3: "key_up OR (key_down AND repeat)").
    fn is_actionable(&self) -> bool {
        matches!(self.kind, KeyEventKind::Up) || (self.kind == KeyEventKind::Down && self.repeat)
    }
}

/// The content-rect event (spec §6): `{t,l,b,r}` as four integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRectEvent {
    pub t: i32,
    pub l: i32,
    pub b: i32,
    pub r: i32,
}

/// Everything `EngineState::event` can receive (spec §4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    Key(KeyEvent),
    ContentRect(ContentRectEvent),
}

impl PlatformEvent {
    pub(crate) fn actionable_key(&self) -> Option<KeyEvent> {
        match self {
            PlatformEvent::Key(k) if k.is_actionable() => Some(*k),
            _ => None,
        }
    }
}
