use crate::color::Color;
use crate::viewport::Viewport;

/// Which attachment layout to begin the frame with. The engine only ever
/// requests `Default` (spec §4.3: "begin default renderer"); the mode
/// parameter is kept so the capability set matches §6 faithfully for a
/// backend that supports more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Default,
}

/// The renderer capability set consumed by `draw()` (spec §6, §9 "Dynamic
/// dispatch"): begin/end a frame, query the surface, and install a
/// viewport/scissor pair.
pub trait Renderer {
    /// Begin a frame with the given clear color. Returns `false` if the
    /// frame could not be started (spec §6: `beginDefault(...) -> ok`).
    fn begin_default(&mut self, mode: RenderMode, clear_color: Color) -> bool;

    /// End the frame begun by a matching `begin_default`. Must be called on
    /// every exit path once `begin_default` succeeds (spec §5 "Scoped
    /// acquisition").
    fn end(&mut self);

    fn surface_size(&self) -> (u32, u32);

    fn viewport(&mut self, rect: Viewport);

    fn scissor(&mut self, rect: Viewport);
}
