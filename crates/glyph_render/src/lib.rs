//! Renderer and VG-context interface abstractions (spec §6, §9 "Dynamic
//! dispatch"). These are capability sets, not a rasterization backend —
//! the engine only ever talks to them through traits so it stays testable
//! against recording fakes.

mod color;
mod renderer;
mod style;
mod vg_context;
mod viewport;

pub use color::Color;
pub use renderer::{RenderMode, Renderer};
pub use style::Style;
pub use vg_context::VgContext;
pub use viewport::Viewport;
