//! Headless demo binary: wires a file-backed [`AssetStore`] and a set of
//! logging [`Renderer`]/[`VgContext`]/[`PolygonBuilder`] implementations
//! into an [`EngineState`], then drives it through a simulated platform
//! lifecycle (spec §5 "Scheduling model", §6).
//!
//! There is no rasterization backend here — the spec explicitly excludes
//! drawing the polygon itself (see `DESIGN.md`). Every renderer call just
//! logs what a real backend would have been asked to do.

use std::rc::Rc;

use glam::Mat4;

use glyph_app::{
    AppConfig, AssetStore, ContentRectEvent, EngineState, KeyEvent, KeyEventKind, PlatformEvent,
    ResourceError, ESCAPE,
};
use glyph_core::{Point, SystemClock};
use glyph_render::{Color, RenderMode, Renderer, Style, VgContext, Viewport};
use glyph_tess::PolygonBuilder;

/// A tiny, valid glyph table bundled for when the real asset isn't present
/// on disk — lets the demo run standalone without the original font data.
const DEMO_GLYPH_TABLE: &str = r#"[
    {"i": 32, "w": 0.5, "h": 1.0, "np": 0, "p": [], "t": [], "nc": 0, "c": []},
    {"i": 65, "w": 1.0, "h": 1.0, "np": 4,
     "p": [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
     "t": [1, 1, 1, 1],
     "nc": 1, "c": [3]},
    {"i": 79, "w": 1.0, "h": 1.0, "np": 4,
     "p": [0.5, 0.0, 1.0, 0.5, 0.5, 1.0, 0.0, 0.5],
     "t": [1, 0, 1, 0],
     "nc": 1, "c": [3]},
    {"i": 103, "w": 1.0, "h": 1.0, "np": 4,
     "p": [0.5, 0.0, 1.0, 0.5, 0.5, 1.0, 0.0, 0.5],
     "t": [1, 0, 1, 0],
     "nc": 1, "c": [3]}
]"#;

struct FileAssetStore;

impl AssetStore for FileAssetStore {
    fn load(&self, path: &str) -> Result<String, ResourceError> {
        match std::fs::read_to_string(path) {
            Ok(blob) => Ok(blob),
            Err(err) => {
                log::warn!("asset `{path}` unavailable ({err}); using the bundled demo glyph table");
                Ok(DEMO_GLYPH_TABLE.to_string())
            }
        }
    }
}

/// A vertex event stream, recorded as `(first_flag, point)` pairs and
/// finalized into a shared, cheaply cloned polygon handle.
#[derive(Default)]
struct LoggingBuilder {
    events: Vec<(bool, Point)>,
}

impl PolygonBuilder for LoggingBuilder {
    type Output = Rc<Vec<(bool, Point)>>;

    fn reset(&mut self) {
        self.events.clear();
    }

    fn point(&mut self, first: bool, p: Point) -> bool {
        self.events.push((first, p));
        true
    }

    fn build(&mut self) -> Option<Self::Output> {
        Some(Rc::new(std::mem::take(&mut self.events)))
    }
}

#[derive(Default)]
struct LoggingRenderer {
    width: u32,
    height: u32,
}

impl Renderer for LoggingRenderer {
    fn begin_default(&mut self, mode: RenderMode, clear_color: Color) -> bool {
        self.width = 1024;
        self.height = 1024;
        log::info!("begin_default({mode:?}, clear={:?})", clear_color.to_array());
        true
    }

    fn end(&mut self) {
        log::info!("end()");
    }

    fn surface_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn viewport(&mut self, rect: Viewport) {
        log::info!("viewport({rect:?})");
    }

    fn scissor(&mut self, rect: Viewport) {
        log::info!("scissor({rect:?})");
    }
}

#[derive(Default)]
struct LoggingVg;

impl VgContext for LoggingVg {
    type Polygon = Rc<Vec<(bool, Point)>>;

    fn reset(&mut self, mvp: Mat4) {
        log::info!("vg.reset(mvp = {:?})", mvp);
    }

    fn bind_polygons(&mut self) {
        log::info!("vg.bind_polygons()");
    }

    fn draw_polygon(&mut self, poly: &Self::Polygon, style: Style) {
        log::info!(
            "vg.draw_polygon({} vertices, color={:?})",
            poly.len(),
            style.color.to_array()
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let asset_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| glyph_app::DEFAULT_ASSET_PATH.to_string());

    let config = AppConfig::new().with_asset_path(&asset_path);

    let mut engine = EngineState::create(
        &config,
        &FileAssetStore,
        LoggingBuilder::default(),
        LoggingRenderer::default(),
        LoggingVg::default(),
        SystemClock::new(),
    )?;

    log::info!("onCreate complete; drawing glyph {}", engine.current_id);
    engine.draw();

    engine.event(PlatformEvent::ContentRect(ContentRectEvent {
        t: 0,
        l: 0,
        b: 512,
        r: 512,
    }));

    let exit = engine.event(PlatformEvent::Key(KeyEvent {
        kind: KeyEventKind::Up,
        keycode: 'O' as u32,
        repeat: false,
    }));
    log::info!("switched glyph, exit requested = {exit}");
    engine.draw();

    engine.pause();

    let exit = engine.event(PlatformEvent::Key(KeyEvent {
        kind: KeyEventKind::Up,
        keycode: ESCAPE,
        repeat: false,
    }));
    log::info!("escape pressed once, exit requested = {exit}");

    engine.destroy();
    Ok(())
}
