//! `EngineState`: owns the glyph table, polygon builder, renderer and VG
//! context, and drives `draw()`/`event()` per the platform lifecycle (spec
//! §4.3, §5, §6, §9).

mod asset_store;
mod config;
mod content_rect;
mod engine;
mod error;
mod events;

pub use asset_store::AssetStore;
pub use config::{AppConfig, APP_DIR, APP_NAME, APP_VERSION, DEFAULT_ASSET_PATH};
pub use content_rect::ContentRect;
pub use engine::EngineState;
pub use error::{CreateError, ResourceError};
pub use events::{ContentRectEvent, KeyEvent, KeyEventKind, PlatformEvent, ESCAPE};

#[cfg(test)]
mod tests {
    use super::*;
    use glyph_core::FakeClock;
    use glyph_core::Point;
    use glyph_render::{Color, RenderMode, Renderer, Style, VgContext, Viewport};
    use glyph_tess::PolygonBuilder;

    struct StubAssets(String);

    impl AssetStore for StubAssets {
        fn load(&self, _path: &str) -> Result<String, ResourceError> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default, Clone)]
    struct StubBuilder {
        events: Vec<(bool, Point)>,
    }

    impl PolygonBuilder for StubBuilder {
        type Output = usize;

        fn reset(&mut self) {
            self.events.clear();
        }

        fn point(&mut self, first: bool, p: Point) -> bool {
            self.events.push((first, p));
            true
        }

        fn build(&mut self) -> Option<usize> {
            Some(self.events.len())
        }
    }

    #[derive(Default)]
    struct StubRenderer {
        frame_open: bool,
    }

    impl Renderer for StubRenderer {
        fn begin_default(&mut self, _mode: RenderMode, _clear_color: Color) -> bool {
            self.frame_open = true;
            true
        }

        fn end(&mut self) {
            self.frame_open = false;
        }

        fn surface_size(&self) -> (u32, u32) {
            (800, 600)
        }

        fn viewport(&mut self, _rect: Viewport) {}

        fn scissor(&mut self, _rect: Viewport) {}
    }

    #[derive(Default)]
    struct StubVg {
        draws: usize,
    }

    impl VgContext for StubVg {
        type Polygon = usize;

        fn reset(&mut self, _mvp: glam::Mat4) {}

        fn bind_polygons(&mut self) {}

        fn draw_polygon(&mut self, _poly: &usize, _style: Style) {
            self.draws += 1;
        }
    }

    fn sample_blob() -> String {
        r#"[
            {"i": 65, "w": 1.0, "h": 1.0, "np": 4,
             "p": [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
             "t": [1, 1, 1, 1],
             "nc": 1, "c": [3]}
        ]"#
        .to_string()
    }

    fn make_engine(clock: &FakeClock) -> EngineState<StubBuilder, StubRenderer, StubVg, &FakeClock> {
        let assets = StubAssets(sample_blob());
        let config = AppConfig::new().with_initial_id('A' as i32);
        EngineState::create(
            &config,
            &assets,
            StubBuilder::default(),
            StubRenderer::default(),
            StubVg::default(),
            clock,
        )
        .unwrap()
    }

    #[test]
    fn create_loads_the_table_and_sets_initial_state() {
        let clock = FakeClock::at(0.0);
        let engine = make_engine(&clock);
        assert_eq!(engine.current_id, 'A' as i32);
    }

    #[test]
    fn printable_key_sets_current_id() {
        let clock = FakeClock::at(0.0);
        let mut engine = make_engine(&clock);
        let exit = engine.event(PlatformEvent::Key(KeyEvent {
            kind: KeyEventKind::Up,
            keycode: 'B' as u32,
            repeat: false,
        }));
        assert!(!exit);
        assert_eq!(engine.current_id, 'B' as i32);
    }

    #[test]
    fn digit_nine_maps_to_sixteen_steps() {
        let clock = FakeClock::at(0.0);
        let mut engine = make_engine(&clock);
        engine.event(PlatformEvent::Key(KeyEvent {
            kind: KeyEventKind::Up,
            keycode: '9' as u32,
            repeat: false,
        }));
        assert_eq!(engine.current_steps, 16);
    }

    #[test]
    fn double_tap_escape_within_half_second_requests_exit() {
        let clock = FakeClock::at(0.0);
        let mut engine = make_engine(&clock);
        let escape = |engine: &mut EngineState<StubBuilder, StubRenderer, StubVg, &FakeClock>| {
            engine.event(PlatformEvent::Key(KeyEvent {
                kind: KeyEventKind::Up,
                keycode: ESCAPE,
                repeat: false,
            }))
        };

        assert!(!escape(&mut engine));
        clock.set(0.3);
        assert!(escape(&mut engine));
    }

    #[test]
    fn escape_taps_eight_tenths_apart_do_not_trigger_exit() {
        let clock = FakeClock::at(0.0);
        let mut engine = make_engine(&clock);
        let escape = |engine: &mut EngineState<StubBuilder, StubRenderer, StubVg, &FakeClock>| {
            engine.event(PlatformEvent::Key(KeyEvent {
                kind: KeyEventKind::Up,
                keycode: ESCAPE,
                repeat: false,
            }))
        };

        assert!(!escape(&mut engine));
        clock.set(0.8);
        assert!(!escape(&mut engine));
    }

    #[test]
    fn content_rect_event_swaps_axes_bit_exactly() {
        let clock = FakeClock::at(0.0);
        let mut engine = make_engine(&clock);
        engine.event(PlatformEvent::ContentRect(ContentRectEvent {
            t: 10,
            l: 20,
            b: 50,
            r: 90,
        }));
        let cr = engine.content_rect.unwrap();
        assert_eq!(cr.top, 10);
        assert_eq!(cr.left, 20);
        assert_eq!(cr.raw_width, 40); // b - t
        assert_eq!(cr.raw_height, 70); // r - l
    }

    #[test]
    fn plus_and_minus_adjust_thresh_clamped_at_zero() {
        let clock = FakeClock::at(0.0);
        let mut engine = make_engine(&clock);
        assert_eq!(engine.current_thresh, EngineState::<StubBuilder, StubRenderer, StubVg, &FakeClock>::DEFAULT_THRESH);

        engine.event(PlatformEvent::Key(KeyEvent {
            kind: KeyEventKind::Up,
            keycode: '+' as u32,
            repeat: false,
        }));
        assert_eq!(engine.current_thresh, 1);

        engine.event(PlatformEvent::Key(KeyEvent {
            kind: KeyEventKind::Up,
            keycode: '-' as u32,
            repeat: false,
        }));
        assert_eq!(engine.current_thresh, 0);

        engine.event(PlatformEvent::Key(KeyEvent {
            kind: KeyEventKind::Up,
            keycode: '-' as u32,
            repeat: false,
        }));
        assert_eq!(engine.current_thresh, 0);
    }

    #[test]
    fn draw_does_not_panic_and_draws_exactly_once() {
        let clock = FakeClock::at(0.0);
        let mut engine = make_engine(&clock);
        engine.draw();
    }
}
