use glam::Mat4;

use glyph_core::{Clock, Instant, Point};
use glyph_data::GlyphTable;
use glyph_render::{Color, RenderMode, Renderer, Style, VgContext, Viewport};
use glyph_tess::PolygonBuilder;

use crate::asset_store::AssetStore;
use crate::config::AppConfig;
use crate::content_rect::ContentRect;
use crate::error::CreateError;
use crate::events::{PlatformEvent, ESCAPE};

/// Double-tap-to-exit window (spec §4.3, §8 scenario 6).
const DOUBLE_TAP_WINDOW_SECS: f64 = 0.5;

/// Owns the glyph table, the polygon builder, the renderer and the VG
/// context — everything `onDestroy` must release, in reverse order of
/// acquisition (spec §5 "Shared resources", §9 "Ownership").
pub struct EngineState<B, R, V, C>
where
    B: PolygonBuilder,
    B::Output: Clone,
    R: Renderer,
    V: VgContext<Polygon = B::Output>,
    C: Clock,
{
    table: GlyphTable<B::Output>,
    builder: B,
    renderer: R,
    vg: V,
    clock: C,
    default_poly: B::Output,
    pub current_id: i32,
    pub current_steps: i32,
    pub current_thresh: i32,
    pub content_rect: Option<ContentRect>,
    escape_t0: Instant,
}

impl<B, R, V, C> EngineState<B, R, V, C>
where
    B: PolygonBuilder,
    B::Output: Clone,
    R: Renderer,
    V: VgContext<Polygon = B::Output>,
    C: Clock,
{
    /// `thresh` starts at this value unless `AppConfig::with_initial_thresh`
    /// overrides it; `0` disables the adaptive estimator (fixed-step mode).
    pub const DEFAULT_THRESH: i32 = 0;

    /// `onCreate`: load and validate the glyph table, build the default
    /// fallback polygon, and assemble the engine. Asset I/O happens exactly
    /// once, here (spec §5).
    pub fn create<A: AssetStore>(
        config: &AppConfig,
        assets: &A,
        mut builder: B,
        renderer: R,
        vg: V,
        clock: C,
    ) -> Result<Self, CreateError> {
        let blob = assets.load(&config.asset_path)?;
        let table: GlyphTable<B::Output> = glyph_loader::load(&blob)?;

        builder.reset();
        builder.point(true, Point::new(0.0, 0.0));
        builder.point(false, Point::new(10.0, 0.0));
        builder.point(false, Point::new(10.0, 10.0));
        builder.point(false, Point::new(0.0, 10.0));
        let default_poly = builder
            .build()
            .ok_or(CreateError::DefaultPolygonBuildFailed)?;

        Ok(Self {
            table,
            builder,
            renderer,
            vg,
            clock,
            default_poly,
            current_id: config.initial_id,
            current_steps: config.initial_steps,
            current_thresh: config.initial_thresh,
            content_rect: None,
            escape_t0: Instant::NEG_INFINITY,
        })
    }

    /// Reserved hook; currently a no-op (spec §4.3).
    pub fn pause(&mut self) {}

    /// `onDraw`: begin the frame, install the content rect if any, look up
    /// and tessellate the current glyph, and draw it (or the default
    /// fallback) centered in an orthographic projection (spec §4.3).
    pub fn draw(&mut self) {
        if !self.renderer.begin_default(RenderMode::Default, Color::BLACK) {
            log::warn!("renderer refused to begin the frame; skipping draw");
            return;
        }

        let _surface_size = self.renderer.surface_size();

        if let Some(cr) = self.content_rect {
            if cr.is_valid() {
                let rect = Viewport::new(cr.left, cr.top, cr.raw_width, cr.raw_height);
                self.renderer.viewport(rect);
                self.renderer.scissor(rect);
            }
        }

        let mut glyph_extent = None;
        let poly = if let Some(record) = self.table.get(self.current_id) {
            glyph_extent = Some((record.w, record.h));
            match glyph_tess::build(record, &mut self.builder, self.current_steps, self.current_thresh) {
                Ok(poly) => poly,
                Err(err) => {
                    log::warn!(
                        "tessellation failed for glyph {}: {}",
                        self.current_id,
                        err
                    );
                    None
                }
            }
        } else {
            None
        };

        match (poly, glyph_extent) {
            (Some(handle), Some((w, h))) => {
                let l = -(h - w) / 2.0;
                let r = l + h;
                let b = h;
                let t = 0.0;
                let mvp = Mat4::orthographic_rh(l, r, b, t, 0.0, 2.0);
                self.vg.reset(mvp);
                self.vg.bind_polygons();
                self.vg.draw_polygon(&handle, Style::FALLBACK_MAGENTA);
            }
            _ => {
                let mvp = Mat4::orthographic_rh(0.0, 10.0, 10.0, 0.0, 0.0, 2.0);
                self.vg.reset(mvp);
                self.vg.bind_polygons();
                self.vg.draw_polygon(&self.default_poly, Style::FALLBACK_MAGENTA);
            }
        }

        self.renderer.end();
    }

    /// `onEvent`: returns `true` if the platform should exit (spec §4.3).
    pub fn event(&mut self, e: PlatformEvent) -> bool {
        match e {
            PlatformEvent::ContentRect(rect) => {
                self.content_rect = Some(ContentRect::from_event(rect));
                false
            }
            PlatformEvent::Key(_) => match e.actionable_key() {
                None => false,
                Some(key) => {
                    match key.keycode {
                        ESCAPE => {
                            let now = self.clock.now();
                            let exit = now.since(self.escape_t0) < DOUBLE_TAP_WINDOW_SECS;
                            self.escape_t0 = now;
                            exit
                        }
                        c @ 48..=57 => {
                            let mut steps = c - 48;
                            if steps == 9 {
                                steps = 16;
                            }
                            self.current_steps = steps as i32;
                            false
                        }
                        c if c == '+' as u32 => {
                            self.current_thresh += 1;
                            false
                        }
                        c if c == '-' as u32 => {
                            self.current_thresh = (self.current_thresh - 1).max(0);
                            false
                        }
                        c @ 32..=126 => {
                            self.current_id = c as i32;
                            false
                        }
                        _ => false,
                    }
                }
            },
        }
    }

    /// `onDestroy`: release owned resources in reverse order of acquisition
    /// (spec §5). Consumes `self` so nothing can be used afterward.
    pub fn destroy(self) {
        drop(self.vg);
        drop(self.renderer);
        drop(self.builder);
        drop(self.table);
    }
}
