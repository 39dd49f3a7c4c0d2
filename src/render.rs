use crate::constants::*;
use crate::core::{DrawView, InputMode, SlingshotState};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Immediate-mode Canvas 2D sink. Everything is redrawn from the core's
/// snapshot values each frame.
pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    pub fn render(&self, viewport: Vec2, state: &SlingshotState, now_ms: f64) {
        let ctx = &self.ctx;
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(BACKGROUND_COLOR);
        ctx.fill_rect(0.0, 0.0, viewport.x as f64, viewport.y as f64);

        if let Some(view) = state.machine.view() {
            self.draw_slingshot(&view);
        }
        self.draw_particles(state, now_ms);
        if state.mode() == InputMode::Gesture {
            if let Some(sample) = state.last_sample.filter(|s| s.is_detected) {
                self.draw_cursor(sample.cursor, sample.is_pinching);
            }
        }
    }

    fn draw_slingshot(&self, view: &DrawView) {
        let ctx = &self.ctx;
        ctx.save();
        if view.pending_release {
            ctx.set_global_alpha(PENDING_RELEASE_ALPHA);
        }

        // band
        if view.line_end != view.origin {
            ctx.set_stroke_style_str(BAND_COLOR);
            ctx.set_line_width(BAND_WIDTH_PX);
            ctx.set_line_cap("round");
            ctx.begin_path();
            ctx.move_to(view.origin.x as f64, view.origin.y as f64);
            ctx.line_to(view.line_end.x as f64, view.line_end.y as f64);
            ctx.stroke();
        }

        self.fill_circle(view.origin, ANCHOR_RADIUS_PX, ANCHOR_COLOR);

        // projectile with a short tick pointing along the aim
        let r = PROJECTILE_RADIUS_PX * view.projectile_scale as f64;
        self.fill_circle(view.current, r, PROJECTILE_COLOR);
        let a = (view.angle_deg as f64).to_radians();
        let (cx, cy) = (view.current.x as f64, view.current.y as f64);
        ctx.set_stroke_style_str(PROJECTILE_COLOR);
        ctx.set_line_width(BAND_WIDTH_PX * 0.5);
        ctx.begin_path();
        ctx.move_to(cx + a.cos() * r, cy + a.sin() * r);
        ctx.line_to(
            cx + a.cos() * (r + PROJECTILE_AIM_TICK_PX),
            cy + a.sin() * (r + PROJECTILE_AIM_TICK_PX),
        );
        ctx.stroke();
        ctx.restore();
    }

    fn draw_particles(&self, state: &SlingshotState, now_ms: f64) {
        let ctx = &self.ctx;
        for (i, p) in state.bursts.frames(now_ms).enumerate() {
            if p.opacity <= 0.0 {
                continue;
            }
            let half = p.size as f64 * 0.5;
            ctx.save();
            ctx.set_global_alpha(p.opacity as f64);
            ctx.set_fill_style_str(PARTICLE_COLORS[i % PARTICLE_COLORS.len()]);
            _ = ctx.translate(p.position.x as f64, p.position.y as f64);
            _ = ctx.rotate((p.rotation_deg as f64).to_radians());
            ctx.fill_rect(-half, -half, p.size as f64, p.size as f64);
            ctx.restore();
        }
    }

    fn draw_cursor(&self, at: Vec2, pinching: bool) {
        let ctx = &self.ctx;
        if pinching {
            self.fill_circle(at, CURSOR_RADIUS_PX, CURSOR_COLOR);
            return;
        }
        ctx.set_stroke_style_str(CURSOR_COLOR);
        ctx.set_line_width(CURSOR_LINE_WIDTH_PX);
        ctx.begin_path();
        _ = ctx.arc(at.x as f64, at.y as f64, CURSOR_RADIUS_PX, 0.0, TAU);
        ctx.stroke();
    }

    fn fill_circle(&self, at: Vec2, radius: f64, color: &str) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        _ = ctx.arc(at.x as f64, at.y as f64, radius, 0.0, TAU);
        ctx.fill();
    }
}
