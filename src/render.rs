use anyhow::anyhow;
use glam::DVec2;
use heart_core::{Bounds, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// ===================== Canvas 2D surface =====================

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext(2d): {e:?}"))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("unexpected 2d context type: {e:?}"))?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, bounds: Bounds) {
        self.ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: DVec2) {
        self.ctx.move_to(p.x, p.y);
    }

    fn bezier_curve_to(&mut self, c1: DVec2, c2: DVec2, end: DVec2) {
        self.ctx
            .bezier_curve_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
    }

    fn set_fill_color(&mut self, color: &str) {
        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(color));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }
}

/// Current backing-store size of the canvas.
#[inline]
pub fn canvas_bounds(canvas: &web::HtmlCanvasElement) -> Bounds {
    Bounds::new(canvas.width() as f64, canvas.height() as f64)
}
