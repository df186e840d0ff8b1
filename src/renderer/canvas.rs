//! Canvas 2D backend (WASM only)

use web_sys::CanvasRenderingContext2d;

use super::{Color, Surface};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    /// Last fill style sent to the context, to skip redundant string churn
    current_fill: Option<Color>,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            current_fill: None,
        }
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        if self.current_fill != Some(color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.current_fill = Some(color);
        }
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }
}
