use crate::constants::LABEL_FONT;
use crate::dom::js_err;
use crate::model::{Color, DrawSurface, Pen};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `DrawSurface` backed by a canvas 2D context.
///
/// Cloning shares the same underlying context.
#[derive(Clone)]
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow::anyhow!("no 2d context on #{}", canvas.id()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx })
    }

    /// Uniform logical-to-device scale; resets any previous transform.
    pub fn set_pixel_scale(&self, scale: f64) -> anyhow::Result<()> {
        self.ctx
            .set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0)
            .map_err(js_err)
    }

    fn apply_pen(&self, pen: Pen) {
        self.ctx.set_stroke_style_str(pen.color.css());
        self.ctx.set_line_width(pen.width);
        let dash = js_sys::Array::new();
        if let Some([on, off]) = pen.dash {
            dash.push(&on.into());
            dash.push(&off.into());
        }
        _ = self.ctx.set_line_dash(&dash);
    }

    fn trace(&self, points: &[DVec2]) -> bool {
        let Some((first, rest)) = points.split_first() else {
            return false;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        true
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.ctx.set_fill_style_str(color.css());
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, pen: Pen) {
        self.apply_pen(pen);
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU);
        self.ctx.stroke();
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, pen: Pen) {
        self.apply_pen(pen);
        self.trace(&[from, to]);
        self.ctx.stroke();
    }

    fn stroke_polyline(&mut self, points: &[DVec2], pen: Pen) {
        self.apply_pen(pen);
        if self.trace(points) {
            self.ctx.stroke();
        }
    }

    fn fill_polygon(&mut self, points: &[DVec2], color: Color) {
        self.ctx.set_fill_style_str(color.css());
        if self.trace(points) {
            self.ctx.close_path();
            self.ctx.fill();
        }
    }

    fn fill_text(&mut self, text: &str, at: DVec2, color: Color) {
        self.ctx.set_fill_style_str(color.css());
        self.ctx.set_font(LABEL_FONT);
        _ = self.ctx.fill_text(text, at.x, at.y);
    }
}
