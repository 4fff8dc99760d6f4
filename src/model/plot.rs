use super::constants::{ARROWHEAD_LENGTH, CURVE_WIDTH};
use super::surface::{Color, DrawSurface, Pen};
use glam::DVec2;
use std::f64::consts::FRAC_PI_6;

/// Linear map between a math-space window and a logical canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotFrame {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotFrame {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), width: f64, height: f64) -> Self {
        Self {
            x_min: x_range.0,
            x_max: x_range.1,
            y_min: y_range.0,
            y_max: y_range.1,
            width,
            height,
        }
    }

    #[inline]
    pub fn to_canvas_x(&self, x: f64) -> f64 {
        (x - self.x_min) / (self.x_max - self.x_min) * self.width
    }

    #[inline]
    pub fn to_canvas_y(&self, y: f64) -> f64 {
        self.height - (y - self.y_min) / (self.y_max - self.y_min) * self.height
    }

    #[inline]
    pub fn to_math_x(&self, canvas_x: f64) -> f64 {
        self.x_min + canvas_x / self.width * (self.x_max - self.x_min)
    }

    #[inline]
    pub fn to_canvas(&self, x: f64, y: f64) -> DVec2 {
        DVec2::new(self.to_canvas_x(x), self.to_canvas_y(y))
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Grey axes through the math origin.
    pub fn draw_axes(&self, surface: &mut dyn DrawSurface) {
        let pen = Pen::solid(Color::AXIS, 1.0);
        let y0 = self.to_canvas_y(0.0);
        let x0 = self.to_canvas_x(0.0);
        surface.stroke_line(DVec2::new(0.0, y0), DVec2::new(self.width, y0), pen);
        surface.stroke_line(DVec2::new(x0, 0.0), DVec2::new(x0, self.height), pen);
    }

    /// Samples `f` once per logical pixel column across the window.
    pub fn curve_points(&self, f: impl Fn(f64) -> f64) -> Vec<DVec2> {
        let columns = self.width.max(0.0).floor() as usize;
        (0..=columns)
            .map(|i| {
                let cx = i as f64;
                DVec2::new(cx, self.to_canvas_y(f(self.to_math_x(cx))))
            })
            .collect()
    }

    pub fn draw_curve(&self, surface: &mut dyn DrawSurface, f: impl Fn(f64) -> f64) {
        let points = self.curve_points(f);
        surface.stroke_polyline(&points, Pen::solid(Color::BLUE, CURVE_WIDTH));
    }
}

/// Triangle for an arrowhead at `to`, pointing away from `from`.
pub fn arrowhead(from: DVec2, to: DVec2) -> [DVec2; 3] {
    let d = to - from;
    let angle = d.y.atan2(d.x);
    let wing = |a: f64| to - DVec2::new(a.cos(), a.sin()) * ARROWHEAD_LENGTH;
    [to, wing(angle - FRAC_PI_6), wing(angle + FRAC_PI_6)]
}
