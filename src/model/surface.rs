use glam::DVec2;

/// CSS color string understood by the 2D canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub &'static str);

impl Color {
    pub const BLACK: Color = Color("black");
    pub const RED: Color = Color("red");
    pub const GREEN: Color = Color("green");
    pub const BLUE: Color = Color("blue");
    pub const AXIS: Color = Color("#aaa");

    #[inline]
    pub fn css(self) -> &'static str {
        self.0
    }
}

/// Stroke style: color, line width and an optional `[dash, gap]` pattern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f64,
    pub dash: Option<[f64; 2]>,
}

impl Pen {
    pub const fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub const fn dashed(color: Color, width: f64, dash: [f64; 2]) -> Self {
        Self {
            color,
            width,
            dash: Some(dash),
        }
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::solid(Color::BLACK, 1.0)
    }
}

/// Minimal raster capability the simulations and diagrams draw through.
///
/// All coordinates are in the caller's logical pixel space; any device pixel
/// ratio scaling is the implementor's business.
pub trait DrawSurface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);
    fn stroke_circle(&mut self, center: DVec2, radius: f64, pen: Pen);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, pen: Pen);
    fn stroke_polyline(&mut self, points: &[DVec2], pen: Pen);
    fn fill_polygon(&mut self, points: &[DVec2], color: Color);
    fn fill_text(&mut self, text: &str, at: DVec2, color: Color);
}
