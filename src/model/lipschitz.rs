use super::constants::*;
use super::diagram::Diagram;
use super::plot::PlotFrame;
use super::surface::{Color, DrawSurface, Pen};
use glam::DVec2;
use std::f64::consts::PI;

#[inline]
fn sine(x: f64) -> f64 {
    x.sin()
}

/// `|f(x1) - f(x2)| / |x1 - x2|`, or `fallback` when the points coincide.
pub fn lipschitz_ratio(f: impl Fn(f64) -> f64, x1: f64, x2: f64, fallback: f64) -> f64 {
    let dx = (x1 - x2).abs();
    if dx < RATIO_DX_EPSILON {
        return fallback;
    }
    (f(x1) - f(x2)).abs() / dx
}

/// True when `f(x)` lies inside the cone of slope `slope` anchored at `(apex_x, f(apex_x))`.
pub fn within_cone(f: impl Fn(f64) -> f64, apex_x: f64, slope: f64, x: f64) -> bool {
    (f(x) - f(apex_x)).abs() <= slope * (x - apex_x).abs() + 1e-12
}

fn sine_frame() -> PlotFrame {
    PlotFrame::new((-PI, PI), (PLOT_Y_MIN, PLOT_Y_MAX), PLOT_WIDTH, PLOT_HEIGHT)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    A,
    B,
}

/// Two points dragged along `sin`, showing the secant slope against `L = 1`.
#[derive(Clone, Debug)]
pub struct RatioDiagram {
    frame: PlotFrame,
    a: f64,
    b: f64,
    lipschitz: f64,
    dragging: Option<Handle>,
}

impl Default for RatioDiagram {
    fn default() -> Self {
        Self {
            frame: sine_frame(),
            a: RATIO_HANDLE_A,
            b: RATIO_HANDLE_B,
            lipschitz: SINE_LIPSCHITZ,
            dragging: None,
        }
    }
}

impl RatioDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &PlotFrame {
        &self.frame
    }

    pub fn handle_x(&self, handle: Handle) -> f64 {
        match handle {
            Handle::A => self.a,
            Handle::B => self.b,
        }
    }

    pub fn handle_point(&self, handle: Handle) -> DVec2 {
        let x = self.handle_x(handle);
        self.frame.to_canvas(x, sine(x))
    }

    pub fn set_handle_x(&mut self, handle: Handle, x: f64) {
        match handle {
            Handle::A => self.a = x,
            Handle::B => self.b = x,
        }
    }

    pub fn dragging(&self) -> Option<Handle> {
        self.dragging
    }

    pub fn ratio(&self) -> f64 {
        lipschitz_ratio(sine, self.a, self.b, self.lipschitz)
    }

    pub fn readout(&self) -> String {
        format!(
            "(|sin(x₁)-sin(x₂)|)/(|x₁-x₂|) = {:.3} ≤ {}",
            self.ratio(),
            self.lipschitz
        )
    }
}

impl Diagram for RatioDiagram {
    fn logical_size(&self) -> DVec2 {
        self.frame.size()
    }

    fn pointer_down(&mut self, pos: DVec2) {
        let da = pos.distance(self.handle_point(Handle::A));
        let db = pos.distance(self.handle_point(Handle::B));
        let picked = if da < db { Handle::A } else { Handle::B };
        self.dragging = Some(picked);
    }

    fn pointer_move(&mut self, pos: DVec2) {
        if let Some(h) = self.dragging {
            let x = self.frame.to_math_x(pos.x);
            self.set_handle_x(h, x);
        }
    }

    fn pointer_up(&mut self) {
        self.dragging = None;
    }

    fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        let fr = &self.frame;
        surface.clear(fr.width, fr.height);
        fr.draw_axes(surface);
        fr.draw_curve(surface, sine);

        let pa = self.handle_point(Handle::A);
        let pb = self.handle_point(Handle::B);
        surface.stroke_line(pa, pb, Pen::solid(Color::RED, CURVE_WIDTH));
        for p in [pa, pb] {
            surface.fill_circle(p, HANDLE_RADIUS, Color::GREEN);
        }

        surface.fill_text(&self.readout(), DVec2::new(10.0, 20.0), Color::BLACK);
    }
}

/// Draggable apex on `sin` with the cone `f(a) ± L(x - a)` drawn through it.
#[derive(Clone, Debug)]
pub struct ConeDiagram {
    frame: PlotFrame,
    apex_x: f64,
    slope: f64,
    dragging: bool,
}

impl Default for ConeDiagram {
    fn default() -> Self {
        Self {
            frame: sine_frame(),
            apex_x: 0.0,
            slope: DEFAULT_CONE_SLOPE,
            dragging: false,
        }
    }
}

impl ConeDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &PlotFrame {
        &self.frame
    }

    pub fn apex_x(&self) -> f64 {
        self.apex_x
    }

    pub fn apex_point(&self) -> DVec2 {
        self.frame.to_canvas(self.apex_x, sine(self.apex_x))
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Non-finite slider values are ignored; negative slopes collapse to zero.
    pub fn set_slope(&mut self, slope: f64) {
        if slope.is_finite() {
            self.slope = slope.max(0.0);
        }
    }

    pub fn slope_readout(&self) -> String {
        format!("{:.2}", self.slope)
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    fn grab_radius(&self) -> f64 {
        self.frame.width * CONE_GRAB_FRACTION
    }

    /// Upper and lower cone boundaries as canvas-space segments spanning the domain.
    pub fn boundaries(&self) -> [(DVec2, DVec2); 2] {
        let fr = &self.frame;
        let a = self.apex_x;
        let fa = sine(a);
        let l = self.slope;
        let edge = |sign: f64, x: f64| fr.to_canvas(x, fa + sign * l * (x - a));
        [
            (edge(1.0, fr.x_min), edge(1.0, fr.x_max)),
            (edge(-1.0, fr.x_min), edge(-1.0, fr.x_max)),
        ]
    }

    /// Whether every sampled point of the curve stays inside the cone.
    pub fn contains_curve(&self, samples: usize) -> bool {
        let fr = &self.frame;
        let n = samples.max(2);
        (0..n).all(|i| {
            let x = fr.x_min + (fr.x_max - fr.x_min) * i as f64 / (n - 1) as f64;
            within_cone(sine, self.apex_x, self.slope, x)
        })
    }
}

impl Diagram for ConeDiagram {
    fn logical_size(&self) -> DVec2 {
        self.frame.size()
    }

    fn pointer_down(&mut self, pos: DVec2) {
        if pos.distance(self.apex_point()) < self.grab_radius() {
            self.dragging = true;
        }
    }

    fn pointer_move(&mut self, pos: DVec2) {
        if self.dragging {
            self.apex_x = self.frame.to_math_x(pos.x);
        }
    }

    fn pointer_up(&mut self) {
        self.dragging = false;
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        let fr = &self.frame;
        surface.clear(fr.width, fr.height);
        fr.draw_axes(surface);
        fr.draw_curve(surface, sine);

        let pen = Pen::dashed(Color::RED, CURVE_WIDTH, CONE_DASH);
        for (from, to) in self.boundaries() {
            surface.stroke_line(from, to, pen);
        }

        surface.fill_circle(self.apex_point(), HANDLE_RADIUS, Color::BLACK);
    }
}
