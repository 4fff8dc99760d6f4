// Shared host-side test support.
// The main crate is wasm-only, so the pure-Rust model modules are included directly.

#![allow(dead_code)]

pub mod model {
    pub mod animator {
        include!("../../src/model/animator.rs");
    }
    pub mod constants {
        include!("../../src/model/constants.rs");
    }
    pub mod diagram {
        include!("../../src/model/diagram.rs");
    }
    pub mod hex {
        include!("../../src/model/hex.rs");
    }
    pub mod line_search {
        include!("../../src/model/line_search.rs");
    }
    pub mod lipschitz {
        include!("../../src/model/lipschitz.rs");
    }
    pub mod plot {
        include!("../../src/model/plot.rs");
    }
    pub mod surface {
        include!("../../src/model/surface.rs");
    }
}

use glam::DVec2;
use model::surface::{Color, DrawSurface, Pen};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear { width: f64, height: f64 },
    FillCircle { center: DVec2, radius: f64, color: Color },
    StrokeCircle { center: DVec2, radius: f64, pen: Pen },
    Line { from: DVec2, to: DVec2, pen: Pen },
    Polyline { points: Vec<DVec2>, pen: Pen },
    Polygon { points: Vec<DVec2>, color: Color },
    Text { text: String, at: DVec2, color: Color },
}

/// Surface that records every draw call instead of rasterising.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }

    pub fn fill_circles(&self) -> Vec<(DVec2, f64, Color)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillCircle {
                    center,
                    radius,
                    color,
                } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn stroke_circles(&self) -> Vec<(DVec2, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::StrokeCircle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(DVec2, DVec2, Pen)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Line { from, to, pen } => Some((*from, *to, *pen)),
                _ => None,
            })
            .collect()
    }

    pub fn polygons(&self) -> Vec<(Vec<DVec2>, Color)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Polygon { points, color } => Some((points.clone(), *color)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.calls.push(DrawCall::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, pen: Pen) {
        self.calls.push(DrawCall::StrokeCircle {
            center,
            radius,
            pen,
        });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, pen: Pen) {
        self.calls.push(DrawCall::Line { from, to, pen });
    }

    fn stroke_polyline(&mut self, points: &[DVec2], pen: Pen) {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            pen,
        });
    }

    fn fill_polygon(&mut self, points: &[DVec2], color: Color) {
        self.calls.push(DrawCall::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_text(&mut self, text: &str, at: DVec2, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            at,
            color,
        });
    }
}

pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}
