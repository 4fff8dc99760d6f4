use super::constants::*;
use super::diagram::Diagram;
use super::plot::{arrowhead, PlotFrame};
use super::surface::{Color, DrawSurface, Pen};
use glam::DVec2;

/// Result of testing one trial step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOutcome {
    pub candidate: f64,
    pub lhs: f64,
    pub rhs: f64,
    pub satisfied: bool,
}

/// Sufficient-decrease test for a steepest-descent step of length `alpha`:
/// `f(x - α f'(x)) ≤ f(x) - c·α·f'(x)²`.
pub fn armijo(
    f: impl Fn(f64) -> f64,
    fp: impl Fn(f64) -> f64,
    x: f64,
    alpha: f64,
    c: f64,
) -> StepOutcome {
    let g = fp(x);
    let candidate = x - alpha * g;
    let lhs = f(candidate);
    let rhs = f(x) - c * alpha * g * g;
    StepOutcome {
        candidate,
        lhs,
        rhs,
        satisfied: lhs <= rhs,
    }
}

/// Strong Wolfe curvature test along `p = -f'(x)`:
/// `|f'(x + αp)·p| ≤ c₂·|f'(x)·p|`.
pub fn strong_wolfe_curvature(fp: impl Fn(f64) -> f64, x: f64, alpha: f64, c2: f64) -> StepOutcome {
    let g = fp(x);
    let p = -g;
    let candidate = x + alpha * p;
    let lhs = (fp(candidate) * p).abs();
    let rhs = c2 * (g * p).abs();
    StepOutcome {
        candidate,
        lhs,
        rhs,
        satisfied: lhs <= rhs,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineSearchCheck {
    Armijo,
    Curvature,
}

/// Fixed iterate on `sin` with a slider-controlled trial step.
#[derive(Clone, Debug)]
pub struct LineSearchDiagram {
    frame: PlotFrame,
    check: LineSearchCheck,
    iterate: f64,
    alpha: f64,
    coeff: f64,
}

impl LineSearchDiagram {
    pub fn new(check: LineSearchCheck) -> Self {
        let coeff = match check {
            LineSearchCheck::Armijo => DEFAULT_ARMIJO_C,
            LineSearchCheck::Curvature => DEFAULT_WOLFE_C2,
        };
        Self {
            frame: PlotFrame::new(
                (LINE_SEARCH_X_MIN, LINE_SEARCH_X_MAX),
                (PLOT_Y_MIN, PLOT_Y_MAX),
                PLOT_WIDTH,
                PLOT_HEIGHT,
            ),
            check,
            iterate: LINE_SEARCH_ITERATE,
            alpha: DEFAULT_ALPHA,
            coeff,
        }
    }

    pub fn armijo() -> Self {
        Self::new(LineSearchCheck::Armijo)
    }

    pub fn wolfe() -> Self {
        Self::new(LineSearchCheck::Curvature)
    }

    pub fn check(&self) -> LineSearchCheck {
        self.check
    }

    pub fn frame(&self) -> &PlotFrame {
        &self.frame
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// `c` for Armijo, `c₂` for the curvature check.
    pub fn coeff(&self) -> f64 {
        self.coeff
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        if alpha.is_finite() {
            self.alpha = alpha;
        }
    }

    pub fn set_coeff(&mut self, coeff: f64) {
        if coeff.is_finite() {
            self.coeff = coeff;
        }
    }

    pub fn outcome(&self) -> StepOutcome {
        match self.check {
            LineSearchCheck::Armijo => armijo(f64::sin, f64::cos, self.iterate, self.alpha, self.coeff),
            LineSearchCheck::Curvature => {
                strong_wolfe_curvature(f64::cos, self.iterate, self.alpha, self.coeff)
            }
        }
    }

    pub fn info_text(&self) -> String {
        let o = self.outcome();
        let x = self.iterate;
        match self.check {
            LineSearchCheck::Armijo => format!(
                "xₖ = {:.2}, f(xₖ) = {:.2}; Candidate x = {:.2} {}",
                x,
                x.sin(),
                o.candidate,
                if o.satisfied {
                    "(Acceptable)"
                } else {
                    "(Armijo violated!)"
                }
            ),
            LineSearchCheck::Curvature => format!(
                "Curvature Condition (Strong Wolfe):\n\
                 ----------------------------------------\n\
                 |∇f(x+αp)ᵀ p| = |cos({x} - α·cos({x}))·(-cos({x}))| = {:.3}\n\
                 ≤ c₂|∇f({x})ᵀ p| = c₂·|cos({x})·(-cos({x}))| = {:.3}\n\n\
                 Candidate: x = {x} - α·cos({x}) = {:.3}\n\
                 Condition {}",
                o.lhs,
                o.rhs,
                o.candidate,
                if o.satisfied { "Satisfied" } else { "Violated" },
            ),
        }
    }
}

impl Diagram for LineSearchDiagram {
    fn logical_size(&self) -> DVec2 {
        self.frame.size()
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        let fr = &self.frame;
        surface.clear(fr.width, fr.height);
        fr.draw_axes(surface);
        fr.draw_curve(surface, f64::sin);

        let o = self.outcome();
        let current = fr.to_canvas(self.iterate, self.iterate.sin());
        surface.fill_circle(current, HANDLE_RADIUS, Color::RED);

        let color = if o.satisfied { Color::GREEN } else { Color::RED };
        let cand = fr.to_canvas(o.candidate, o.candidate.sin());
        surface.stroke_line(current, cand, Pen::solid(color, STEP_ARROW_WIDTH));
        surface.fill_circle(cand, HANDLE_RADIUS, color);
        surface.fill_polygon(&arrowhead(current, cand), color);
    }
}
