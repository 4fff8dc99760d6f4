use super::surface::DrawSurface;
use glam::DVec2;
use std::fmt;
use std::str::FromStr;

/// Common input surface of every interactive canvas.
///
/// Pointer positions are in the diagram's logical pixel space. The default
/// handlers ignore input so purely slider-driven diagrams only implement
/// `draw`.
pub trait Diagram {
    /// Logical canvas size the diagram draws into.
    fn logical_size(&self) -> DVec2;

    fn pointer_down(&mut self, _pos: DVec2) {}
    fn pointer_move(&mut self, _pos: DVec2) {}
    fn pointer_up(&mut self) {}
    fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Whether a pointer drag is currently moving part of the diagram.
    fn is_dragging(&self) -> bool {
        false
    }

    fn draw(&self, surface: &mut dyn DrawSurface);
}

/// Diagrams that can be hosted by a `canvas[data-diagram]` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagramKind {
    HexBackground,
    LipschitzRatio,
    LipschitzCone,
    Armijo,
    Wolfe,
}

impl DiagramKind {
    pub const ALL: [DiagramKind; 5] = [
        DiagramKind::HexBackground,
        DiagramKind::LipschitzRatio,
        DiagramKind::LipschitzCone,
        DiagramKind::Armijo,
        DiagramKind::Wolfe,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DiagramKind::HexBackground => "hex-background",
            DiagramKind::LipschitzRatio => "lipschitz-ratio",
            DiagramKind::LipschitzCone => "lipschitz-cone",
            DiagramKind::Armijo => "armijo",
            DiagramKind::Wolfe => "wolfe",
        }
    }

    /// Whether the diagram is animated every frame rather than redrawn on input.
    pub fn is_animated(self) -> bool {
        matches!(self, DiagramKind::HexBackground)
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DiagramKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DiagramKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| anyhow::anyhow!("unknown diagram kind {:?}", s))
    }
}
