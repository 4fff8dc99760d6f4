use glam::DVec2;

/// Sizing for a canvas that keeps a fixed logical space scaled to its
/// container's width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasFit {
    /// CSS size of the element.
    pub css: DVec2,
    /// Backing store size in device pixels.
    pub backing: (u32, u32),
    /// Logical-to-device scale applied through the context transform.
    pub pixel_scale: f64,
}

impl CanvasFit {
    /// A non-positive container width falls back to the logical width.
    pub fn compute(container_width: f64, logical: DVec2, device_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        let css_w = if container_width > 0.0 {
            container_width
        } else {
            logical.x
        };
        let scale = css_w / logical.x;
        let css = DVec2::new(css_w, logical.y * scale);
        let backing = (
            (css.x * dpr).round().max(1.0) as u32,
            (css.y * dpr).round().max(1.0) as u32,
        );
        Self {
            css,
            backing,
            pixel_scale: scale * dpr,
        }
    }
}
