use glam::DVec2;
use web_sys as web;

/// Map a point in CSS client space onto a logical space of size `space`
/// that fills the element rect at `rect_origin` with size `rect_size`.
#[inline]
pub fn client_to_space(client: DVec2, rect_origin: DVec2, rect_size: DVec2, space: DVec2) -> DVec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local / rect_size * space
    } else {
        local
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_in_space(
    ev: &web::PointerEvent,
    canvas: &web::HtmlCanvasElement,
    space: DVec2,
) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_space(
        DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
        DVec2::new(rect.left(), rect.top()),
        DVec2::new(rect.width(), rect.height()),
        space,
    )
}

/// Parse a slider's string value; empty or malformed input yields `None`.
#[inline]
pub fn parse_slider_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[inline]
pub fn format_readout(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}
