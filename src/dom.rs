use crate::render::CanvasSurface;
use crate::viewport::CanvasFit;
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Look up `#id` and cast it to the requested element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("#{} has an unexpected element type", id))
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Match the canvas backing store to the window, one canvas pixel per CSS pixel.
pub fn fit_canvas_to_window(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let Some(window) = web::window() else {
        return (canvas.width(), canvas.height());
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .map(|f| f.max(0.0) as u32)
            .unwrap_or(0)
    };
    let w = dim(window.inner_width());
    let h = dim(window.inner_height());
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

/// Scale a fixed logical space to the canvas's container width, accounting
/// for devicePixelRatio through the context transform.
pub fn fit_canvas_to_container(
    canvas: &web::HtmlCanvasElement,
    surface: &CanvasSurface,
    logical: DVec2,
) -> anyhow::Result<CanvasFit> {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let container_width = canvas
        .parent_element()
        .map(|p| p.client_width() as f64)
        .unwrap_or(0.0);
    let fit = CanvasFit::compute(container_width, logical, dpr);

    let style = canvas.style();
    style
        .set_property("width", &format!("{}px", fit.css.x))
        .map_err(js_err)?;
    style
        .set_property("height", &format!("{}px", fit.css.y))
        .map_err(js_err)?;
    // resizing the backing store resets the context state, so the transform goes last
    canvas.set_width(fit.backing.0);
    canvas.set_height(fit.backing.1);
    surface.set_pixel_scale(fit.pixel_scale)?;
    Ok(fit)
}

#[inline]
pub fn add_window_listener(event: &str, handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
