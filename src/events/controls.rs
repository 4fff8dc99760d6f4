use crate::constants::READOUT_DECIMALS;
use crate::dom;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A range input and the element echoing its value.
#[derive(Clone, Copy, Debug)]
pub struct SliderBinding {
    pub slider_id: &'static str,
    pub readout_id: &'static str,
}

/// Reset the slider to `initial`, then forward every parsed `input` value
/// to `on_value` after refreshing the readout.
pub fn wire_slider(
    document: &web::Document,
    binding: SliderBinding,
    initial: f64,
    mut on_value: impl FnMut(f64) + 'static,
) -> anyhow::Result<()> {
    let slider: web::HtmlInputElement = dom::element_by_id(document, binding.slider_id)?;
    slider.set_value(&initial.to_string());
    dom::set_text(
        document,
        binding.readout_id,
        &input::format_readout(initial, READOUT_DECIMALS),
    );

    let doc = document.clone();
    let slider_for_cb = slider.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let Some(v) = input::parse_slider_value(&slider_for_cb.value()) else {
            log::warn!("[slider] ignoring non-numeric #{}", binding.slider_id);
            return;
        };
        dom::set_text(
            &doc,
            binding.readout_id,
            &input::format_readout(v, READOUT_DECIMALS),
        );
        on_value(v);
    }) as Box<dyn FnMut()>);
    _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(())
}
