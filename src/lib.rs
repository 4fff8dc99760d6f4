#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::events::{PointerWiring, Redraw, SliderBinding};
use crate::model::{
    ConeDiagram, Diagram, DiagramKind, HexAnimator, HexConfig, LineSearchDiagram, RatioDiagram,
};
use crate::render::CanvasSurface;
use crate::stats::FrameStats;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
pub mod model;
mod render;
mod stats;
mod viewport;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hexlattice-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvases = document
        .query_selector_all(DIAGRAM_SELECTOR)
        .map_err(dom::js_err)?;

    for i in 0..canvases.length() {
        let Some(node) = canvases.get(i) else {
            continue;
        };
        let canvas = match node.dyn_into::<web::HtmlCanvasElement>() {
            Ok(c) => c,
            Err(_) => continue,
        };
        // one broken page binding must not keep the other diagrams from mounting
        if let Err(e) = mount(&document, canvas) {
            log::error!("mount error: {:?}", e);
        }
    }
    Ok(())
}

fn mount(document: &web::Document, canvas: web::HtmlCanvasElement) -> anyhow::Result<()> {
    let kind: DiagramKind = canvas
        .get_attribute(DIAGRAM_ATTR)
        .ok_or_else(|| anyhow::anyhow!("canvas #{} has no {}", canvas.id(), DIAGRAM_ATTR))?
        .parse()?;
    let surface = CanvasSurface::new(&canvas)?;
    log::info!("[mount] {} on #{}", kind, canvas.id());

    match kind {
        DiagramKind::HexBackground => mount_hex_background(canvas, surface),
        DiagramKind::LipschitzRatio => {
            let diagram = Rc::new(RefCell::new(RatioDiagram::new()));
            mount_static(&canvas, surface, diagram, |_| {})?;
            Ok(())
        }
        DiagramKind::LipschitzCone => mount_cone(document, &canvas, surface),
        DiagramKind::Armijo => mount_line_search(
            document,
            &canvas,
            surface,
            LineSearchDiagram::armijo(),
            SliderBinding {
                slider_id: ARMIJO_C_SLIDER_ID,
                readout_id: ARMIJO_C_READOUT_ID,
            },
        ),
        DiagramKind::Wolfe => mount_line_search(
            document,
            &canvas,
            surface,
            LineSearchDiagram::wolfe(),
            SliderBinding {
                slider_id: WOLFE_C2_SLIDER_ID,
                readout_id: WOLFE_C2_READOUT_ID,
            },
        ),
    }
}

fn mount_hex_background(
    canvas: web::HtmlCanvasElement,
    surface: CanvasSurface,
) -> anyhow::Result<()> {
    let animator = Rc::new(RefCell::new(HexAnimator::new(
        HexConfig::default(),
        rand::random(),
    )));

    let (w, h) = dom::fit_canvas_to_window(&canvas);
    animator.borrow_mut().resize(w, h, &mut surface.clone());
    wire_hex_resize(&canvas, animator.clone(), surface.clone());

    events::wire_pointer_handlers(PointerWiring {
        canvas,
        diagram: animator.clone(),
        redraw: None,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        animator,
        surface,
        stats: FrameStats::new(Duration::from_secs_f64(FRAME_STATS_WINDOW_SECS)),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

fn wire_hex_resize(
    canvas: &web::HtmlCanvasElement,
    animator: Rc<RefCell<HexAnimator>>,
    surface: CanvasSurface,
) {
    let canvas = canvas.clone();
    dom::add_window_listener("resize", move || {
        let (w, h) = dom::fit_canvas_to_window(&canvas);
        animator.borrow_mut().resize(w, h, &mut surface.clone());
    });
}

/// Fit the canvas to its container, wire pointer input and return the
/// redraw callback shared by the diagram's controls.
fn mount_static<D: Diagram + 'static>(
    canvas: &web::HtmlCanvasElement,
    surface: CanvasSurface,
    diagram: Rc<RefCell<D>>,
    after_draw: impl Fn(&D) + 'static,
) -> anyhow::Result<Rc<dyn Fn()>> {
    let redraw: Rc<dyn Fn()> = {
        let diagram = diagram.clone();
        let surface = surface.clone();
        Rc::new(move || {
            let d = diagram.borrow();
            d.draw(&mut surface.clone());
            after_draw(&d);
        })
    };

    let logical = diagram.borrow().logical_size();
    dom::fit_canvas_to_container(canvas, &surface, logical)?;
    {
        let canvas = canvas.clone();
        let redraw = redraw.clone();
        dom::add_window_listener("resize", move || {
            match dom::fit_canvas_to_container(&canvas, &surface, logical) {
                Ok(_) => redraw(),
                Err(e) => log::error!("resize error: {:?}", e),
            }
        });
    }

    let pointer_redraw: Redraw = Some(redraw.clone());
    events::wire_pointer_handlers(PointerWiring {
        canvas: canvas.clone(),
        diagram,
        redraw: pointer_redraw,
    });

    redraw();
    Ok(redraw)
}

fn mount_cone(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    surface: CanvasSurface,
) -> anyhow::Result<()> {
    let diagram = Rc::new(RefCell::new(ConeDiagram::new()));
    let redraw = mount_static(canvas, surface, diagram.clone(), |_| {})?;
    let initial = diagram.borrow().slope();
    events::wire_slider(
        document,
        SliderBinding {
            slider_id: SLOPE_SLIDER_ID,
            readout_id: SLOPE_READOUT_ID,
        },
        initial,
        move |v| {
            diagram.borrow_mut().set_slope(v);
            redraw();
        },
    )
}

fn mount_line_search(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    surface: CanvasSurface,
    diagram: LineSearchDiagram,
    coeff_binding: SliderBinding,
) -> anyhow::Result<()> {
    let check = diagram.check();
    let (alpha, coeff) = (diagram.alpha(), diagram.coeff());
    let diagram = Rc::new(RefCell::new(diagram));

    let doc = document.clone();
    let redraw = mount_static(canvas, surface, diagram.clone(), move |d| {
        dom::set_text(&doc, INFO_ID, &d.info_text());
    })?;

    {
        let diagram = diagram.clone();
        let redraw = redraw.clone();
        events::wire_slider(
            document,
            SliderBinding {
                slider_id: ALPHA_SLIDER_ID,
                readout_id: ALPHA_READOUT_ID,
            },
            alpha,
            move |v| {
                diagram.borrow_mut().set_alpha(v);
                redraw();
            },
        )?;
    }
    events::wire_slider(document, coeff_binding, coeff, move |v| {
        diagram.borrow_mut().set_coeff(v);
        redraw();
    })?;
    log::info!("[mount] line search {:?} alpha={:.2} coeff={:.2}", check, alpha, coeff);
    Ok(())
}
