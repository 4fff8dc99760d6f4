use crate::input;
use crate::model::Diagram;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Called after input that changed what a diagram shows. Animated
/// diagrams pass `None` and let the frame loop redraw.
pub type Redraw = Option<Rc<dyn Fn()>>;

pub struct PointerWiring<D: Diagram + 'static> {
    pub canvas: web::HtmlCanvasElement,
    pub diagram: Rc<RefCell<D>>,
    pub redraw: Redraw,
}

impl<D: Diagram + 'static> Clone for PointerWiring<D> {
    fn clone(&self) -> Self {
        Self {
            canvas: self.canvas.clone(),
            diagram: self.diagram.clone(),
            redraw: self.redraw.clone(),
        }
    }
}

impl<D: Diagram + 'static> PointerWiring<D> {
    fn position(&self, ev: &web::PointerEvent) -> glam::DVec2 {
        let space = self.diagram.borrow().logical_size();
        input::pointer_in_space(ev, &self.canvas, space)
    }

    fn redraw(&self) {
        if let Some(r) = &self.redraw {
            r();
        }
    }
}

pub fn wire_pointer_handlers<D: Diagram + 'static>(w: PointerWiring<D>) {
    // keep touch drags from scrolling the page
    _ = w.canvas.style().set_property("touch-action", "none");
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointer_release(&w, "pointerup", false);
    wire_pointer_release(&w, "pointercancel", false);
    wire_pointer_release(&w, "pointerleave", true);
}

fn listen<D: Diagram + 'static>(
    w: &PointerWiring<D>,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>
    );
    _ = w
        .canvas
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove<D: Diagram + 'static>(w: &PointerWiring<D>) {
    let w2 = w.clone();
    listen(w, "pointermove", move |ev| {
        let pos = w2.position(&ev);
        let changed = {
            let mut d = w2.diagram.borrow_mut();
            let was_dragging = d.is_dragging();
            d.pointer_move(pos);
            was_dragging || d.is_dragging()
        };
        if changed {
            w2.redraw();
        }
    });
}

fn wire_pointerdown<D: Diagram + 'static>(w: &PointerWiring<D>) {
    let w2 = w.clone();
    listen(w, "pointerdown", move |ev| {
        let pos = w2.position(&ev);
        let dragging = {
            let mut d = w2.diagram.borrow_mut();
            d.pointer_down(pos);
            d.is_dragging()
        };
        if dragging {
            _ = w2.canvas.set_pointer_capture(ev.pointer_id());
            log::debug!("[pointer] drag start at ({:.1},{:.1})", pos.x, pos.y);
            ev.prevent_default();
        }
        w2.redraw();
    });
}

fn wire_pointer_release<D: Diagram + 'static>(w: &PointerWiring<D>, event: &'static str, leave: bool) {
    let w2 = w.clone();
    listen(w, event, move |_ev| {
        {
            let mut d = w2.diagram.borrow_mut();
            if leave {
                d.pointer_leave();
            } else {
                d.pointer_up();
            }
        }
        w2.redraw();
    });
}
