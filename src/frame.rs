use crate::constants::orbit_line_css;
use crate::dom;
use crate::render::ShowcaseElements;
use instant::Instant;
use landing_core::Showcase;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub showcase: Rc<RefCell<Showcase>>,
    pub elements: ShowcaseElements,
    pub started: Instant,
}

impl FrameContext {
    /// Paint whatever moved this frame. Returns `false` once there is
    /// nothing left to animate until the next reveal fires.
    pub fn frame(&mut self) -> bool {
        let now_sec = self.started.elapsed().as_secs_f64();
        let mut showcase = self.showcase.borrow_mut();

        for (i, style) in showcase.tick(now_sec) {
            if let Some(el) = self.elements.blocks.get(i) {
                dom::set_style(el, &style.to_css());
            }
        }

        if let Some(styles) = showcase.orbit_styles(now_sec) {
            if let Some((_, layout)) = showcase.orbit() {
                for ((node, style), (node_el, line_el)) in layout.nodes.iter().zip(&styles).zip(
                    self.elements
                        .orbit_nodes
                        .iter()
                        .zip(&self.elements.orbit_lines),
                ) {
                    dom::set_style(node_el, &style.to_css());
                    let line = orbit_line_css(
                        node.position.x,
                        node.position.y,
                        node.line_rotation_deg,
                        node.line_length,
                    );
                    dom::set_style(
                        line_el,
                        &format!("{};opacity:{:.3}", line, style.opacity.clamp(0.0, 1.0)),
                    );
                }
            }
        }

        !showcase.is_idle()
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop that only runs while something is animating.
///
/// It starts parked; [`FrameLoop::wake`] schedules frames until the
/// showcase goes idle, then it parks again until the next wake.
#[derive(Clone)]
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    tick: TickClosure,
}

impl FrameLoop {
    pub fn new(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let running = Rc::new(Cell::new(false));
        let tick: TickClosure = Rc::new(RefCell::new(None));
        let running_tick = running.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !frame_ctx.borrow_mut().frame() {
                log::debug!("[frame] idle, parking loop");
                running_tick.set(false);
                return;
            }
            request_frame(&tick_clone);
        }) as Box<dyn FnMut()>));
        Self { running, tick }
    }

    /// Schedule frames unless the loop is already running.
    pub fn wake(&self) {
        if self.running.replace(true) {
            return;
        }
        log::debug!("[frame] waking loop");
        request_frame(&self.tick);
    }
}

fn request_frame(tick: &TickClosure) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
