use crate::constants::{BLOCK_ID_ATTR, OBSERVER_ROOT_MARGIN, OBSERVER_THRESHOLD};
use crate::dom::js_err;
use crate::frame::FrameLoop;
use instant::Instant;
use landing_core::Showcase;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Watch every block with one shared observer.
///
/// Each element is unobserved as soon as its reveal fires, which also wakes
/// the frame loop. The observer disconnects once every block has latched.
/// Elements that never scroll into view simply stay observed.
pub fn observe_blocks(
    showcase: Rc<RefCell<Showcase>>,
    blocks: &[web::Element],
    started: Instant,
    frames: FrameLoop,
) -> anyhow::Result<web::IntersectionObserver> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let now_sec = started.elapsed().as_secs_f64();
            let mut showcase = showcase.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = target.get_attribute(BLOCK_ID_ATTR) else {
                    continue;
                };
                if showcase.on_intersection(&id, now_sec, entry.is_intersecting()) {
                    observer.unobserve(&target);
                    frames.wake();
                }
            }
            if showcase.all_triggered() {
                log::info!("[observer] all blocks revealed, disconnecting");
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
    options.set_root_margin(OBSERVER_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
            .map_err(js_err)?;
    closure.forget();

    for el in blocks {
        observer.observe(el);
    }
    log::info!("[observer] watching {} blocks", blocks.len());
    Ok(observer)
}
