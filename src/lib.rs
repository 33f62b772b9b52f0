#![cfg(target_arch = "wasm32")]
use instant::Instant;
use landing_core::{OrbitSpec, Showcase, StaggerConfig, SHOWCASE_CARDS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod frame;
mod observer;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let grid = document
        .get_element_by_id(constants::GRID_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::GRID_ELEMENT_ID))?;

    let showcase = Showcase::new(
        SHOWCASE_CARDS,
        &StaggerConfig::default(),
        &OrbitSpec::default(),
    )?;
    let elements = render::render_showcase(&document, &grid, &showcase)?;
    let blocks = elements.blocks.clone();

    let showcase = Rc::new(RefCell::new(showcase));
    let started = Instant::now();
    // Parked until the first reveal fires.
    let frames = frame::FrameLoop::new(Rc::new(RefCell::new(frame::FrameContext {
        showcase: showcase.clone(),
        elements,
        started,
    })));
    observer::observe_blocks(showcase, &blocks, started, frames)?;
    Ok(())
}
