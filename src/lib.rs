#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gl-orrery starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
        if let Some(document) = dom::window_document() {
            overlay::show_error(&document, "Startup failed", &format!("{:#}", e));
        }
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let viewport = dom::sync_canvas_backing_size(&canvas);

    let context = render::context_for(&canvas)?;
    let gpu = render::GlState::build(context.clone()).map_err(|e| {
        if let Some(driver_log) = e.diagnostic() {
            log::error!("[gl] driver log:\n{}", driver_log);
        }
        e
    })?;
    log::info!(
        "[gl] ready, viewport {}x{}",
        viewport.width,
        viewport.height
    );

    let app = Rc::new(RefCell::new(frame::App::new(context, gpu, viewport)));
    let redraw = frame::Redraw::new(app);

    events::wire_controls(&document, redraw.clone());
    events::wire_global_keydown(redraw.clone());
    events::wire_canvas_resize(&canvas, redraw.clone());
    events::wire_context_loss(&canvas, redraw.clone());

    // Render on change only; this is the first change
    redraw.request();
    Ok(())
}
