use crate::core::camera::resolution_media_query;
use crate::dom;
use crate::frame::Redraw;
use crate::overlay;
use crate::render::GlState;
use web_sys as web;

// Keep the canvas backing store matched to CSS size * devicePixelRatio; the
// projection picks up the new aspect on the next pass.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, redraw: Redraw) {
    let Some(window) = web::window() else {
        return;
    };
    watch_pixel_ratio(canvas.clone(), redraw.clone());
    let canvas = canvas.clone();
    dom::add_listener(&window, "resize", move |_: web::Event| {
        let viewport = dom::sync_canvas_backing_size(&canvas);
        redraw.update(|app| app.viewport = viewport);
    });
}

// A pixel ratio change (zoom, moving to another monitor) need not fire
// `resize`. The query only matches the current ratio, so re-arm after each
// change.
fn watch_pixel_ratio(canvas: web::HtmlCanvasElement, redraw: Redraw) {
    let Some(window) = web::window() else {
        return;
    };
    let query = resolution_media_query(window.device_pixel_ratio());
    let list = match window.match_media(&query) {
        Ok(Some(list)) => list,
        Ok(None) => return,
        Err(e) => {
            log::warn!("[lifecycle] matchMedia({}) failed: {:?}", query, e);
            return;
        }
    };
    dom::add_listener_once(&list, "change", move |_: web::Event| {
        let viewport = dom::sync_canvas_backing_size(&canvas);
        log::info!(
            "[lifecycle] pixel ratio changed, viewport {}x{}",
            viewport.width,
            viewport.height
        );
        redraw.update(|app| app.viewport = viewport);
        watch_pixel_ratio(canvas.clone(), redraw.clone());
    });
}

/// GPU objects do not survive a lost context. Drop them on loss and rebuild
/// the program and every mesh on restore before drawing again.
pub fn wire_context_loss(canvas: &web::HtmlCanvasElement, redraw: Redraw) {
    let r = redraw.clone();
    dom::add_listener(canvas, "webglcontextlost", move |ev: web::Event| {
        // Without preventDefault the browser never restores the context
        ev.prevent_default();
        r.cancel();
        r.app().borrow_mut().gpu = None;
        log::warn!("[lifecycle] WebGL context lost");
        if let Some(document) = dom::window_document() {
            overlay::set_status(
                &document,
                Some("Graphics context lost, waiting for restore…"),
            );
        }
    });

    dom::add_listener(canvas, "webglcontextrestored", move |_: web::Event| {
        let context = redraw.app().borrow().context.clone();
        let document = dom::window_document();
        match GlState::build(context) {
            Ok(gpu) => {
                log::info!("[lifecycle] WebGL context restored, resources rebuilt");
                if let Some(document) = &document {
                    overlay::set_status(document, None);
                    overlay::hide_error(document);
                }
                redraw.update(|app| app.gpu = Some(gpu));
            }
            Err(e) => {
                log::error!("[lifecycle] rebuild after restore failed: {}", e);
                if let Some(document) = &document {
                    overlay::show_error(
                        document,
                        "Could not rebuild graphics resources",
                        &e.to_string(),
                    );
                }
            }
        }
    });
}
