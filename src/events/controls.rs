use crate::core::controls::{self, parse_control_value, ControlEvent, ControlId};
use crate::core::{Camera, ProjectionMode};
use crate::dom;
use crate::frame::Redraw;
use web_sys as web;

const MODE_INPUTS: [(&str, ProjectionMode); 2] = [
    ("mode-orthographic", ProjectionMode::Orthographic),
    ("mode-perspective", ProjectionMode::Perspective),
];

/// Apply a control event to the camera, mirror the committed values back
/// into the page and schedule a redraw.
///
/// `source` is the element the user is typing into; it is left alone so a
/// half-typed number is not reformatted under the cursor.
pub fn dispatch(redraw: &Redraw, event: ControlEvent, source: Option<&str>) {
    let camera = {
        let mut app = redraw.app().borrow_mut();
        app.camera = controls::apply(app.camera, event);
        app.camera
    };
    if let Some(document) = dom::window_document() {
        sync_controls(&document, &camera, source);
    }
    redraw.request();
}

/// Write the camera state into every control pair and enable only the
/// parameters of the active projection.
pub fn sync_controls(document: &web::Document, camera: &Camera, skip: Option<&str>) {
    let mode = camera.mode();
    for id in ControlId::ALL {
        let text = id.format(id.read(camera));
        let editable = id.is_editable(mode);
        for element_id in [id.range_id(), id.number_id()] {
            if let Some(input) = dom::input_by_id(document, &element_id) {
                if skip != Some(element_id.as_str()) {
                    input.set_value(&text);
                }
                input.set_disabled(!editable);
            }
        }
    }
    for (element_id, m) in MODE_INPUTS {
        if let Some(input) = dom::input_by_id(document, element_id) {
            input.set_checked(m == mode);
        }
    }
}

fn configure_range(input: &web::HtmlInputElement, id: ControlId) {
    let (min, max, step) = id.range();
    input.set_min(&min.to_string());
    input.set_max(&max.to_string());
    input.set_step(&step.to_string());
}

pub fn wire_controls(document: &web::Document, redraw: Redraw) {
    for id in ControlId::ALL {
        for element_id in [id.range_id(), id.number_id()] {
            let Some(input) = dom::input_by_id(document, &element_id) else {
                log::warn!("[ui] missing control #{}", element_id);
                continue;
            };
            configure_range(&input, id);

            let r = redraw.clone();
            let source = input.clone();
            let live_id = element_id.clone();
            dom::add_listener(&input, "input", move |_: web::Event| {
                if let Some(value) = parse_control_value(&source.value()) {
                    dispatch(&r, ControlEvent::Set(id, value), Some(&live_id));
                }
            });

            // On commit, show the clamped value in the field that was edited too
            let r = redraw.clone();
            dom::add_listener(&input, "change", move |_: web::Event| {
                let camera = r.app().borrow().camera;
                if let Some(document) = dom::window_document() {
                    sync_controls(&document, &camera, None);
                }
            });
        }
    }

    for (element_id, mode) in MODE_INPUTS {
        let Some(input) = dom::input_by_id(document, element_id) else {
            log::warn!("[ui] missing mode input #{}", element_id);
            continue;
        };
        let r = redraw.clone();
        let source = input.clone();
        dom::add_listener(&input, "change", move |_: web::Event| {
            if source.checked() {
                log::info!("[camera] mode -> {}", mode.label());
                dispatch(&r, ControlEvent::SetMode(mode), None);
            }
        });
    }

    let r = redraw.clone();
    dom::add_click_listener(document, "reset-camera", move || {
        log::info!("[camera] reset");
        dispatch(&r, ControlEvent::Reset, None);
    });

    let camera = redraw.app().borrow().camera;
    sync_controls(document, &camera, None);
}
