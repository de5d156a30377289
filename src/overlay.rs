use crate::core::{Camera, ProjectionMode};
use web_sys as web;

/// Show a fatal startup diagnostic to the operator.
pub fn show_error(document: &web::Document, title: &str, detail: &str) {
    if let Some(el) = document.get_element_by_id("error-overlay") {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
        // set_text_content keeps driver logs from being parsed as markup
        el.set_text_content(Some(&format!("{}\n\n{}", title, detail)));
    }
}

#[inline]
pub fn hide_error(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("error-overlay") {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

/// Update the camera readout with the state the last pass was drawn with.
pub fn update_hud(document: &web::Document, camera: &Camera) {
    if let Some(el) = document.get_element_by_id("hud") {
        let p = camera.position();
        let projection = match camera.mode() {
            ProjectionMode::Orthographic => format!("zoom {:.2}", camera.zoom()),
            ProjectionMode::Perspective => format!(
                "fov {:.0}° • clip {:.2}..{:.0}",
                camera.fov_degrees(),
                camera.near(),
                camera.far()
            ),
        };
        let text = format!(
            "{} • pos ({:.2}, {:.2}, {:.2}) • yaw {:.0}° • {}",
            camera.mode().label(),
            p.x,
            p.y,
            p.z,
            camera.yaw_degrees(),
            projection
        );
        el.set_text_content(Some(&text));
    }
}

/// Status line for lifecycle events such as context loss.
pub fn set_status(document: &web::Document, status: Option<&str>) {
    if let Some(el) = document.get_element_by_id("status") {
        match status {
            Some(text) => {
                el.set_text_content(Some(text));
                _ = el.set_attribute("style", "");
            }
            None => {
                el.set_text_content(None);
                _ = el.set_attribute("style", "display:none");
            }
        }
    }
}
