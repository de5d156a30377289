use super::camera::{Camera, ProjectionMode};
use super::constants::*;
use glam::Vec3;

/// The six paired numeric controls. Each is a range slider plus a number
/// field that always show the same committed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlId {
    CameraX,
    CameraY,
    Yaw,
    Zoom,
    Fov,
    Depth,
}

impl ControlId {
    pub const ALL: [ControlId; 6] = [
        ControlId::CameraX,
        ControlId::CameraY,
        ControlId::Yaw,
        ControlId::Zoom,
        ControlId::Fov,
        ControlId::Depth,
    ];

    /// Shared prefix of the `-range` and `-number` element ids.
    pub fn dom_prefix(self) -> &'static str {
        match self {
            ControlId::CameraX => "camera-x",
            ControlId::CameraY => "camera-y",
            ControlId::Yaw => "yaw",
            ControlId::Zoom => "zoom",
            ControlId::Fov => "fov",
            ControlId::Depth => "depth",
        }
    }

    pub fn range_id(self) -> String {
        format!("{}-range", self.dom_prefix())
    }

    pub fn number_id(self) -> String {
        format!("{}-number", self.dom_prefix())
    }

    /// `(min, max, step)` of the slider.
    pub fn range(self) -> (f32, f32, f32) {
        match self {
            ControlId::CameraX => CAMERA_X_RANGE,
            ControlId::CameraY => CAMERA_Y_RANGE,
            ControlId::Yaw => YAW_RANGE,
            ControlId::Zoom => ZOOM_RANGE,
            ControlId::Fov => FOV_RANGE,
            ControlId::Depth => DEPTH_RANGE,
        }
    }

    /// Current committed value as shown by both controls.
    pub fn read(self, camera: &Camera) -> f32 {
        match self {
            ControlId::CameraX => camera.position().x,
            ControlId::CameraY => camera.position().y,
            ControlId::Yaw => camera.yaw_degrees(),
            ControlId::Zoom => camera.zoom(),
            ControlId::Fov => camera.fov_degrees(),
            ControlId::Depth => camera.position().z,
        }
    }

    /// Zoom only drives the orthographic box and FOV only the frustum; the
    /// inactive one is disabled in the page.
    pub fn is_editable(self, mode: ProjectionMode) -> bool {
        match self {
            ControlId::Zoom => mode == ProjectionMode::Orthographic,
            ControlId::Fov => mode == ProjectionMode::Perspective,
            _ => true,
        }
    }

    /// Text for the number field, rounded to the slider step.
    pub fn format(self, value: f32) -> String {
        let (_, _, step) = self.range();
        let decimals = (-step.log10()).ceil().max(0.0) as usize;
        format!("{:.*}", decimals, value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlEvent {
    Set(ControlId, f32),
    Nudge(ControlId, f32),
    SetMode(ProjectionMode),
    Reset,
}

/// The single update function for camera input. Values are limited to the
/// control range, then the camera setters apply their own clamps.
pub fn apply(camera: Camera, event: ControlEvent) -> Camera {
    let mut next = camera;
    match event {
        ControlEvent::Set(id, value) => set_control(&mut next, id, value),
        ControlEvent::Nudge(id, delta) => {
            let value = id.read(&camera) + delta;
            set_control(&mut next, id, value);
        }
        ControlEvent::SetMode(mode) => next.set_mode(mode),
        ControlEvent::Reset => next.reset(),
    }
    next
}

fn set_control(camera: &mut Camera, id: ControlId, value: f32) {
    if !value.is_finite() {
        return;
    }
    let (min, max, _) = id.range();
    let v = value.clamp(min, max);
    let p = camera.position();
    match id {
        ControlId::CameraX => camera.set_position(Vec3::new(v, p.y, p.z)),
        ControlId::CameraY => camera.set_position(Vec3::new(p.x, v, p.z)),
        ControlId::Depth => camera.set_position(Vec3::new(p.x, p.y, v)),
        ControlId::Yaw => camera.set_yaw_degrees(v),
        ControlId::Zoom => camera.set_zoom(v),
        ControlId::Fov => camera.set_fov_degrees(v),
    }
}

/// Parse the text of a slider or number field. Empty or non-numeric text
/// yields `None` and leaves the camera unchanged.
pub fn parse_control_value(text: &str) -> Option<f32> {
    text.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Whether a focused `<input type=...>` consumes typed characters itself.
/// Sliders and radios do not, so shortcuts stay live after clicking them.
pub fn input_captures_keys(input_type: &str) -> bool {
    input_type.eq_ignore_ascii_case("number")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    Control(ControlEvent),
    ToggleAxes,
}

pub fn key_action(key: &str, mode: ProjectionMode) -> Option<KeyAction> {
    let control = |e| Some(KeyAction::Control(e));
    match key {
        "o" | "O" => control(ControlEvent::SetMode(ProjectionMode::Orthographic)),
        "p" | "P" => control(ControlEvent::SetMode(ProjectionMode::Perspective)),
        "r" | "R" => control(ControlEvent::Reset),
        "a" | "A" => Some(KeyAction::ToggleAxes),
        "ArrowLeft" => control(ControlEvent::Nudge(ControlId::CameraX, -PAN_STEP)),
        "ArrowRight" => control(ControlEvent::Nudge(ControlId::CameraX, PAN_STEP)),
        "ArrowDown" => control(ControlEvent::Nudge(ControlId::CameraY, -PAN_STEP)),
        "ArrowUp" => control(ControlEvent::Nudge(ControlId::CameraY, PAN_STEP)),
        "+" | "=" => control(zoom_in(mode, 1.0)),
        "-" | "_" => control(zoom_in(mode, -1.0)),
        _ => None,
    }
}

// Zooming in means a larger zoom factor but a narrower field of view.
fn zoom_in(mode: ProjectionMode, sign: f32) -> ControlEvent {
    match mode {
        ProjectionMode::Orthographic => ControlEvent::Nudge(ControlId::Zoom, sign * ZOOM_STEP),
        ProjectionMode::Perspective => ControlEvent::Nudge(ControlId::Fov, -sign * FOV_STEP_DEG),
    }
}
