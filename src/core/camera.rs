use super::constants::*;
use super::matrix;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectionMode {
    Orthographic,
    Perspective,
}

impl ProjectionMode {
    pub fn label(self) -> &'static str {
        match self {
            ProjectionMode::Orthographic => "orthographic",
            ProjectionMode::Perspective => "perspective",
        }
    }
}

/// Backing-store size of the canvas in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// CSS pixel size scaled by the device pixel ratio, truncated like the
    /// canvas `width`/`height` attributes.
    pub fn from_css(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        let px = |css: f64| {
            if css.is_finite() && css > 0.0 {
                (css * dpr) as u32
            } else {
                0
            }
        };
        Self::new(px(css_width), px(css_height))
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Media query that stops matching once the device pixel ratio moves away
/// from `device_pixel_ratio`.
pub fn resolution_media_query(device_pixel_ratio: f64) -> String {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    format!("(resolution: {}dppx)", dpr)
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Camera placement and projection parameters.
///
/// Fields are private so every write goes through a clamping setter; a camera
/// value can always produce a non-degenerate projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    position: Vec3,
    yaw_degrees: f32,
    zoom: f32,
    fov_degrees: f32,
    near: f32,
    far: f32,
    mode: ProjectionMode,
}

impl Default for Camera {
    fn default() -> Self {
        let mut camera = Self {
            position: Vec3::from_array(DEFAULT_CAMERA_POSITION),
            yaw_degrees: DEFAULT_YAW_DEG,
            zoom: DEFAULT_ZOOM,
            fov_degrees: DEFAULT_FOV_DEG,
            near: MIN_NEAR,
            far: MIN_NEAR + MIN_DEPTH_SPAN,
            mode: ProjectionMode::Orthographic,
        };
        camera.set_clip_planes(DEFAULT_NEAR, DEFAULT_FAR);
        camera
    }
}

impl Camera {
    pub fn position(&self) -> Vec3 {
        self.position
    }
    pub fn yaw_degrees(&self) -> f32 {
        self.yaw_degrees
    }
    pub fn zoom(&self) -> f32 {
        self.zoom
    }
    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }
    pub fn near(&self) -> f32 {
        self.near
    }
    pub fn far(&self) -> f32 {
        self.far
    }
    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    pub fn set_position(&mut self, position: Vec3) {
        if position.is_finite() {
            self.position = position;
        }
    }

    /// Yaw inside [-180, 180] is stored as given; anything else wraps into
    /// (-180, 180].
    pub fn set_yaw_degrees(&mut self, yaw: f32) {
        if !yaw.is_finite() {
            return;
        }
        if (-180.0..=180.0).contains(&yaw) {
            self.yaw_degrees = yaw;
            return;
        }
        let mut wrapped = yaw.rem_euclid(360.0);
        if wrapped > 180.0 {
            wrapped -= 360.0;
        }
        self.yaw_degrees = wrapped;
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = if zoom.is_finite() {
            zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            MIN_ZOOM
        };
    }

    pub fn set_fov_degrees(&mut self, fov: f32) {
        if fov.is_finite() {
            self.fov_degrees = fov.clamp(MIN_FOV_DEG, MAX_FOV_DEG);
        }
    }

    /// Near is kept positive and far strictly beyond it.
    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        if !near.is_finite() || !far.is_finite() {
            return;
        }
        self.near = near.max(MIN_NEAR);
        self.far = far.max(self.near + MIN_DEPTH_SPAN);
    }

    /// Switching modes only changes which projection is active.
    pub fn set_mode(&mut self, mode: ProjectionMode) {
        self.mode = mode;
    }

    /// Back to defaults, keeping the active mode.
    pub fn reset(&mut self) {
        let mode = self.mode;
        *self = Self::default();
        self.mode = mode;
    }

    /// Half extents of the orthographic box for the given aspect ratio.
    pub fn ortho_half_extents(&self, aspect: f32) -> (f32, f32) {
        let half_height = ORTHO_HALF_HEIGHT / self.zoom.max(MIN_ZOOM);
        (half_height * aspect, half_height)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        match self.mode {
            ProjectionMode::Orthographic => {
                let (hw, hh) = self.ortho_half_extents(aspect);
                matrix::orthographic(-hw, hw, -hh, hh, ORTHO_NEAR, ORTHO_FAR)
            }
            // Setters keep fov and planes valid, so the fallback never triggers
            ProjectionMode::Perspective => {
                matrix::try_perspective(self.fov_degrees, aspect, self.near, self.far)
                    .unwrap_or(Mat4::IDENTITY)
            }
        }
    }

    pub fn view(&self) -> Mat4 {
        matrix::look_at_simple(self.position, self.yaw_degrees.to_radians())
    }

    /// `projection * view`. Recomputed on every call; callers pass the current
    /// viewport aspect.
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        matrix::multiply(self.projection(aspect), self.view())
    }
}
