// Camera, control and scene tuning constants shared by the core and the web frontend.

// Camera defaults
pub const DEFAULT_CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 2.0];
pub const DEFAULT_YAW_DEG: f32 = 0.0;
pub const DEFAULT_ZOOM: f32 = 1.0;
pub const DEFAULT_FOV_DEG: f32 = 60.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 100.0;

// Camera clamps (keep projections non-degenerate)
pub const MIN_ZOOM: f32 = 0.05;
pub const MAX_ZOOM: f32 = 20.0;
pub const MIN_FOV_DEG: f32 = 1.0;
pub const MAX_FOV_DEG: f32 = 179.0;
pub const MIN_NEAR: f32 = 1e-3;
pub const MIN_DEPTH_SPAN: f32 = 1e-2; // minimum far - near

// Orthographic box: half height at zoom 1, and a depth range wide enough that
// camera depth never clips the flat scene.
pub const ORTHO_HALF_HEIGHT: f32 = 1.0;
pub const ORTHO_NEAR: f32 = -100.0;
pub const ORTHO_FAR: f32 = 100.0;

// Control ranges: (min, max, step) for the slider of each paired control
pub const CAMERA_X_RANGE: (f32, f32, f32) = (-2.0, 2.0, 0.01);
pub const CAMERA_Y_RANGE: (f32, f32, f32) = (-2.0, 2.0, 0.01);
pub const YAW_RANGE: (f32, f32, f32) = (-180.0, 180.0, 1.0);
pub const ZOOM_RANGE: (f32, f32, f32) = (MIN_ZOOM, 5.0, 0.05);
pub const FOV_RANGE: (f32, f32, f32) = (MIN_FOV_DEG, MAX_FOV_DEG, 1.0);
pub const DEPTH_RANGE: (f32, f32, f32) = (0.2, 10.0, 0.05);

// Keyboard steps
pub const PAN_STEP: f32 = 0.05;
pub const ZOOM_STEP: f32 = 0.1;
pub const FOV_STEP_DEG: f32 = 2.0;

// Tessellation
pub const DISC_SEGMENTS: u32 = 96;
pub const ORBIT_SEGMENTS: u32 = 96;

// Scene layout (world units; the scene lies in the XY plane)
pub const SUN_RADIUS: f32 = 0.12;
pub const ORBIT_RADII: [f32; 4] = [0.3, 0.5, 0.7, 0.9];
pub const PLANET_RADII: [f32; 4] = [0.03, 0.045, 0.04, 0.06];
pub const BACKGROUND_POINT_COUNT: usize = 500;
pub const BACKGROUND_EXTENT: f32 = 1.5; // points fall in [-extent, extent]^2
pub const POINT_SIZE_PX: f32 = 2.0;
pub const AXIS_LENGTH: f32 = 1.2;

// Per-layer depth; larger is nearer to a camera looking down -Z
pub const BACKGROUND_Z: f32 = -0.3;
pub const ORBIT_Z: f32 = -0.1;
pub const AXIS_Z: f32 = -0.05;
pub const PLANET_Z: f32 = 0.0;
pub const SUN_Z: f32 = 0.05;

// Palette (linear RGBA tints; discs also carry a baked center-to-edge gradient)
pub const CLEAR_COLOR: [f32; 4] = [0.02, 0.02, 0.06, 1.0];
pub const SUN_CENTER_COLOR: [f32; 3] = [1.0, 0.95, 0.6];
pub const SUN_EDGE_COLOR: [f32; 3] = [1.0, 0.45, 0.05];
pub const PLANET_CENTER_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const PLANET_EDGE_COLOR: [f32; 3] = [0.45, 0.45, 0.45];
pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const ORBIT_COLOR: [f32; 4] = [0.35, 0.4, 0.55, 1.0];
pub const AXIS_COLOR: [f32; 4] = [0.6, 0.2, 0.2, 1.0];
pub const BACKGROUND_POINT_COLOR: [f32; 4] = [0.85, 0.85, 0.95, 1.0];
pub const PLANET_COLORS: [[f32; 4]; 4] = [
    [0.7, 0.6, 0.5, 1.0], // rocky
    [0.9, 0.75, 0.4, 1.0], // sandy
    [0.3, 0.55, 0.95, 1.0], // ocean
    [0.85, 0.4, 0.3, 1.0], // rust
];
