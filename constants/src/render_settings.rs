use std::f32::consts::PI;

/// Radius of the cylinders drawn for cube edges, also their pick radius.
pub const EDGE_CYLINDER_RADIUS: f32 = 0.02;

/// Radius of corner spheres, user points, previews and solution markers.
pub const MARKER_SPHERE_RADIUS: f32 = 0.04;

/// Visual thickness of user, preview and solution lines.
pub const DRAW_LINE_WIDTH: f32 = 0.024;

/// Pick radius around user lines.
pub const LINE_PICK_RADIUS: f32 = 0.025;

/// Lines shorter than this are not drawn.
pub const MIN_DRAWN_LINE_LENGTH: f32 = 1e-4;

/// Corner labels sit this factor further out than the corners.
pub const CORNER_LABEL_SPREAD: f32 = 1.1;

// Orbit camera
pub const CAMERA_START_POSITION: [f32; 3] = [2.0, 1.0, 2.5];
pub const CAMERA_MIN_DISTANCE: f32 = 2.0;
pub const CAMERA_MAX_DISTANCE: f32 = 5.0;
/// Polar angle is kept within [margin, PI - margin] from the +Y axis.
pub const CAMERA_POLAR_MARGIN: f32 = PI / 8.0;
pub const CAMERA_ORBIT_SENSITIVITY: f32 = 0.008;
pub const CAMERA_ZOOM_SENSITIVITY: f32 = 0.25;

// Lighting
pub const AMBIENT_BRIGHTNESS: f32 = 400.0;
pub const DIRECTIONAL_ILLUMINANCE: f32 = 4_000.0;
