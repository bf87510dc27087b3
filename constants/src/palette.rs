use bevy::color::Color;

// Voxel
pub const EDGE: Color = Color::srgb(0.667, 0.667, 0.667);
pub const EDGE_HOVER: Color = Color::srgb(0.467, 0.467, 0.467);
pub const CORNER: Color = Color::srgb(0.667, 0.667, 0.667);
pub const CORNER_LABEL: Color = Color::srgb(0.467, 0.267, 0.267);

// User points
pub const USER_POINT: Color = Color::srgb(0.667, 0.667, 0.867);
pub const USER_POINT_HOVER: Color = Color::srgb(0.314, 0.314, 0.725);
pub const USER_POINT_DELETE: Color = Color::srgb(0.725, 0.314, 0.314);
pub const USER_POINT_CONNECT: Color = Color::srgb(0.314, 0.725, 0.314);

/// Preview marker shown on a hovered edge, ready to be placed.
pub const POINT_PREVIEW: Color = Color::srgba(0.667, 0.667, 0.667, 0.75);

// User lines
pub const USER_LINE: Color = Color::srgb(0.667, 0.667, 0.867);
pub const USER_LINE_HOVER: Color = Color::srgb(0.314, 0.314, 0.725);
pub const USER_LINE_DELETE: Color = Color::srgb(0.725, 0.314, 0.314);
pub const LINE_PREVIEW: Color = Color::srgba(0.314, 0.725, 0.314, 0.6);

// Solutions
pub const SOLUTION: Color = Color::srgb(0.78, 0.396, 0.008);
pub const REFERENCE_MESH: Color = Color::srgba(0.78, 0.396, 0.008, 0.5);

pub const BACKGROUND: Color = Color::srgb(0.941, 0.941, 0.941);
