/// Half edge length of the voxel. The cube spans [-0.5, 0.5] on every axis.
pub const CUBE_HALF_EXTENT: f32 = 0.5;

/// Number of scalar samples carried by the voxel, one per corner.
pub const CORNER_COUNT: usize = 8;

/// Number of cube edges.
pub const EDGE_COUNT: usize = 12;

/// Number of cube faces.
pub const FACE_COUNT: usize = 6;

/// Object-space position of a corner.
/// Corner index bits are (x, y, z) with x fastest: index = x + 2y + 4z.
pub const fn corner_coordinates(index: usize) -> [f32; 3] {
    [
        axis_coordinate(index & 1),
        axis_coordinate(index & 2),
        axis_coordinate(index & 4),
    ]
}

const fn axis_coordinate(bit: usize) -> f32 {
    if bit == 0 {
        -CUBE_HALF_EXTENT
    } else {
        CUBE_HALF_EXTENT
    }
}
