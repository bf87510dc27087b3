pub mod camera;
pub mod contour;
pub mod core;
pub mod loading;
pub mod scene;
pub mod voxel;
