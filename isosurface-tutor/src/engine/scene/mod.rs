//! Everything drawn in the viewport.
//!
//! The scene is a view of the controller and the solution library: systems
//! here read those resources and rebuild entities when they change, they
//! never mutate them.

/// Live annotation points, lines and the hover and drag previews.
pub mod annotations;

/// On-screen help text and the corner value labels.
pub mod hud;

/// Shared meshes, materials and the segment transform helper.
pub mod materials;

/// Contour solution markers and the reference mesh overlay.
pub mod solutions;

/// The wireframe cube and its edge hover highlight.
pub mod voxel;
