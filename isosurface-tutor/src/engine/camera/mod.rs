//! Orbit camera around the voxel.
//!
//! Emits [`orbit_camera::CameraInteraction`] events so the annotation tool
//! can ignore the pointer while the view is being dragged.

/// Orbit camera resource and controller system.
pub mod orbit_camera;
