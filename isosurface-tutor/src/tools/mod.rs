//! Learner-facing interaction on top of the voxel scene.
//!
//! ## Annotation Tool
//!
//! Points are placed on cube edges and joined into lines with the pointer.
//! The control modifier decides what a press does: control alone connects,
//! control with shift deletes. Every dataset keeps its own annotation set,
//! swapped in and out as the selection changes.
//!
//! ## Dataset Selection
//!
//! ```text
//! Keyboard (1-9) / settings file
//!   └─> DatasetSelected
//!       └─> apply_dataset_selection()
//!           ├─> Cancel any drag, swap annotation sets
//!           └─> Solution and reference overlays follow the live dataset
//! ```
//!
//! `V` toggles the computed contour and `H` the reference mesh, both through
//! `SolutionToggle`.

/// Edge points, connecting lines and the pointer state machine.
pub mod annotation;

/// Dataset switching and overlay toggles.
pub mod dataset_selection;
