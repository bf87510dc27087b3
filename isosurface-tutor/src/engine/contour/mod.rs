//! Zero-contour extraction for the single voxel.
//!
//! Extraction is pure and runs once per dataset at startup. The resulting
//! solutions live in the [`library::SolutionLibrary`] resource together with
//! the optional high resolution reference meshes.

/// Edge crossings, per-face pairing and the contour error taxonomy.
pub mod extraction;

/// Per-dataset solutions, reference mesh slots and their visibility flags.
pub mod library;
