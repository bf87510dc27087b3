//! Interactive isosurface extraction on a single voxel.
//!
//! A cube carries one scalar value per corner. The contour module computes
//! where the zero level set crosses the cube edges and how those crossings
//! pair up on each face, while the annotation tool lets a learner mark the
//! crossings and connect them by hand for comparison.

pub mod engine;
pub mod tools;
