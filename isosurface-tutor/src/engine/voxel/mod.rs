//! Static description of the single voxel and the scalar samples it carries.
//!
//! Both modules are pure data: the topology tables never change and the
//! dataset table is fixed for the lifetime of the process.

/// Corner, edge and face tables of the unit cube.
pub mod topology;

/// Built-in teaching examples, one eight-value scalar sample each.
pub mod dataset;
