use bevy::prelude::*;
use constants::cube_frame::FACE_COUNT;
use thiserror::Error;

use crate::engine::voxel::dataset::{DatasetId, DatasetTable, ScalarSample};
use crate::engine::voxel::topology::{CornerIndex, CubeTopology, EdgeIndex, FaceIndex};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContourError {
    #[error("{dataset}: corner {corner} holds non-finite value {value}")]
    NonFiniteValue {
        dataset: DatasetId,
        corner: CornerIndex,
        value: f32,
    },
    /// A closed surface crosses every face an even number of times, so an odd
    /// count means the edge to face table disagrees with the corner table.
    #[error("{dataset}: face {face} collected {count} crossings, expected an even count")]
    OddFaceCrossings {
        dataset: DatasetId,
        face: FaceIndex,
        count: usize,
    },
}

/// Where the interpolated scalar field crosses zero on one cube edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionPoint {
    pub edge: EdgeIndex,
    pub position: Vec3,
}

/// Two intersection points joined across one face; `a` and `b` index
/// [`ContourSolution::points`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContourSegment {
    pub face: FaceIndex,
    pub a: usize,
    pub b: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContourSolution {
    pub dataset: DatasetId,
    pub points: Vec<IntersectionPoint>,
    pub segments: Vec<ContourSegment>,
    /// Point indices recorded under each face, in pairing order.
    pub face_crossings: [Vec<usize>; FACE_COUNT],
}

impl ContourSolution {
    pub fn segment_endpoints(&self, segment: &ContourSegment) -> (Vec3, Vec3) {
        (
            self.points[segment.a].position,
            self.points[segment.b].position,
        )
    }

    pub fn crossing_edges(&self) -> Vec<EdgeIndex> {
        self.points.iter().map(|point| point.edge).collect()
    }
}

/// Interpolation parameter of the zero crossing between two corner values.
///
/// Zero counts as non-negative: an edge crosses only when exactly one end is
/// negative, so `su - sv` is never zero here. An edge from 0 to a negative
/// value crosses at the zero corner.
pub fn crossing_parameter(su: f32, sv: f32) -> Option<f32> {
    if (su < 0.0) == (sv < 0.0) {
        return None;
    }
    Some((su / (su - sv)).clamp(0.0, 1.0))
}

/// Build the contour of one sample.
///
/// Crossings on a face are ordered along the face's sort axis and paired
/// first-second, third-fourth. On a face with four crossings this picks one
/// of the two possible connections without looking at the saddle value.
pub fn extract(
    topology: &CubeTopology,
    dataset: DatasetId,
    sample: &ScalarSample,
) -> Result<ContourSolution, ContourError> {
    if let Some((corner, &value)) = sample
        .values
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite())
    {
        return Err(ContourError::NonFiniteValue {
            dataset,
            corner,
            value,
        });
    }

    let mut points = Vec::new();
    let mut face_crossings: [Vec<usize>; FACE_COUNT] = Default::default();

    for (edge, &(u, v)) in topology.edges().iter().enumerate() {
        let Some(t) = crossing_parameter(sample.value(u), sample.value(v)) else {
            continue;
        };
        let position = topology
            .corner_position(u)
            .lerp(topology.corner_position(v), t);

        let index = points.len();
        points.push(IntersectionPoint { edge, position });

        let (face_a, face_b) = topology.faces_of_edge(edge);
        face_crossings[face_a].push(index);
        face_crossings[face_b].push(index);
    }

    let mut segments = Vec::with_capacity(points.len());
    for (face, crossings) in face_crossings.iter_mut().enumerate() {
        if crossings.len() % 2 != 0 {
            return Err(ContourError::OddFaceCrossings {
                dataset,
                face,
                count: crossings.len(),
            });
        }

        let axis = topology.sort_axis_of_face(face);
        crossings.sort_by(|&a, &b| points[a].position[axis].total_cmp(&points[b].position[axis]));
        segments.extend(
            crossings
                .chunks_exact(2)
                .map(|pair| ContourSegment {
                    face,
                    a: pair[0],
                    b: pair[1],
                }),
        );
    }

    Ok(ContourSolution {
        dataset,
        points,
        segments,
        face_crossings,
    })
}

/// Extract every dataset in table order.
pub fn extract_all(
    topology: &CubeTopology,
    table: &DatasetTable,
) -> Vec<Result<ContourSolution, ContourError>> {
    table
        .iter()
        .map(|(id, sample)| extract(topology, id, sample))
        .collect()
}
