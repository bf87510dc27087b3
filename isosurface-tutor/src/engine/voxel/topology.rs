use std::sync::OnceLock;

use bevy::prelude::*;
use constants::cube_frame::{CORNER_COUNT, EDGE_COUNT, FACE_COUNT, corner_coordinates};
use thiserror::Error;

pub type CornerIndex = usize;
pub type EdgeIndex = usize;
pub type FaceIndex = usize;

/// Edges as corner pairs, grouped front (z = -0.5), side, back (z = +0.5).
const STANDARD_EDGES: [(CornerIndex, CornerIndex); EDGE_COUNT] = [
    (0, 1),
    (0, 2),
    (1, 3),
    (2, 3),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
    (4, 5),
    (4, 6),
    (5, 7),
    (6, 7),
];

/// The two faces bordering each edge.
/// Faces: 0 = z min, 1 = x min, 2 = y min, 3 = y max, 4 = x max, 5 = z max.
const STANDARD_EDGE_FACES: [(FaceIndex, FaceIndex); EDGE_COUNT] = [
    (0, 2),
    (0, 1),
    (0, 4),
    (0, 3),
    (1, 2),
    (2, 4),
    (1, 3),
    (3, 4),
    (2, 5),
    (1, 5),
    (4, 5),
    (3, 5),
];

/// Axis used to order the crossings of each face before pairing them.
const STANDARD_FACE_SORT_AXES: [usize; FACE_COUNT] = [0, 2, 0, 0, 2, 0];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("edge {edge} references corner {corner}, the cube has 8 corners")]
    CornerOutOfRange { edge: EdgeIndex, corner: CornerIndex },
    #[error("edge {edge} joins corner {corner} to itself")]
    DegenerateEdge { edge: EdgeIndex, corner: CornerIndex },
    #[error("edge {edge} references face {face}, the cube has 6 faces")]
    FaceOutOfRange { edge: EdgeIndex, face: FaceIndex },
    #[error("edge {edge} lists face {face} twice")]
    RepeatedFace { edge: EdgeIndex, face: FaceIndex },
    #[error("face {face} borders {count} edges, expected 4")]
    FaceEdgeCount { face: FaceIndex, count: usize },
    #[error("face {face} sorts along axis {axis}, expected 0, 1 or 2")]
    SortAxisOutOfRange { face: FaceIndex, axis: usize },
}

/// Lookup tables of the unit voxel centred at the origin.
///
/// Every edge borders exactly two faces and every face owns exactly four
/// edges. [`CubeTopology::new`] enforces the counts; it does not check that
/// a face's edges actually form a closed loop, which is what the contour
/// extractor's parity check catches.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeTopology {
    corners: [Vec3; CORNER_COUNT],
    edges: [(CornerIndex, CornerIndex); EDGE_COUNT],
    edge_faces: [(FaceIndex, FaceIndex); EDGE_COUNT],
    face_sort_axes: [usize; FACE_COUNT],
    face_edges: [[EdgeIndex; 4]; FACE_COUNT],
}

impl CubeTopology {
    /// Build a topology from custom tables, validating their shape.
    pub fn new(
        edges: [(CornerIndex, CornerIndex); EDGE_COUNT],
        edge_faces: [(FaceIndex, FaceIndex); EDGE_COUNT],
        face_sort_axes: [usize; FACE_COUNT],
    ) -> Result<Self, TopologyError> {
        for (edge, &(u, v)) in edges.iter().enumerate() {
            for corner in [u, v] {
                if corner >= CORNER_COUNT {
                    return Err(TopologyError::CornerOutOfRange { edge, corner });
                }
            }
            if u == v {
                return Err(TopologyError::DegenerateEdge { edge, corner: u });
            }
        }

        let mut counts = [0usize; FACE_COUNT];
        for (edge, &(a, b)) in edge_faces.iter().enumerate() {
            for face in [a, b] {
                if face >= FACE_COUNT {
                    return Err(TopologyError::FaceOutOfRange { edge, face });
                }
            }
            if a == b {
                return Err(TopologyError::RepeatedFace { edge, face: a });
            }
            counts[a] += 1;
            counts[b] += 1;
        }
        if let Some((face, &count)) = counts.iter().enumerate().find(|(_, c)| **c != 4) {
            return Err(TopologyError::FaceEdgeCount { face, count });
        }

        if let Some((face, &axis)) = face_sort_axes.iter().enumerate().find(|(_, a)| **a > 2) {
            return Err(TopologyError::SortAxisOutOfRange { face, axis });
        }

        Ok(Self::build(edges, edge_faces, face_sort_axes))
    }

    /// The tables every part of the application shares.
    pub fn standard() -> &'static CubeTopology {
        static STANDARD: OnceLock<CubeTopology> = OnceLock::new();
        STANDARD.get_or_init(|| {
            Self::build(STANDARD_EDGES, STANDARD_EDGE_FACES, STANDARD_FACE_SORT_AXES)
        })
    }

    // Callers guarantee four edges per face.
    fn build(
        edges: [(CornerIndex, CornerIndex); EDGE_COUNT],
        edge_faces: [(FaceIndex, FaceIndex); EDGE_COUNT],
        face_sort_axes: [usize; FACE_COUNT],
    ) -> Self {
        let corners = std::array::from_fn(|i| Vec3::from_array(corner_coordinates(i)));

        let mut face_edges = [[0; 4]; FACE_COUNT];
        let mut filled = [0usize; FACE_COUNT];
        for (edge, &(a, b)) in edge_faces.iter().enumerate() {
            for face in [a, b] {
                face_edges[face][filled[face]] = edge;
                filled[face] += 1;
            }
        }

        Self {
            corners,
            edges,
            edge_faces,
            face_sort_axes,
            face_edges,
        }
    }

    pub fn edges(&self) -> &[(CornerIndex, CornerIndex); EDGE_COUNT] {
        &self.edges
    }

    pub fn faces_of_edge(&self, edge: EdgeIndex) -> (FaceIndex, FaceIndex) {
        self.edge_faces[edge]
    }

    pub fn edges_of_face(&self, face: FaceIndex) -> [EdgeIndex; 4] {
        self.face_edges[face]
    }

    pub fn sort_axis_of_face(&self, face: FaceIndex) -> usize {
        self.face_sort_axes[face]
    }

    pub fn corner_position(&self, corner: CornerIndex) -> Vec3 {
        self.corners[corner]
    }

    /// Object-space end points of an edge, in table order.
    pub fn edge_endpoints(&self, edge: EdgeIndex) -> (Vec3, Vec3) {
        let (u, v) = self.edges[edge];
        (self.corners[u], self.corners[v])
    }
}
