use bevy::prelude::*;
use constants::cube_frame::EDGE_COUNT;

use super::store::{AnnotationLine, AnnotationPoint, AnnotationSet, LineId, PointId};
use crate::engine::voxel::topology::{CubeTopology, EdgeIndex};

/// Anything a pointer ray can hit, carrying its own geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pickable {
    Edge {
        index: EdgeIndex,
        start: Vec3,
        end: Vec3,
    },
    Point(AnnotationPoint),
    Line(AnnotationLine),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Edge(EdgeIndex),
    Point(PointId),
    Line(LineId),
    None,
}

/// The twelve cube edges plus the live annotation geometry.
#[derive(Debug, Clone)]
pub struct PickableRegistry {
    edges: [Pickable; EDGE_COUNT],
    points: Vec<AnnotationPoint>,
    lines: Vec<AnnotationLine>,
}

impl PickableRegistry {
    pub fn new(topology: &CubeTopology) -> Self {
        let edges = std::array::from_fn(|index| {
            let (start, end) = topology.edge_endpoints(index);
            Pickable::Edge { index, start, end }
        });
        Self {
            edges,
            points: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Replace the tracked points and lines with those of `set`.
    pub fn sync(&mut self, set: &AnnotationSet) {
        self.points = set.points().to_vec();
        self.lines = set.lines().to_vec();
    }

    pub fn track_point(&mut self, point: AnnotationPoint) {
        self.points.push(point);
    }

    pub fn forget_point(&mut self, id: PointId) {
        self.points.retain(|point| point.id != id);
    }

    pub fn track_line(&mut self, line: AnnotationLine) {
        self.lines.push(line);
    }

    pub fn forget_line(&mut self, id: LineId) {
        self.lines.retain(|line| line.id != id);
    }

    pub fn candidates(&self) -> Vec<Pickable> {
        self.edges
            .iter()
            .copied()
            .chain(self.points.iter().copied().map(Pickable::Point))
            .chain(self.lines.iter().copied().map(Pickable::Line))
            .collect()
    }

    /// Kind of a hit object; objects no longer tracked classify as `None`.
    pub fn classify(&self, object: &Pickable) -> HitKind {
        match object {
            Pickable::Edge { index, .. } if *index < EDGE_COUNT => HitKind::Edge(*index),
            Pickable::Edge { .. } => HitKind::None,
            Pickable::Point(point) if self.points.iter().any(|p| p.id == point.id) => {
                HitKind::Point(point.id)
            }
            Pickable::Line(line) if self.lines.iter().any(|l| l.id == line.id) => {
                HitKind::Line(line.id)
            }
            _ => HitKind::None,
        }
    }

    pub fn edge(&self, index: EdgeIndex) -> Option<(Vec3, Vec3)> {
        match self.edges.get(index)? {
            Pickable::Edge { start, end, .. } => Some((*start, *end)),
            _ => None,
        }
    }

    pub fn point(&self, id: PointId) -> Option<&AnnotationPoint> {
        self.points.iter().find(|point| point.id == id)
    }
}
