use std::collections::HashMap;

use bevy::prelude::*;

use crate::engine::voxel::dataset::DatasetId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u64);

/// A user-placed point on the cube surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotationPoint {
    pub id: PointId,
    pub position: Vec3,
}

/// A user-drawn line. The endpoints are copied from the two points at
/// creation time, so removing either point leaves the line in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotationLine {
    pub id: LineId,
    pub start: Vec3,
    pub end: Vec3,
}

/// Points and lines of one dataset, in creation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationSet {
    points: Vec<AnnotationPoint>,
    lines: Vec<AnnotationLine>,
}

impl AnnotationSet {
    pub fn points(&self) -> &[AnnotationPoint] {
        &self.points
    }

    pub fn lines(&self) -> &[AnnotationLine] {
        &self.lines
    }

    pub fn point(&self, id: PointId) -> Option<&AnnotationPoint> {
        self.points.iter().find(|point| point.id == id)
    }

    pub fn line(&self, id: LineId) -> Option<&AnnotationLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty()
    }
}

static EMPTY_SET: AnnotationSet = AnnotationSet {
    points: Vec::new(),
    lines: Vec::new(),
};

/// Per-dataset annotation storage with exactly one live entry.
///
/// Only the live set is mutated. Ids come from counters shared by all
/// datasets, so an id never repeats within a session.
#[derive(Debug, Clone)]
pub struct AnnotationStore {
    live_id: DatasetId,
    live: AnnotationSet,
    dormant: HashMap<DatasetId, AnnotationSet>,
    next_point: u64,
    next_line: u64,
}

impl AnnotationStore {
    pub fn new(live_id: DatasetId) -> Self {
        Self {
            live_id,
            live: AnnotationSet::default(),
            dormant: HashMap::new(),
            next_point: 0,
            next_line: 0,
        }
    }

    pub fn live_id(&self) -> DatasetId {
        self.live_id
    }

    pub fn live(&self) -> &AnnotationSet {
        &self.live
    }

    /// Annotations of any dataset; datasets never touched read as empty.
    pub fn get(&self, id: DatasetId) -> &AnnotationSet {
        if id == self.live_id {
            return &self.live;
        }
        self.dormant.get(&id).unwrap_or(&EMPTY_SET)
    }

    pub fn point(&self, id: PointId) -> Option<&AnnotationPoint> {
        self.live.point(id)
    }

    /// Park the live set under its id and bring `id` live. Returns `false`
    /// when `id` is already live.
    pub fn swap_live_to(&mut self, id: DatasetId) -> bool {
        if id == self.live_id {
            return false;
        }
        let incoming = self.dormant.remove(&id).unwrap_or_default();
        let outgoing = std::mem::replace(&mut self.live, incoming);
        if !outgoing.is_empty() {
            self.dormant.insert(self.live_id, outgoing);
        }
        self.live_id = id;
        true
    }

    pub fn add_point(&mut self, position: Vec3) -> AnnotationPoint {
        let point = AnnotationPoint {
            id: PointId(self.next_point),
            position,
        };
        self.next_point += 1;
        self.live.points.push(point);
        point
    }

    pub fn remove_point(&mut self, id: PointId) -> Option<AnnotationPoint> {
        let index = self.live.points.iter().position(|point| point.id == id)?;
        Some(self.live.points.remove(index))
    }

    /// Connect two live points. Returns `None` if either point is not live
    /// or both ids name the same point.
    pub fn add_line(&mut self, a: PointId, b: PointId) -> Option<AnnotationLine> {
        if a == b {
            return None;
        }
        let start = self.live.point(a)?.position;
        let end = self.live.point(b)?.position;

        let line = AnnotationLine {
            id: LineId(self.next_line),
            start,
            end,
        };
        self.next_line += 1;
        self.live.lines.push(line);
        Some(line)
    }

    pub fn remove_line(&mut self, id: LineId) -> Option<AnnotationLine> {
        let index = self.live.lines.iter().position(|line| line.id == id)?;
        Some(self.live.lines.remove(index))
    }
}
