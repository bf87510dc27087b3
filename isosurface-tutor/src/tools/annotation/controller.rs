use bevy::prelude::*;

use super::ray::RayCaster;
use super::registry::{HitKind, Pickable, PickableRegistry};
use super::store::{AnnotationLine, AnnotationPoint, AnnotationSet, AnnotationStore, LineId, PointId};
use crate::engine::voxel::dataset::DatasetId;
use crate::engine::voxel::topology::{CubeTopology, EdgeIndex};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    Plain,
    Connect,
    Delete,
}

impl Modifiers {
    fn intent(self) -> Intent {
        match (self.control, self.shift) {
            (true, true) => Intent::Delete,
            (true, false) => Intent::Connect,
            _ => Intent::Plain,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointHighlight {
    Hover,
    Connect,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineHighlight {
    Hover,
    Delete,
}

/// The single object currently drawn highlighted, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    None,
    Edge(EdgeIndex),
    Point(PointId, PointHighlight),
    Line(LineId, LineHighlight),
}

/// Where the preview line of a drag ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEndpoint {
    None,
    Snap(AnnotationPoint),
    Free(Vec3),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    Idle,
    HoverEdge(EdgeIndex),
    HoverPoint(PointId),
    HoverLine(LineId),
    Dragging {
        origin: AnnotationPoint,
        endpoint: DragEndpoint,
    },
}

/// Mutation performed by a pointer press or release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnnotationChange {
    PointAdded(AnnotationPoint),
    PointRemoved(AnnotationPoint),
    LineAdded(AnnotationLine),
    LineRemoved(AnnotationLine),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Hover {
    None,
    Edge { index: EdgeIndex, projection: Vec3 },
    Point(AnnotationPoint),
    Line(AnnotationLine),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    origin: AnnotationPoint,
    endpoint: DragEndpoint,
    /// No preview line until the pointer has moved after the press.
    moved: bool,
}

/// Session object for hand-building a contour.
///
/// Owns the per-dataset annotations and everything the pointer state machine
/// needs. Hover state is recomputed synchronously on every pointer move and
/// modifier change, so a press always acts on what is highlighted. While the
/// camera is being dragged all pointer input is ignored.
#[derive(Resource, Debug)]
pub struct InteractionController {
    store: AnnotationStore,
    registry: PickableRegistry,
    modifiers: Modifiers,
    pointer: Option<Ray3d>,
    camera_active: bool,
    hover: Hover,
    drag: Option<Drag>,
    preview_point: Option<Vec3>,
    preview_line: Option<(Vec3, Vec3)>,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(CubeTopology::standard(), DatasetId::default())
    }
}

impl InteractionController {
    pub fn new(topology: &CubeTopology, initial: DatasetId) -> Self {
        Self {
            store: AnnotationStore::new(initial),
            registry: PickableRegistry::new(topology),
            modifiers: Modifiers::default(),
            pointer: None,
            camera_active: false,
            hover: Hover::None,
            drag: None,
            preview_point: None,
            preview_line: None,
        }
    }

    pub fn pointer_moved(&mut self, ray: Ray3d, caster: &impl RayCaster) {
        self.pointer = Some(ray);
        if let Some(drag) = self.drag.as_mut() {
            drag.moved = true;
        }
        if !self.camera_active {
            self.evaluate(caster);
        }
    }

    /// The cursor left the viewport.
    pub fn pointer_left(&mut self, caster: &impl RayCaster) {
        self.pointer = None;
        if !self.camera_active {
            self.evaluate(caster);
        }
    }

    /// Record the modifier keys and re-evaluate as if the pointer had moved.
    pub fn set_modifiers(&mut self, modifiers: Modifiers, caster: &impl RayCaster) {
        self.modifiers = modifiers;
        if !self.camera_active {
            self.evaluate(caster);
        }
    }

    pub fn pointer_down(&mut self, caster: &impl RayCaster) -> Option<AnnotationChange> {
        if self.camera_active || self.drag.is_some() {
            return None;
        }

        let change = match (self.hover, self.modifiers.intent()) {
            (Hover::Edge { projection, .. }, Intent::Connect) => {
                let point = self.store.add_point(projection);
                self.registry.track_point(point);
                Some(AnnotationChange::PointAdded(point))
            }
            (Hover::Line(line), Intent::Delete) => {
                let removed = self.store.remove_line(line.id)?;
                self.registry.forget_line(removed.id);
                Some(AnnotationChange::LineRemoved(removed))
            }
            (Hover::Point(point), Intent::Delete) => {
                let removed = self.store.remove_point(point.id)?;
                self.registry.forget_point(removed.id);
                Some(AnnotationChange::PointRemoved(removed))
            }
            (Hover::Point(point), Intent::Connect) => {
                self.drag = Some(Drag {
                    origin: point,
                    endpoint: DragEndpoint::None,
                    moved: false,
                });
                None
            }
            _ => return None,
        };

        self.evaluate(caster);
        change
    }

    /// Finish a drag, committing a line if it ended on another point.
    pub fn pointer_up(&mut self, caster: &impl RayCaster) -> Option<AnnotationChange> {
        if self.camera_active {
            return None;
        }

        let drag = self.drag.take();
        self.preview_line = None;

        let change = match drag {
            Some(Drag {
                origin,
                endpoint: DragEndpoint::Snap(target),
                ..
            }) => self.store.add_line(origin.id, target.id).map(|line| {
                self.registry.track_line(line);
                AnnotationChange::LineAdded(line)
            }),
            _ => None,
        };

        self.evaluate(caster);
        change
    }

    pub fn camera_interaction_started(&mut self) {
        self.camera_active = true;
    }

    pub fn camera_interaction_ended(&mut self) {
        self.camera_active = false;
    }

    pub fn camera_active(&self) -> bool {
        self.camera_active
    }

    /// Bring `id` live. Any drag is cancelled and previews are cleared even
    /// when `id` is already live. Returns whether the live dataset changed.
    pub fn select_dataset(&mut self, id: DatasetId, caster: &impl RayCaster) -> bool {
        self.drag = None;
        self.hover = Hover::None;
        self.preview_point = None;
        self.preview_line = None;

        let swapped = self.store.swap_live_to(id);
        if swapped {
            self.registry.sync(self.store.live());
        }
        if !self.camera_active {
            self.evaluate(caster);
        }
        swapped
    }

    fn evaluate(&mut self, caster: &impl RayCaster) {
        if self.drag.is_some() && !self.modifiers.control {
            self.drag = None;
            self.preview_line = None;
        }

        let nearest = self
            .pointer
            .and_then(|ray| caster.intersect(ray, &self.registry.candidates()).into_iter().next());

        self.hover = match nearest {
            Some(hit) => match (self.registry.classify(&hit.object), hit.object) {
                (HitKind::Edge(index), _) => match self.registry.edge(index) {
                    Some((start, end)) => Hover::Edge {
                        index,
                        projection: project_onto_edge(hit.point, start, end),
                    },
                    None => Hover::None,
                },
                (HitKind::Point(_), Pickable::Point(point)) => Hover::Point(point),
                (HitKind::Line(_), Pickable::Line(line)) => Hover::Line(line),
                _ => Hover::None,
            },
            None => Hover::None,
        };

        self.preview_point = match (self.hover, self.drag) {
            (Hover::Edge { projection, .. }, None) => Some(projection),
            _ => None,
        };

        if let Some(drag) = self.drag.as_mut().filter(|drag| drag.moved) {
            drag.endpoint = match self.hover {
                Hover::Point(target) if target.id != drag.origin.id => DragEndpoint::Snap(target),
                _ => self
                    .pointer
                    .and_then(|ray| caster.intersect_bounds(ray))
                    .map_or(DragEndpoint::None, DragEndpoint::Free),
            };
            self.preview_line = match drag.endpoint {
                DragEndpoint::Snap(target) => Some((drag.origin.position, target.position)),
                DragEndpoint::Free(position) => Some((drag.origin.position, position)),
                DragEndpoint::None => None,
            };
        }
    }

    pub fn state(&self) -> InteractionState {
        if let Some(drag) = self.drag {
            return InteractionState::Dragging {
                origin: drag.origin,
                endpoint: drag.endpoint,
            };
        }
        match self.hover {
            Hover::None => InteractionState::Idle,
            Hover::Edge { index, .. } => InteractionState::HoverEdge(index),
            Hover::Point(point) => InteractionState::HoverPoint(point.id),
            Hover::Line(line) => InteractionState::HoverLine(line.id),
        }
    }

    /// The hovered object and how it should be drawn.
    pub fn highlight(&self) -> Highlight {
        let intent = self.modifiers.intent();
        match self.hover {
            Hover::None => Highlight::None,
            Hover::Edge { index, .. } => Highlight::Edge(index),
            Hover::Point(point) => Highlight::Point(
                point.id,
                match intent {
                    Intent::Plain => PointHighlight::Hover,
                    Intent::Connect => PointHighlight::Connect,
                    Intent::Delete => PointHighlight::Delete,
                },
            ),
            Hover::Line(line) => Highlight::Line(
                line.id,
                match intent {
                    Intent::Delete => LineHighlight::Delete,
                    _ => LineHighlight::Hover,
                },
            ),
        }
    }

    /// Highlight of one point; the drag origin keeps the connect colour.
    pub fn point_highlight(&self, id: PointId) -> Option<PointHighlight> {
        if self.drag.is_some_and(|drag| drag.origin.id == id) {
            return Some(PointHighlight::Connect);
        }
        match self.highlight() {
            Highlight::Point(hovered, highlight) if hovered == id => Some(highlight),
            _ => None,
        }
    }

    pub fn line_highlight(&self, id: LineId) -> Option<LineHighlight> {
        match self.highlight() {
            Highlight::Line(hovered, highlight) if hovered == id => Some(highlight),
            _ => None,
        }
    }

    pub fn edge_highlighted(&self, index: EdgeIndex) -> bool {
        self.highlight() == Highlight::Edge(index)
    }

    /// On-edge marker shown while hovering an edge outside a drag.
    pub fn preview_point(&self) -> Option<Vec3> {
        self.preview_point
    }

    pub fn preview_line(&self) -> Option<(Vec3, Vec3)> {
        self.preview_line
    }

    pub fn live(&self) -> &AnnotationSet {
        self.store.live()
    }

    pub fn live_dataset(&self) -> DatasetId {
        self.store.live_id()
    }

    pub fn annotations(&self, id: DatasetId) -> &AnnotationSet {
        self.store.get(id)
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

/// Closest point on the edge segment to a hit on its pick volume.
pub fn project_onto_edge(hit: Vec3, start: Vec3, end: Vec3) -> Vec3 {
    let axis = end - start;
    let length_sq = axis.length_squared();
    if length_sq <= f32::EPSILON {
        return start;
    }
    let t = ((hit - start).dot(axis) / length_sq).clamp(0.0, 1.0);
    start + axis * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::annotation::ray::AnalyticRayCaster;

    const CONNECT: Modifiers = Modifiers {
        shift: false,
        control: true,
    };
    const DELETE: Modifiers = Modifiers {
        shift: true,
        control: true,
    };

    fn controller() -> InteractionController {
        InteractionController::new(CubeTopology::standard(), DatasetId(0))
    }

    fn down_onto_edge_three() -> Ray3d {
        Ray3d::new(Vec3::new(0.1, 2.0, -0.5), Dir3::NEG_Y)
    }

    #[test]
    fn starts_idle_and_stays_idle_on_a_miss() {
        let caster = AnalyticRayCaster::default();
        let mut controller = controller();
        assert_eq!(controller.state(), InteractionState::Idle);

        controller.pointer_moved(Ray3d::new(Vec3::splat(3.0), Dir3::X), &caster);
        assert_eq!(controller.state(), InteractionState::Idle);
        assert_eq!(controller.highlight(), Highlight::None);
        assert_eq!(controller.preview_point(), None);
    }

    #[test]
    fn edge_hover_previews_the_projected_point() {
        let caster = AnalyticRayCaster::default();
        let mut controller = controller();
        controller.pointer_moved(down_onto_edge_three(), &caster);

        assert_eq!(controller.state(), InteractionState::HoverEdge(3));
        assert!(controller.edge_highlighted(3));
        let preview = controller.preview_point().unwrap();
        assert!(preview.abs_diff_eq(Vec3::new(0.1, 0.5, -0.5), 1e-5));
    }

    #[test]
    fn plain_press_on_edge_is_a_no_op() {
        let caster = AnalyticRayCaster::default();
        let mut controller = controller();
        controller.pointer_moved(down_onto_edge_three(), &caster);
        assert_eq!(controller.pointer_down(&caster), None);
        assert!(controller.live().is_empty());
    }

    #[test]
    fn modifier_change_updates_point_intent_without_moving() {
        let caster = AnalyticRayCaster::default();
        let mut controller = controller();
        controller.set_modifiers(CONNECT, &caster);
        controller.pointer_moved(down_onto_edge_three(), &caster);
        let Some(AnnotationChange::PointAdded(point)) = controller.pointer_down(&caster) else {
            panic!("expected a new point");
        };

        assert_eq!(controller.state(), InteractionState::HoverPoint(point.id));
        assert_eq!(
            controller.point_highlight(point.id),
            Some(PointHighlight::Connect)
        );

        controller.set_modifiers(DELETE, &caster);
        assert_eq!(
            controller.point_highlight(point.id),
            Some(PointHighlight::Delete)
        );

        controller.set_modifiers(Modifiers::default(), &caster);
        assert_eq!(
            controller.point_highlight(point.id),
            Some(PointHighlight::Hover)
        );
    }

    #[test]
    fn camera_interaction_freezes_the_machine() {
        let caster = AnalyticRayCaster::default();
        let mut controller = controller();
        controller.set_modifiers(CONNECT, &caster);

        controller.camera_interaction_started();
        controller.pointer_moved(down_onto_edge_three(), &caster);
        assert_eq!(controller.state(), InteractionState::Idle);
        assert_eq!(controller.pointer_down(&caster), None);
        assert!(controller.live().is_empty());

        controller.camera_interaction_ended();
        controller.pointer_moved(down_onto_edge_three(), &caster);
        assert_eq!(controller.state(), InteractionState::HoverEdge(3));
    }

    #[test]
    fn project_onto_edge_clamps_to_endpoints() {
        let start = Vec3::new(-0.5, 0.5, -0.5);
        let end = Vec3::new(0.5, 0.5, -0.5);
        assert_eq!(
            project_onto_edge(Vec3::new(0.9, 0.52, -0.49), start, end),
            end
        );
        assert_eq!(
            project_onto_edge(Vec3::new(0.0, 0.52, -0.49), start, end),
            Vec3::new(0.0, 0.5, -0.5)
        );
    }
}
