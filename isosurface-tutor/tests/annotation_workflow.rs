use bevy::math::{Dir3, Ray3d, Vec3};
use isosurface_tutor::engine::voxel::dataset::DatasetId;
use isosurface_tutor::engine::voxel::topology::CubeTopology;
use isosurface_tutor::tools::annotation::controller::{
    AnnotationChange, DragEndpoint, Highlight, InteractionController, InteractionState,
    LineHighlight, Modifiers,
};
use isosurface_tutor::tools::annotation::ray::AnalyticRayCaster;
use isosurface_tutor::tools::annotation::store::AnnotationPoint;

const CONNECT: Modifiers = Modifiers {
    shift: false,
    control: true,
};
const DELETE: Modifiers = Modifiers {
    shift: true,
    control: true,
};

/// Straight down onto edge 3, landing at (0.1, 0.5, -0.5).
fn ray_a() -> Ray3d {
    Ray3d::new(Vec3::new(0.1, 2.0, -0.5), Dir3::NEG_Y)
}

/// Along -x onto edge 2, landing at (0.5, -0.1, -0.5).
fn ray_b() -> Ray3d {
    Ray3d::new(Vec3::new(2.0, -0.1, -0.5), Dir3::NEG_X)
}

/// Through the middle of the line from A to B.
fn ray_line_middle() -> Ray3d {
    Ray3d::new(Vec3::new(0.3, 0.2, 2.0), Dir3::NEG_Z)
}

/// Through the open interior of the cube onto the back face.
fn ray_interior() -> Ray3d {
    Ray3d::new(Vec3::new(0.0, 0.0, 2.0), Dir3::NEG_Z)
}

struct Session {
    controller: InteractionController,
    caster: AnalyticRayCaster,
}

impl Session {
    fn new() -> Self {
        Self {
            controller: InteractionController::new(CubeTopology::standard(), DatasetId(0)),
            caster: AnalyticRayCaster::default(),
        }
    }

    fn modifiers(&mut self, modifiers: Modifiers) {
        self.controller.set_modifiers(modifiers, &self.caster);
    }

    fn hover(&mut self, ray: Ray3d) {
        self.controller.pointer_moved(ray, &self.caster);
    }

    fn press(&mut self) -> Option<AnnotationChange> {
        self.controller.pointer_down(&self.caster)
    }

    fn release(&mut self) -> Option<AnnotationChange> {
        self.controller.pointer_up(&self.caster)
    }

    fn add_point(&mut self, ray: Ray3d) -> AnnotationPoint {
        self.modifiers(CONNECT);
        self.hover(ray);
        match self.press() {
            Some(AnnotationChange::PointAdded(point)) => point,
            other => panic!("expected a new point, got {other:?}"),
        }
    }

    /// Adds points A and B and joins them.
    fn build_line(&mut self) -> (AnnotationPoint, AnnotationPoint) {
        let a = self.add_point(ray_a());
        let b = self.add_point(ray_b());
        self.hover(ray_a());
        assert_eq!(self.press(), None);
        self.hover(ray_b());
        assert!(matches!(self.release(), Some(AnnotationChange::LineAdded(_))));
        (a, b)
    }
}

#[test]
fn control_click_on_edge_commits_the_projected_point() {
    let mut session = Session::new();
    let point = session.add_point(ray_a());

    assert!(point.position.abs_diff_eq(Vec3::new(0.1, 0.5, -0.5), 1e-5));
    assert_eq!(session.controller.live().points(), &[point]);
    assert_eq!(
        session.controller.state(),
        InteractionState::HoverPoint(point.id)
    );
    assert_eq!(session.controller.preview_point(), None);
}

#[test]
fn drag_between_points_creates_one_line() {
    let mut session = Session::new();
    let a = session.add_point(ray_a());
    let b = session.add_point(ray_b());

    session.hover(ray_a());
    assert_eq!(session.press(), None);

    session.hover(ray_b());
    assert_eq!(
        session.controller.state(),
        InteractionState::Dragging {
            origin: a,
            endpoint: DragEndpoint::Snap(b),
        }
    );
    assert_eq!(
        session.controller.preview_line(),
        Some((a.position, b.position))
    );

    let Some(AnnotationChange::LineAdded(line)) = session.release() else {
        panic!("expected a new line");
    };
    assert_eq!(line.start, a.position);
    assert_eq!(line.end, b.position);
    assert_eq!(session.controller.live().lines(), &[line]);
    assert_eq!(session.controller.preview_line(), None);
    assert_eq!(session.controller.state(), InteractionState::HoverPoint(b.id));
}

#[test]
fn releasing_control_cancels_the_drag() {
    let mut session = Session::new();
    session.add_point(ray_a());
    let b = session.add_point(ray_b());

    session.hover(ray_a());
    session.press();
    session.hover(ray_b());
    assert!(session.controller.preview_line().is_some());

    session.modifiers(Modifiers::default());
    assert_eq!(session.controller.state(), InteractionState::HoverPoint(b.id));
    assert_eq!(session.controller.preview_line(), None);

    assert_eq!(session.release(), None);
    assert!(session.controller.live().lines().is_empty());
}

#[test]
fn drag_into_empty_space_previews_a_free_endpoint() {
    let mut session = Session::new();
    let a = session.add_point(ray_a());

    session.hover(ray_a());
    session.press();
    session.hover(ray_interior());

    let InteractionState::Dragging {
        origin,
        endpoint: DragEndpoint::Free(end),
    } = session.controller.state()
    else {
        panic!("expected a free drag endpoint");
    };
    assert_eq!(origin, a);
    assert!(end.abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), 1e-5));
    assert_eq!(session.controller.preview_line(), Some((a.position, end)));
    assert_eq!(session.controller.preview_point(), None);

    assert_eq!(session.release(), None);
    assert!(session.controller.live().lines().is_empty());
}

#[test]
fn drag_preview_waits_for_pointer_movement() {
    let mut session = Session::new();
    let a = session.add_point(ray_a());

    session.hover(ray_a());
    session.press();
    assert_eq!(
        session.controller.state(),
        InteractionState::Dragging {
            origin: a,
            endpoint: DragEndpoint::None,
        }
    );
    assert_eq!(session.controller.preview_line(), None);

    // A modifier re-evaluation is not movement either.
    session.modifiers(CONNECT);
    assert_eq!(session.controller.preview_line(), None);

    session.hover(ray_interior());
    assert!(session.controller.preview_line().is_some());
}

#[test]
fn drag_origin_never_snaps_to_itself() {
    let mut session = Session::new();
    let a = session.add_point(ray_a());

    session.hover(ray_a());
    session.press();
    session.hover(ray_interior());
    session.hover(ray_a());

    let InteractionState::Dragging { endpoint, .. } = session.controller.state() else {
        panic!("expected a drag");
    };
    assert!(matches!(endpoint, DragEndpoint::Free(_)));
    assert_eq!(session.release(), None);
    assert!(session.controller.live().lines().is_empty());
    assert_eq!(session.controller.live().points(), &[a]);
}

#[test]
fn leaving_the_viewport_returns_to_idle() {
    let mut session = Session::new();
    session.hover(ray_a());
    assert_eq!(session.controller.state(), InteractionState::HoverEdge(3));
    assert!(session.controller.preview_point().is_some());

    session.controller.pointer_left(&session.caster);
    assert_eq!(session.controller.state(), InteractionState::Idle);
    assert_eq!(session.controller.highlight(), Highlight::None);
    assert_eq!(session.controller.preview_point(), None);

    // Modifier changes have no pointer to re-evaluate against.
    session.modifiers(CONNECT);
    assert_eq!(session.controller.state(), InteractionState::Idle);
    assert_eq!(session.press(), None);
    assert!(session.controller.live().is_empty());
}

#[test]
fn hovered_line_uses_plain_highlight_without_delete_intent() {
    let mut session = Session::new();
    session.build_line();
    let line = session.controller.live().lines()[0];

    session.hover(ray_line_middle());
    assert_eq!(session.controller.state(), InteractionState::HoverLine(line.id));
    assert_eq!(
        session.controller.highlight(),
        Highlight::Line(line.id, LineHighlight::Hover)
    );

    session.modifiers(Modifiers::default());
    assert_eq!(
        session.controller.highlight(),
        Highlight::Line(line.id, LineHighlight::Hover)
    );
}

#[test]
fn control_click_on_a_line_changes_nothing() {
    let mut session = Session::new();
    session.build_line();
    let before = session.controller.live().clone();
    let line = before.lines()[0];

    session.modifiers(CONNECT);
    session.hover(ray_line_middle());
    assert_eq!(session.press(), None);
    assert_eq!(session.release(), None);
    assert_eq!(session.controller.live(), &before);
    assert_eq!(session.controller.state(), InteractionState::HoverLine(line.id));
}

#[test]
fn switching_datasets_during_camera_interaction_only_clears() {
    let mut session = Session::new();
    session.build_line();
    session.hover(ray_a());
    session.press();

    session.controller.camera_interaction_started();
    assert!(session
        .controller
        .select_dataset(DatasetId(1), &session.caster));

    // Without re-evaluation the pointer over edge 3 is not picked up.
    assert_eq!(session.controller.state(), InteractionState::Idle);
    assert_eq!(session.controller.preview_line(), None);
    assert_eq!(session.controller.preview_point(), None);
    assert!(session.controller.live().is_empty());

    session.controller.camera_interaction_ended();
    assert_eq!(session.controller.state(), InteractionState::Idle);
    session.hover(ray_a());
    assert_eq!(session.controller.state(), InteractionState::HoverEdge(3));
}

#[test]
fn deleting_a_point_keeps_its_lines() {
    let mut session = Session::new();
    let (a, _) = session.build_line();

    session.modifiers(DELETE);
    session.hover(ray_a());
    assert_eq!(session.press(), Some(AnnotationChange::PointRemoved(a)));

    let live = session.controller.live();
    assert_eq!(live.points().len(), 1);
    assert_eq!(live.lines().len(), 1);
    assert_eq!(live.lines()[0].start, a.position);
}

#[test]
fn delete_click_on_a_line_removes_it() {
    let mut session = Session::new();
    session.build_line();
    let line = session.controller.live().lines()[0];

    session.modifiers(DELETE);
    session.hover(ray_line_middle());
    assert_eq!(
        session.controller.highlight(),
        Highlight::Line(line.id, LineHighlight::Delete)
    );

    assert_eq!(session.press(), Some(AnnotationChange::LineRemoved(line)));
    assert!(session.controller.live().lines().is_empty());
    assert_eq!(session.controller.live().points().len(), 2);
    assert_eq!(session.controller.state(), InteractionState::Idle);
}

#[test]
fn switching_datasets_cancels_the_drag_and_round_trips_annotations() {
    let mut session = Session::new();
    session.build_line();
    let before = session.controller.live().clone();

    session.hover(ray_a());
    session.press();
    assert!(matches!(
        session.controller.state(),
        InteractionState::Dragging { .. }
    ));

    assert!(session
        .controller
        .select_dataset(DatasetId(1), &session.caster));
    assert!(!matches!(
        session.controller.state(),
        InteractionState::Dragging { .. }
    ));
    assert_eq!(session.controller.preview_line(), None);
    assert!(session.controller.live().is_empty());
    assert_eq!(session.controller.live_dataset(), DatasetId(1));
    assert_eq!(session.controller.annotations(DatasetId(0)), &before);

    assert!(session
        .controller
        .select_dataset(DatasetId(0), &session.caster));
    assert_eq!(session.controller.live(), &before);
    assert!(session.controller.annotations(DatasetId(1)).is_empty());
}
