use bevy::prelude::*;
use bevy::window::{CursorLeft, RequestRedraw};

use super::controller::{AnnotationChange, InteractionController, Modifiers};
use super::ray::{AnalyticRayCaster, RayCaster};
use crate::engine::camera::orbit_camera::CameraInteraction;

impl Modifiers {
    /// Command counts as control so the tool works the same on macOS.
    pub fn from_keyboard(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            shift: keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
            control: keyboard.any_pressed([
                KeyCode::ControlLeft,
                KeyCode::ControlRight,
                KeyCode::SuperLeft,
                KeyCode::SuperRight,
            ]),
        }
    }
}

/// Last cursor position in viewport pixels. The pointer ray is rebuilt from
/// it whenever the camera moves under a still cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    cursor: Option<Vec2>,
}

impl PointerTracker {
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    pub fn cursor_moved(&mut self, position: Vec2) {
        self.cursor = Some(position);
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Re-project the stored cursor with the current camera and hand the ray
    /// to the controller. Returns whether a ray was produced.
    pub fn refresh(
        &self,
        project: impl FnOnce(Vec2) -> Option<Ray3d>,
        controller: &mut InteractionController,
        caster: &impl RayCaster,
    ) -> bool {
        let Some(ray) = self.cursor.and_then(project) else {
            return false;
        };
        controller.pointer_moved(ray, caster);
        true
    }
}

/// Feed camera signals, the pointer ray, modifier keys and left button
/// presses to the controller, in that order.
pub fn annotation_input_system(
    mut controller: ResMut<InteractionController>,
    caster: Res<AnalyticRayCaster>,
    mut tracker: Local<PointerTracker>,
    mut camera_events: EventReader<CameraInteraction>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut cursor_left: EventReader<CursorLeft>,
    cameras: Query<(Ref<Transform>, &Camera), With<Camera3d>>,
    mut redraw: EventWriter<RequestRedraw>,
) {
    let caster: &AnalyticRayCaster = &caster;
    let mut handled = false;

    for event in camera_events.read() {
        match event {
            CameraInteraction::Started => controller.camera_interaction_started(),
            CameraInteraction::Ended => controller.camera_interaction_ended(),
        }
        handled = true;
    }

    let moved_to = cursor_moved.read().last().map(|event| event.position);
    if let Some(position) = moved_to {
        tracker.cursor_moved(position);
    }
    if cursor_left.read().last().is_some() {
        tracker.cursor_left();
        controller.pointer_left(caster);
        handled = true;
    }

    // The orbit camera has no parent, so its Transform is already the global
    // pose even before transform propagation runs this frame.
    if let Ok((transform, camera)) = cameras.single() {
        if tracker.cursor().is_some() && (moved_to.is_some() || transform.is_changed()) {
            let pose = GlobalTransform::from(*transform);
            handled |= tracker.refresh(
                |cursor| camera.viewport_to_world(&pose, cursor).ok(),
                &mut controller,
                caster,
            );
        }
    }

    let modifiers = Modifiers::from_keyboard(&keyboard);
    if modifiers != controller.modifiers() {
        controller.set_modifiers(modifiers, caster);
        handled = true;
    }

    if mouse.just_pressed(MouseButton::Left) {
        log_change(controller.pointer_down(caster), &controller);
        handled = true;
    }
    if mouse.just_released(MouseButton::Left) {
        log_change(controller.pointer_up(caster), &controller);
        handled = true;
    }

    if handled {
        redraw.write(RequestRedraw);
    }
}

fn log_change(change: Option<AnnotationChange>, controller: &InteractionController) {
    let dataset = controller.live_dataset();
    match change {
        Some(AnnotationChange::PointAdded(point)) => {
            info!("{dataset}: added point {:?} at {}", point.id, point.position)
        }
        Some(AnnotationChange::PointRemoved(point)) => {
            info!("{dataset}: removed point {:?}", point.id)
        }
        Some(AnnotationChange::LineAdded(line)) => info!(
            "{dataset}: connected {} to {} ({:?})",
            line.start, line.end, line.id
        ),
        Some(AnnotationChange::LineRemoved(line)) => {
            info!("{dataset}: removed line {:?}", line.id)
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::voxel::dataset::DatasetId;
    use crate::engine::voxel::topology::CubeTopology;
    use crate::tools::annotation::controller::InteractionState;

    const CONNECT: Modifiers = Modifiers {
        shift: false,
        control: true,
    };

    // Stand-in for a camera: every cursor maps to one fixed ray.
    fn pose(origin: Vec3, direction: Dir3) -> impl FnOnce(Vec2) -> Option<Ray3d> {
        move |_| Some(Ray3d::new(origin, direction))
    }

    #[test]
    fn no_cursor_means_no_ray() {
        let caster = AnalyticRayCaster::default();
        let mut controller = InteractionController::new(CubeTopology::standard(), DatasetId(0));
        let tracker = PointerTracker::default();

        assert!(!tracker.refresh(
            pose(Vec3::new(0.1, 2.0, -0.5), Dir3::NEG_Y),
            &mut controller,
            &caster
        ));
        assert_eq!(controller.state(), InteractionState::Idle);
    }

    #[test]
    fn camera_move_under_a_still_cursor_moves_the_hover() {
        let caster = AnalyticRayCaster::default();
        let mut controller = InteractionController::new(CubeTopology::standard(), DatasetId(0));
        let mut tracker = PointerTracker::default();
        tracker.cursor_moved(Vec2::new(400.0, 300.0));

        assert!(tracker.refresh(
            pose(Vec3::new(0.1, 2.0, -0.5), Dir3::NEG_Y),
            &mut controller,
            &caster
        ));
        assert_eq!(controller.state(), InteractionState::HoverEdge(3));

        // The camera moves, the cursor does not.
        assert!(tracker.refresh(
            pose(Vec3::new(2.0, -0.1, -0.5), Dir3::NEG_X),
            &mut controller,
            &caster
        ));
        assert_eq!(controller.state(), InteractionState::HoverEdge(2));

        controller.set_modifiers(CONNECT, &caster);
        let Some(AnnotationChange::PointAdded(point)) = controller.pointer_down(&caster) else {
            panic!("expected a new point");
        };
        assert!(point.position.abs_diff_eq(Vec3::new(0.5, -0.1, -0.5), 1e-5));
    }

    #[test]
    fn leaving_the_window_forgets_the_cursor() {
        let mut tracker = PointerTracker::default();
        tracker.cursor_moved(Vec2::new(10.0, 20.0));
        assert_eq!(tracker.cursor(), Some(Vec2::new(10.0, 20.0)));
        tracker.cursor_left();
        assert_eq!(tracker.cursor(), None);
    }
}
