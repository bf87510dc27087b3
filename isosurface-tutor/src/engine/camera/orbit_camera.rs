use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::math::EulerRot;
use bevy::prelude::*;
use bevy::window::RequestRedraw;
use constants::render_settings::{
    CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_ORBIT_SENSITIVITY, CAMERA_POLAR_MARGIN,
    CAMERA_START_POSITION, CAMERA_ZOOM_SENSITIVITY,
};
use std::f32::consts::FRAC_PI_2;

use crate::tools::annotation::controller::Modifiers;

/// Start and end of a camera drag. The annotation tool ignores the pointer
/// in between.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraInteraction {
    Started,
    Ended,
}

/// Orbit around a fixed focus point: yaw and pitch in radians, no pan.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub focus_point: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub is_orbiting: bool,
    home: (f32, f32, f32),
}

impl OrbitCamera {
    pub fn from_position(position: Vec3, focus_point: Vec3) -> Self {
        let offset = position - focus_point;
        let distance = offset
            .length()
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
        let yaw = offset.x.atan2(offset.z);
        let pitch = clamp_pitch(-(offset.y / offset.length().max(f32::EPSILON)).asin());

        Self {
            focus_point,
            distance,
            yaw,
            pitch,
            is_orbiting: false,
            home: (yaw, pitch, distance),
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn position(&self) -> Vec3 {
        self.focus_point + self.rotation() * Vec3::Z * self.distance
    }

    /// Rotate by a mouse delta in pixels.
    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * CAMERA_ORBIT_SENSITIVITY;
        self.pitch = clamp_pitch(self.pitch - delta.y * CAMERA_ORBIT_SENSITIVITY);
    }

    /// Positive steps move closer.
    pub fn zoom(&mut self, steps: f32) {
        self.distance = (self.distance - steps * CAMERA_ZOOM_SENSITIVITY)
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    pub fn reset(&mut self) {
        (self.yaw, self.pitch, self.distance) = self.home;
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_position(Vec3::from_array(CAMERA_START_POSITION), Vec3::ZERO)
    }
}

// Keeps the polar angle inside [margin, PI - margin].
fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(CAMERA_POLAR_MARGIN - FRAC_PI_2, FRAC_PI_2 - CAMERA_POLAR_MARGIN)
}

// Only an unmodified left press orbits; modified drags belong to the
// annotation tool or do nothing.
fn starts_orbit(modifiers: Modifiers) -> bool {
    !modifiers.control && !modifiers.shift
}

/// Unmodified left drag orbits, the wheel zooms, `R` restores the
/// starting view.
pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    mut interactions: EventWriter<CameraInteraction>,
    mut redraw: EventWriter<RequestRedraw>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    if mouse_button.just_pressed(MouseButton::Left)
        && starts_orbit(Modifiers::from_keyboard(&keyboard))
    {
        orbit.is_orbiting = true;
        interactions.write(CameraInteraction::Started);
    }
    if orbit.is_orbiting && !mouse_button.pressed(MouseButton::Left) {
        orbit.is_orbiting = false;
        interactions.write(CameraInteraction::Ended);
    }

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if orbit.is_orbiting && mouse_delta != Vec2::ZERO {
        orbit.orbit(mouse_delta);
    }

    let scroll: f32 = scroll_events
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        })
        .sum();
    if scroll.abs() > f32::EPSILON {
        orbit.zoom(scroll);
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        orbit.reset();
    }

    if orbit.is_changed() {
        camera_transform.translation = orbit.position();
        camera_transform.rotation = orbit.rotation();
        redraw.write(RequestRedraw);
    }
}
