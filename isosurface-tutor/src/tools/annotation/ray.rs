use bevy::prelude::*;
use constants::cube_frame::CUBE_HALF_EXTENT;
use constants::render_settings::{EDGE_CYLINDER_RADIUS, LINE_PICK_RADIUS, MARKER_SPHERE_RADIUS};

use super::registry::Pickable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub object: Pickable,
    /// Ray parameter where the pick volume is entered.
    pub distance: f32,
    pub point: Vec3,
}

/// Scene queries the interaction controller delegates to the renderer side.
pub trait RayCaster {
    /// Hits against `candidates`, nearest first.
    fn intersect(&self, ray: Ray3d, candidates: &[Pickable]) -> Vec<RayHit>;

    /// Where the ray enters the invisible bounding volume of the cube.
    fn intersect_bounds(&self, ray: Ray3d) -> Option<Vec3>;
}

/// Ray caster over analytic pick volumes: capsules around edges and lines,
/// spheres around points, and the cube's box.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AnalyticRayCaster {
    pub edge_radius: f32,
    pub point_radius: f32,
    pub line_radius: f32,
    pub bounds_min: Vec3,
    pub bounds_max: Vec3,
}

impl Default for AnalyticRayCaster {
    fn default() -> Self {
        Self {
            edge_radius: EDGE_CYLINDER_RADIUS,
            point_radius: MARKER_SPHERE_RADIUS,
            line_radius: LINE_PICK_RADIUS,
            bounds_min: Vec3::splat(-CUBE_HALF_EXTENT),
            bounds_max: Vec3::splat(CUBE_HALF_EXTENT),
        }
    }
}

impl RayCaster for AnalyticRayCaster {
    fn intersect(&self, ray: Ray3d, candidates: &[Pickable]) -> Vec<RayHit> {
        let origin = ray.origin;
        let direction = ray.direction.as_vec3();

        let mut hits: Vec<RayHit> = candidates
            .iter()
            .filter_map(|object| {
                let (distance, point) = match *object {
                    Pickable::Edge { start, end, .. } => {
                        ray_capsule_hit(origin, direction, start, end, self.edge_radius)?
                    }
                    Pickable::Line(line) => {
                        ray_capsule_hit(origin, direction, line.start, line.end, self.line_radius)?
                    }
                    Pickable::Point(point) => {
                        let t = ray_sphere_hit_t(origin, direction, point.position, self.point_radius)?;
                        (t, origin + direction * t)
                    }
                };
                Some(RayHit {
                    object: *object,
                    distance,
                    point,
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn intersect_bounds(&self, ray: Ray3d) -> Option<Vec3> {
        let direction = ray.direction.as_vec3();
        let t = ray_aabb_hit_t(ray.origin, direction, self.bounds_min, self.bounds_max)?;
        Some(ray.origin + direction * t)
    }
}

// Expects a unit direction. Returns the entry parameter, or the exit one when
// the origin is inside the sphere.
pub fn ray_sphere_hit_t(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let along = to_center.dot(direction);
    let dist_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if dist_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - dist_sq).sqrt();
    let (near, far) = (along - half_chord, along + half_chord);
    if far < 0.0 {
        return None;
    }
    Some(if near >= 0.0 { near } else { far })
}

/// Closest approach between a ray and a segment, then a radius test.
///
/// Returns the entry parameter along the ray, estimated from the closest
/// approach, and the ray point at closest approach.
pub fn ray_capsule_hit(
    origin: Vec3,
    direction: Vec3,
    start: Vec3,
    end: Vec3,
    radius: f32,
) -> Option<(f32, Vec3)> {
    let axis = end - start;
    let offset = origin - start;
    let a = direction.length_squared();
    let e = axis.length_squared();
    let b = direction.dot(axis);
    let c = direction.dot(offset);
    let f = axis.dot(offset);

    let (t, s) = if e <= f32::EPSILON {
        ((-c / a).max(0.0), 0.0)
    } else {
        let denom = a * e - b * b;
        let mut t = if denom > f32::EPSILON {
            ((b * f - c * e) / denom).max(0.0)
        } else {
            0.0
        };
        let mut s = (b * t + f) / e;
        if s < 0.0 {
            s = 0.0;
            t = (-c / a).max(0.0);
        } else if s > 1.0 {
            s = 1.0;
            t = ((b - c) / a).max(0.0);
        }
        (t, s)
    };

    let on_ray = origin + direction * t;
    let on_segment = start + axis * s;
    let dist_sq = on_ray.distance_squared(on_segment);
    if dist_sq > radius * radius {
        return None;
    }
    let entry = (t - (radius * radius - dist_sq).sqrt()).max(0.0);
    Some((entry, on_ray))
}

// Slab test against an axis-aligned box. Returns the entry parameter, or the
// exit one when the origin is inside.
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        let inv = if ray_direction[axis] != 0.0 {
            1.0 / ray_direction[axis]
        } else {
            f32::INFINITY
        };
        let mut t0 = (min[axis] - ray_origin[axis]) * inv;
        let mut t1 = (max[axis] - ray_origin[axis]) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        // A parallel ray outside the slab yields NaN or an empty interval.
        if t0.is_nan() || t1.is_nan() {
            if ray_origin[axis] < min[axis] || ray_origin[axis] > max[axis] {
                return None;
            }
            continue;
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        return None;
    }
    Some(if t_enter >= 0.0 { t_enter } else { t_exit })
}
