use bevy::prelude::*;
use constants::palette;
use constants::render_settings::{
    DRAW_LINE_WIDTH, EDGE_CYLINDER_RADIUS, MARKER_SPHERE_RADIUS, MIN_DRAWN_LINE_LENGTH,
};

use crate::tools::annotation::controller::{LineHighlight, PointHighlight};

/// Shared meshes and materials, created once so rebuilding the annotation
/// visuals never allocates new assets.
#[derive(Resource)]
pub struct TutorMaterials {
    /// Unit height cylinder along +Y, scaled per segment.
    pub edge_mesh: Handle<Mesh>,
    pub line_mesh: Handle<Mesh>,
    pub marker_mesh: Handle<Mesh>,

    pub edge: Handle<StandardMaterial>,
    pub edge_hover: Handle<StandardMaterial>,
    pub corner: Handle<StandardMaterial>,

    pub user_point: Handle<StandardMaterial>,
    pub user_point_hover: Handle<StandardMaterial>,
    pub user_point_delete: Handle<StandardMaterial>,
    pub user_point_connect: Handle<StandardMaterial>,
    pub point_preview: Handle<StandardMaterial>,

    pub user_line: Handle<StandardMaterial>,
    pub user_line_hover: Handle<StandardMaterial>,
    pub user_line_delete: Handle<StandardMaterial>,
    pub line_preview: Handle<StandardMaterial>,

    pub solution: Handle<StandardMaterial>,
    pub reference_mesh: Handle<StandardMaterial>,
}

impl FromWorld for TutorMaterials {
    fn from_world(world: &mut World) -> Self {
        let (edge_mesh, line_mesh, marker_mesh) = {
            let mut meshes = world.resource_mut::<Assets<Mesh>>();
            (
                meshes.add(Cylinder::new(EDGE_CYLINDER_RADIUS, 1.0)),
                meshes.add(Cylinder::new(DRAW_LINE_WIDTH * 0.5, 1.0)),
                meshes.add(Sphere::new(MARKER_SPHERE_RADIUS)),
            )
        };

        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        let reference_mesh = materials.add(StandardMaterial {
            base_color: palette::REFERENCE_MESH,
            alpha_mode: AlphaMode::Blend,
            cull_mode: None,
            double_sided: true,
            ..default()
        });
        let mut lit = |color: Color| {
            materials.add(StandardMaterial {
                base_color: color,
                perceptual_roughness: 0.6,
                alpha_mode: if color.alpha() < 1.0 {
                    AlphaMode::Blend
                } else {
                    AlphaMode::Opaque
                },
                ..default()
            })
        };

        Self {
            edge_mesh,
            line_mesh,
            marker_mesh,
            edge: lit(palette::EDGE),
            edge_hover: lit(palette::EDGE_HOVER),
            corner: lit(palette::CORNER),
            user_point: lit(palette::USER_POINT),
            user_point_hover: lit(palette::USER_POINT_HOVER),
            user_point_delete: lit(palette::USER_POINT_DELETE),
            user_point_connect: lit(palette::USER_POINT_CONNECT),
            point_preview: lit(palette::POINT_PREVIEW),
            user_line: lit(palette::USER_LINE),
            user_line_hover: lit(palette::USER_LINE_HOVER),
            user_line_delete: lit(palette::USER_LINE_DELETE),
            line_preview: lit(palette::LINE_PREVIEW),
            solution: lit(palette::SOLUTION),
            reference_mesh,
        }
    }
}

impl TutorMaterials {
    pub fn point(&self, highlight: Option<PointHighlight>) -> Handle<StandardMaterial> {
        match highlight {
            None => self.user_point.clone(),
            Some(PointHighlight::Hover) => self.user_point_hover.clone(),
            Some(PointHighlight::Connect) => self.user_point_connect.clone(),
            Some(PointHighlight::Delete) => self.user_point_delete.clone(),
        }
    }

    pub fn line(&self, highlight: Option<LineHighlight>) -> Handle<StandardMaterial> {
        match highlight {
            None => self.user_line.clone(),
            Some(LineHighlight::Hover) => self.user_line_hover.clone(),
            Some(LineHighlight::Delete) => self.user_line_delete.clone(),
        }
    }

    pub fn edge(&self, highlighted: bool) -> Handle<StandardMaterial> {
        if highlighted {
            self.edge_hover.clone()
        } else {
            self.edge.clone()
        }
    }
}

/// Transform that stretches a unit +Y cylinder between two points.
/// `None` for segments too short to orient.
pub fn segment_transform(start: Vec3, end: Vec3) -> Option<Transform> {
    let delta = end - start;
    let length = delta.length();
    if length < MIN_DRAWN_LINE_LENGTH {
        return None;
    }
    Some(
        Transform::from_translation((start + end) * 0.5)
            .with_rotation(Quat::from_rotation_arc(Vec3::Y, delta / length))
            .with_scale(Vec3::new(1.0, length, 1.0)),
    )
}
