use bevy::prelude::*;

use super::materials::{TutorMaterials, segment_transform};
use crate::tools::annotation::controller::InteractionController;

/// Every entity drawn for the live annotations and the previews.
#[derive(Component)]
pub struct AnnotationVisual;

/// Rebuild the live points, lines and previews whenever the controller
/// changes. Dormant datasets are never drawn.
pub fn update_annotation_render(
    mut commands: Commands,
    controller: Res<InteractionController>,
    materials: Res<TutorMaterials>,
    existing: Query<Entity, With<AnnotationVisual>>,
) {
    if !controller.is_changed() {
        return;
    }
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let live = controller.live();
    for point in live.points() {
        commands.spawn((
            Mesh3d(materials.marker_mesh.clone()),
            MeshMaterial3d(materials.point(controller.point_highlight(point.id))),
            Transform::from_translation(point.position),
            AnnotationVisual,
        ));
    }

    for line in live.lines() {
        let Some(transform) = segment_transform(line.start, line.end) else {
            continue;
        };
        commands.spawn((
            Mesh3d(materials.line_mesh.clone()),
            MeshMaterial3d(materials.line(controller.line_highlight(line.id))),
            transform,
            AnnotationVisual,
        ));
    }

    if let Some(position) = controller.preview_point() {
        commands.spawn((
            Mesh3d(materials.marker_mesh.clone()),
            MeshMaterial3d(materials.point_preview.clone()),
            Transform::from_translation(position),
            AnnotationVisual,
        ));
    }

    if let Some(transform) = controller
        .preview_line()
        .and_then(|(start, end)| segment_transform(start, end))
    {
        commands.spawn((
            Mesh3d(materials.line_mesh.clone()),
            MeshMaterial3d(materials.line_preview.clone()),
            transform,
            AnnotationVisual,
        ));
    }
}
