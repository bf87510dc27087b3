use bevy::prelude::*;
use constants::cube_frame::CUBE_HALF_EXTENT;

use super::materials::{TutorMaterials, segment_transform};
use crate::engine::contour::library::SolutionLibrary;
use crate::engine::voxel::dataset::DatasetId;
use crate::tools::annotation::controller::InteractionController;

/// Contour markers, segments and the reference mesh of the active dataset.
#[derive(Component)]
pub struct SolutionVisual;

#[derive(Debug, Clone, PartialEq)]
pub struct VisibleSolutions {
    contour: Option<DatasetId>,
    reference: Option<Handle<Mesh>>,
}

/// Respawn the visible solution only when what should be visible changes.
pub fn update_solution_render(
    mut commands: Commands,
    library: Res<SolutionLibrary>,
    controller: Res<InteractionController>,
    materials: Res<TutorMaterials>,
    existing: Query<Entity, With<SolutionVisual>>,
    mut shown: Local<Option<VisibleSolutions>>,
) {
    let active = controller.live_dataset();
    let solution = library.visible_solution(active);
    let reference = library.visible_reference(active);
    let wanted = VisibleSolutions {
        contour: solution.map(|solution| solution.dataset),
        reference: reference.cloned(),
    };
    if shown.as_ref() == Some(&wanted) {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    if let Some(solution) = solution {
        for point in &solution.points {
            commands.spawn((
                Mesh3d(materials.marker_mesh.clone()),
                MeshMaterial3d(materials.solution.clone()),
                Transform::from_translation(point.position),
                SolutionVisual,
            ));
        }
        for segment in &solution.segments {
            let (start, end) = solution.segment_endpoints(segment);
            let Some(transform) = segment_transform(start, end) else {
                continue;
            };
            commands.spawn((
                Mesh3d(materials.line_mesh.clone()),
                MeshMaterial3d(materials.solution.clone()),
                transform,
                SolutionVisual,
            ));
        }
    }

    // Reference meshes are authored in the unit cube [0, 1].
    if let Some(mesh) = reference {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(materials.reference_mesh.clone()),
            Transform::from_translation(Vec3::splat(-CUBE_HALF_EXTENT)),
            SolutionVisual,
        ));
    }

    *shown = Some(wanted);
}
