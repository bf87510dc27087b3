use bevy::prelude::*;
use constants::cube_frame::CORNER_COUNT;

use super::materials::{TutorMaterials, segment_transform};
use crate::engine::voxel::topology::{CornerIndex, CubeTopology, EdgeIndex};
use crate::tools::annotation::controller::InteractionController;

#[derive(Component, Debug, Clone, Copy)]
pub struct CubeEdge(pub EdgeIndex);

#[derive(Component, Debug, Clone, Copy)]
pub struct CubeCorner(pub CornerIndex);

/// Spawn the wireframe cube: a cylinder per edge and a sphere per corner.
pub fn spawn_voxel(mut commands: Commands, materials: Res<TutorMaterials>) {
    let topology = CubeTopology::standard();

    for edge in 0..topology.edges().len() {
        let (start, end) = topology.edge_endpoints(edge);
        let Some(transform) = segment_transform(start, end) else {
            continue;
        };
        commands.spawn((
            Mesh3d(materials.edge_mesh.clone()),
            MeshMaterial3d(materials.edge.clone()),
            transform,
            CubeEdge(edge),
        ));
    }

    for corner in 0..CORNER_COUNT {
        commands.spawn((
            Mesh3d(materials.marker_mesh.clone()),
            MeshMaterial3d(materials.corner.clone()),
            Transform::from_translation(topology.corner_position(corner)),
            CubeCorner(corner),
        ));
    }
}

/// Swap edge materials when the hovered edge changes.
pub fn update_edge_highlight(
    controller: Res<InteractionController>,
    materials: Res<TutorMaterials>,
    mut edges: Query<(&CubeEdge, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    if !controller.is_changed() {
        return;
    }
    for (CubeEdge(index), mut material) in &mut edges {
        let wanted = materials.edge(controller.edge_highlighted(*index));
        if material.0 != wanted {
            material.0 = wanted;
        }
    }
}
