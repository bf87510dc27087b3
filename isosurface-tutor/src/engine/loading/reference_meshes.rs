use bevy::asset::LoadState;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::engine::contour::library::SolutionLibrary;
use crate::engine::core::settings::TutorSettings;
use crate::engine::voxel::dataset::{DatasetId, DatasetTable};

/// Reference meshes still loading, one per dataset.
#[derive(Resource, Default)]
pub struct ReferenceMeshLoader {
    pending: Vec<(DatasetId, Handle<Mesh>)>,
}

pub fn start_reference_mesh_loading(
    mut loader: ResMut<ReferenceMeshLoader>,
    asset_server: Res<AssetServer>,
    settings: Res<TutorSettings>,
    table: Res<DatasetTable>,
) {
    loader.pending = table
        .iter()
        .map(|(id, _)| {
            let path = settings.reference_mesh_path(id);
            let handle = asset_server.load(
                GltfAssetLabel::Primitive {
                    mesh: 0,
                    primitive: 0,
                }
                .from_asset(path),
            );
            (id, handle)
        })
        .collect();
}

/// Hand finished meshes to the library. A failed load only disables that
/// dataset's overlay.
pub fn poll_reference_meshes(
    mut loader: ResMut<ReferenceMeshLoader>,
    asset_server: Res<AssetServer>,
    mut library: ResMut<SolutionLibrary>,
) {
    if loader.pending.is_empty() {
        return;
    }

    loader
        .pending
        .retain(|(id, handle)| match asset_server.get_load_state(handle) {
            Some(LoadState::Loaded) => {
                debug!("{id}: reference mesh ready");
                library.on_reference_mesh_ready(*id, handle.clone());
                false
            }
            Some(LoadState::Failed(err)) => {
                warn!("{id}: reference mesh unavailable ({err})");
                library.on_reference_mesh_failed(*id);
                false
            }
            _ => true,
        });
}
