use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::winit::WinitSettings;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::palette;
use constants::render_settings::{AMBIENT_BRIGHTNESS, DIRECTIONAL_ILLUMINANCE};

// Crate engine modules
use crate::engine::camera::orbit_camera::{CameraInteraction, OrbitCamera, orbit_camera_controller};
use crate::engine::contour::library::SolutionLibrary;
use crate::engine::core::app_state::AppState;
use crate::engine::core::settings::TutorSettings;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::reference_meshes::{
    ReferenceMeshLoader, poll_reference_meshes, start_reference_mesh_loading,
};
use crate::engine::loading::settings_loader::{SettingsLoader, load_settings_system, start_loading};
use crate::engine::scene::annotations::update_annotation_render;
use crate::engine::scene::hud::{spawn_hud, update_corner_labels, update_hud_text};
use crate::engine::scene::materials::TutorMaterials;
use crate::engine::scene::solutions::update_solution_render;
use crate::engine::scene::voxel::{spawn_voxel, update_edge_highlight};
use crate::engine::voxel::dataset::DatasetTable;
use crate::engine::voxel::topology::CubeTopology;
// Crate tools modules
use crate::tools::annotation::AnnotationToolPlugin;
use crate::tools::annotation::input::annotation_input_system;
use crate::tools::dataset_selection::{
    DatasetSelected, SolutionToggle, apply_dataset_selection, apply_solution_toggles,
    handle_selection_keyboard_shortcuts,
};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers TutorSettings as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<TutorSettings>::new(&["json"]))
        .add_plugins(AnnotationToolPlugin)
        .insert_resource(WinitSettings::desktop_app())
        .insert_resource(ClearColor(palette::BACKGROUND))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        });

    // Initialise resources early
    app.init_resource::<DatasetTable>()
        .init_resource::<TutorMaterials>()
        .init_resource::<OrbitCamera>()
        .init_resource::<SettingsLoader>()
        .init_resource::<ReferenceMeshLoader>()
        .add_event::<CameraInteraction>()
        .add_event::<DatasetSelected>()
        .add_event::<SolutionToggle>();

    app.add_systems(
        Startup,
        (setup, build_solution_library, spawn_voxel, spawn_hud, start_loading),
    )
    .add_systems(
        Update,
        load_settings_system.run_if(in_state(AppState::Loading)),
    )
    .add_systems(OnEnter(AppState::Running), start_reference_mesh_loading);

    // Camera first, then dataset swaps, then pointer input, then visuals, so a
    // swap never interleaves with pointer handling.
    let runtime_systems = (
        orbit_camera_controller,
        handle_selection_keyboard_shortcuts,
        apply_dataset_selection,
        apply_solution_toggles,
        annotation_input_system,
        poll_reference_meshes,
        update_edge_highlight,
        update_annotation_render,
        update_solution_render,
        update_hud_text,
        update_corner_labels,
    )
        .chain();

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    app
}

fn build_solution_library(mut commands: Commands, table: Res<DatasetTable>) {
    commands.insert_resource(SolutionLibrary::build(CubeTopology::standard(), &table));
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.5, 1.0, 0.75).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_camera(commands: &mut Commands, orbit: &OrbitCamera) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(orbit.position()).with_rotation(orbit.rotation()),
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands, orbit: Res<OrbitCamera>) {
    spawn_lighting(&mut commands);
    spawn_camera(&mut commands, &orbit);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
