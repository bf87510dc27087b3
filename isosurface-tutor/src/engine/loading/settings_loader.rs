use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::contour::library::SolutionLibrary;
use crate::engine::core::app_state::AppState;
use crate::engine::core::settings::{SETTINGS_PATH, TutorSettings};
use crate::tools::dataset_selection::{DatasetSelected, SelectionSource};

#[derive(Resource, Default)]
pub struct SettingsLoader {
    handle: Option<Handle<TutorSettings>>,
}

pub fn start_loading(mut settings_loader: ResMut<SettingsLoader>, asset_server: Res<AssetServer>) {
    settings_loader.handle = Some(asset_server.load(SETTINGS_PATH));
}

/// Wait for the settings file, apply it and enter `Running`. A missing or
/// malformed file falls back to the defaults.
pub fn load_settings_system(
    settings_loader: Res<SettingsLoader>,
    asset_server: Res<AssetServer>,
    settings_assets: Res<Assets<TutorSettings>>,
    mut library: ResMut<SolutionLibrary>,
    mut selections: EventWriter<DatasetSelected>,
    mut next_state: ResMut<NextState<AppState>>,
    mut commands: Commands,
) {
    let Some(handle) = settings_loader.handle.as_ref() else {
        return;
    };

    let settings = if let Some(settings) = settings_assets.get(handle) {
        info!("Settings loaded from {SETTINGS_PATH}");
        settings.clone()
    } else {
        match asset_server.get_load_state(handle) {
            Some(LoadState::Failed(err)) => {
                warn!("Could not load {SETTINGS_PATH} ({err}), using defaults");
                TutorSettings::default()
            }
            _ => return,
        }
    };

    library.show_solution = settings.show_solution;
    library.show_reference = settings.show_reference;
    selections.write(DatasetSelected {
        example_number: settings.initial_example,
        source: SelectionSource::Settings,
    });
    commands.insert_resource(settings);

    next_state.set(AppState::Running);
}
