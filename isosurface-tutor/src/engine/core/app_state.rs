use bevy::prelude::*;

/// `Loading` waits for the settings file; interactive systems only run in
/// `Running`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}
