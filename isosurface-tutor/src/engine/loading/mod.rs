//! Asset loading: the settings file first, then the optional reference
//! meshes once the app is running.

/// Settings file loading and the transition to `AppState::Running`.
pub mod settings_loader;

/// glTF reference mesh loading, reported back to the solution library.
pub mod reference_meshes;
