//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, runtime settings and
//! plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app, registers the tutor resources and events, and
/// orders the interactive systems.
pub mod app_setup;

/// Loading and running states.
pub mod app_state;

/// Runtime settings read from the assets folder.
pub mod settings;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
