use bevy::prelude::*;
use bevy::window::RequestRedraw;

use crate::engine::contour::library::SolutionLibrary;
use crate::engine::voxel::dataset::{DatasetId, DatasetTable};
use crate::tools::annotation::controller::InteractionController;
use crate::tools::annotation::ray::AnalyticRayCaster;

/// Request to make an example live, numbered from one as shown to the user.
#[derive(Event, Debug, Clone, Copy)]
pub struct DatasetSelected {
    pub example_number: usize,
    pub source: SelectionSource,
}

/// Where a selection came from, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    Keyboard,
    Settings,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionToggle {
    Contour,
    Reference,
}

const EXAMPLE_KEYS: [(KeyCode, KeyCode); 9] = [
    (KeyCode::Digit1, KeyCode::Numpad1),
    (KeyCode::Digit2, KeyCode::Numpad2),
    (KeyCode::Digit3, KeyCode::Numpad3),
    (KeyCode::Digit4, KeyCode::Numpad4),
    (KeyCode::Digit5, KeyCode::Numpad5),
    (KeyCode::Digit6, KeyCode::Numpad6),
    (KeyCode::Digit7, KeyCode::Numpad7),
    (KeyCode::Digit8, KeyCode::Numpad8),
    (KeyCode::Digit9, KeyCode::Numpad9),
];

/// Digit keys pick an example, `V` shows the contour, `H` the reference mesh.
pub fn handle_selection_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selections: EventWriter<DatasetSelected>,
    mut toggles: EventWriter<SolutionToggle>,
) {
    for (index, (digit, numpad)) in EXAMPLE_KEYS.iter().enumerate() {
        if keyboard.any_just_pressed([*digit, *numpad]) {
            selections.write(DatasetSelected {
                example_number: index + 1,
                source: SelectionSource::Keyboard,
            });
        }
    }

    if keyboard.just_pressed(KeyCode::KeyV) {
        toggles.write(SolutionToggle::Contour);
    }
    if keyboard.just_pressed(KeyCode::KeyH) {
        toggles.write(SolutionToggle::Reference);
    }
}

/// Swap the live annotations to the selected example. Any drag in progress
/// is cancelled by the controller before the swap.
pub fn apply_dataset_selection(
    mut events: EventReader<DatasetSelected>,
    table: Res<DatasetTable>,
    mut controller: ResMut<InteractionController>,
    caster: Res<AnalyticRayCaster>,
    mut redraw: EventWriter<RequestRedraw>,
) {
    for event in events.read() {
        let Some(id) = DatasetId::from_example_number(event.example_number, table.len()) else {
            warn!(
                "Ignoring selection of example {} via {:?}: only 1 to {} exist",
                event.example_number,
                event.source,
                table.len()
            );
            continue;
        };

        let previous = controller.live_dataset();
        if controller.select_dataset(id, &*caster) {
            let name = table.get(id).map_or("", |sample| sample.name);
            info!("Switched from {previous} to {id} ({name}) via {:?}", event.source);
        }
        redraw.write(RequestRedraw);
    }
}

pub fn apply_solution_toggles(
    mut events: EventReader<SolutionToggle>,
    mut library: ResMut<SolutionLibrary>,
    mut redraw: EventWriter<RequestRedraw>,
) {
    for event in events.read() {
        match event {
            SolutionToggle::Contour => {
                let shown = library.toggle_solution();
                info!("Contour solution {}", if shown { "shown" } else { "hidden" });
            }
            SolutionToggle::Reference => {
                let shown = library.toggle_reference();
                info!("Reference mesh {}", if shown { "shown" } else { "hidden" });
            }
        }
        redraw.write(RequestRedraw);
    }
}
