use bevy::prelude::*;
use constants::cube_frame::CORNER_COUNT;
use constants::palette;
use constants::render_settings::CORNER_LABEL_SPREAD;

use crate::engine::contour::library::{ReferenceMeshSlot, SolutionLibrary};
use crate::engine::voxel::dataset::DatasetTable;
use crate::engine::voxel::topology::CubeTopology;
use crate::tools::annotation::controller::InteractionController;

#[derive(Component)]
pub struct HudText;

/// Screen-space label showing the scalar value of one corner.
#[derive(Component)]
pub struct CornerLabel(pub usize);

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.2, 0.2, 0.2)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        HudText,
    ));

    for corner in 0..CORNER_COUNT {
        commands.spawn((
            Text::new(""),
            TextFont {
                font_size: 20.0,
                ..default()
            },
            TextColor(palette::CORNER_LABEL),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            Visibility::Hidden,
            CornerLabel(corner),
        ));
    }
}

pub fn update_hud_text(
    controller: Res<InteractionController>,
    library: Res<SolutionLibrary>,
    table: Res<DatasetTable>,
    mut hud: Query<&mut Text, With<HudText>>,
) {
    if !controller.is_changed() && !library.is_changed() {
        return;
    }
    let Ok(mut text) = hud.single_mut() else {
        return;
    };

    let active = controller.live_dataset();
    let name = table.get(active).map_or("", |sample| sample.name);
    let live = controller.live();
    let reference = match library.reference_mesh(active) {
        Some(ReferenceMeshSlot::Unavailable) => "unavailable",
        Some(ReferenceMeshSlot::Pending) => "loading",
        _ if library.show_reference => "on",
        _ => "off",
    };

    let content = format!(
        "{name}: {} points, {} lines\n\
         [1-{}] example   [V] contour {}   [H] reference {}   [R] reset view\n\
         Ctrl + click an edge to place a point\n\
         Ctrl + drag between points to connect them\n\
         Ctrl + Shift + click to delete",
        live.points().len(),
        live.lines().len(),
        table.len(),
        if library.show_solution { "on" } else { "off" },
        reference,
    );
    if text.0 != content {
        text.0 = content;
    }
}

/// Keep corner labels next to their corners and showing the active values.
pub fn update_corner_labels(
    controller: Res<InteractionController>,
    table: Res<DatasetTable>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    mut labels: Query<(&CornerLabel, &mut Text, &mut Node, &mut Visibility)>,
) {
    let Ok((cam_xf, camera)) = cameras.single() else {
        return;
    };
    let Some(sample) = table.get(controller.live_dataset()) else {
        return;
    };
    let topology = CubeTopology::standard();

    for (CornerLabel(corner), mut text, mut node, mut visibility) in &mut labels {
        let anchor = topology.corner_position(*corner) * CORNER_LABEL_SPREAD;
        let Ok(screen) = camera.world_to_viewport(cam_xf, anchor) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        let value = format!("{}", sample.value(*corner));
        if text.0 != value {
            text.0 = value;
        }
        let (left, top) = (Val::Px(screen.x), Val::Px(screen.y));
        if node.left != left || node.top != top {
            node.left = left;
            node.top = top;
        }
        if *visibility != Visibility::Inherited {
            *visibility = Visibility::Inherited;
        }
    }
}
