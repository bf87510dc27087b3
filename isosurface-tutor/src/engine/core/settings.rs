use bevy::prelude::*;
use serde::Deserialize;

use crate::engine::voxel::dataset::DatasetId;

pub const SETTINGS_PATH: &str = "settings.json";

/// Runtime options read from `assets/settings.json`. Every field is
/// optional in the file.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TutorSettings {
    /// One-based example shown at startup.
    pub initial_example: usize,
    pub show_solution: bool,
    pub show_reference: bool,
    /// Asset path of the reference meshes; `{index}` becomes the two digit
    /// example number.
    pub reference_mesh_template: String,
}

impl Default for TutorSettings {
    fn default() -> Self {
        Self {
            initial_example: 1,
            show_solution: false,
            show_reference: false,
            reference_mesh_template: "cubes/cube_{index}.glb".to_string(),
        }
    }
}

impl TutorSettings {
    pub fn reference_mesh_path(&self, id: DatasetId) -> String {
        self.reference_mesh_template
            .replace("{index}", &format!("{:02}", id.example_number()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: TutorSettings =
            serde_json::from_str(r#"{ "initial_example": 4, "show_solution": true }"#).unwrap();
        assert_eq!(settings.initial_example, 4);
        assert!(settings.show_solution);
        assert!(!settings.show_reference);
        assert_eq!(settings.reference_mesh_template, "cubes/cube_{index}.glb");
    }

    #[test]
    fn reference_paths_use_two_digit_example_numbers() {
        let settings = TutorSettings::default();
        assert_eq!(settings.reference_mesh_path(DatasetId(0)), "cubes/cube_01.glb");
        assert_eq!(settings.reference_mesh_path(DatasetId(8)), "cubes/cube_09.glb");

        let custom = TutorSettings {
            reference_mesh_template: "meshes/{index}/surface.gltf".to_string(),
            ..default()
        };
        assert_eq!(custom.reference_mesh_path(DatasetId(10)), "meshes/11/surface.gltf");
    }
}
