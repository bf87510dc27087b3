use bevy::prelude::*;

use super::extraction::{ContourError, ContourSolution, extract_all};
use crate::engine::voxel::dataset::{DatasetId, DatasetTable};
use crate::engine::voxel::topology::CubeTopology;

/// Load progress of the optional high resolution mesh for one dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ReferenceMeshSlot {
    #[default]
    Pending,
    Ready(Handle<Mesh>),
    Unavailable,
}

/// Every dataset's contour plus the gating that decides what is shown.
///
/// At most one solution and one reference mesh are visible at a time: the
/// ones of the active dataset, and only while their global flag is on.
#[derive(Resource, Debug)]
pub struct SolutionLibrary {
    solutions: Vec<Result<ContourSolution, ContourError>>,
    reference_meshes: Vec<ReferenceMeshSlot>,
    pub show_solution: bool,
    pub show_reference: bool,
}

impl SolutionLibrary {
    /// Extract all datasets; failures are logged and kept so the rest of the
    /// tutor keeps working.
    pub fn build(topology: &CubeTopology, table: &DatasetTable) -> Self {
        let solutions = extract_all(topology, table);
        for result in &solutions {
            match result {
                Ok(solution) => debug!(
                    "{}: {} crossings, {} segments",
                    solution.dataset,
                    solution.points.len(),
                    solution.segments.len()
                ),
                Err(err) => error!("Contour extraction failed: {err}"),
            }
        }

        Self {
            reference_meshes: vec![ReferenceMeshSlot::Pending; solutions.len()],
            solutions,
            show_solution: false,
            show_reference: false,
        }
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn solution(&self, id: DatasetId) -> Option<&Result<ContourSolution, ContourError>> {
        self.solutions.get(id.index())
    }

    pub fn visible_solution(&self, active: DatasetId) -> Option<&ContourSolution> {
        if !self.show_solution {
            return None;
        }
        self.solutions.get(active.index())?.as_ref().ok()
    }

    pub fn reference_mesh(&self, id: DatasetId) -> Option<&ReferenceMeshSlot> {
        self.reference_meshes.get(id.index())
    }

    pub fn on_reference_mesh_ready(&mut self, id: DatasetId, handle: Handle<Mesh>) {
        if let Some(slot) = self.reference_meshes.get_mut(id.index()) {
            *slot = ReferenceMeshSlot::Ready(handle);
        }
    }

    pub fn on_reference_mesh_failed(&mut self, id: DatasetId) {
        if let Some(slot) = self.reference_meshes.get_mut(id.index()) {
            *slot = ReferenceMeshSlot::Unavailable;
        }
    }

    pub fn visible_reference(&self, active: DatasetId) -> Option<&Handle<Mesh>> {
        if !self.show_reference {
            return None;
        }
        match self.reference_meshes.get(active.index())? {
            ReferenceMeshSlot::Ready(handle) => Some(handle),
            _ => None,
        }
    }

    /// Returns the new flag value.
    pub fn toggle_solution(&mut self) -> bool {
        self.show_solution = !self.show_solution;
        self.show_solution
    }

    pub fn toggle_reference(&mut self) -> bool {
        self.show_reference = !self.show_reference;
        self.show_reference
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::voxel::dataset::ScalarSample;

    fn library() -> SolutionLibrary {
        SolutionLibrary::build(CubeTopology::standard(), &DatasetTable::builtin())
    }

    #[test]
    fn builtin_datasets_all_extract() {
        let library = library();
        assert_eq!(library.len(), 9);
        for index in 0..9 {
            let solution = library.solution(DatasetId(index)).unwrap().as_ref().unwrap();
            assert_eq!(solution.dataset, DatasetId(index));
            assert!(!solution.points.is_empty());
        }
    }

    #[test]
    fn solution_visibility_follows_flag_and_active_dataset() {
        let mut library = library();
        assert!(library.visible_solution(DatasetId(0)).is_none());

        assert!(library.toggle_solution());
        assert_eq!(
            library.visible_solution(DatasetId(4)).map(|s| s.dataset),
            Some(DatasetId(4))
        );
        assert!(library.visible_solution(DatasetId(20)).is_none());

        assert!(!library.toggle_solution());
        assert!(library.visible_solution(DatasetId(4)).is_none());
    }

    #[test]
    fn failed_extraction_is_never_visible() {
        let mut values = [1.0; 8];
        values[0] = f32::INFINITY;
        let table = DatasetTable::new(vec![ScalarSample::new("broken", values)]);
        let mut library = SolutionLibrary::build(CubeTopology::standard(), &table);
        library.toggle_solution();
        assert!(library.solution(DatasetId(0)).unwrap().is_err());
        assert!(library.visible_solution(DatasetId(0)).is_none());
    }

    #[test]
    fn reference_mesh_is_gated_like_solutions() {
        let mut library = library();
        let handle = Handle::<Mesh>::default();
        library.on_reference_mesh_ready(DatasetId(1), handle.clone());
        library.on_reference_mesh_failed(DatasetId(2));

        assert!(library.visible_reference(DatasetId(1)).is_none());
        library.toggle_reference();
        assert_eq!(library.visible_reference(DatasetId(1)), Some(&handle));
        assert!(library.visible_reference(DatasetId(0)).is_none());
        assert!(library.visible_reference(DatasetId(2)).is_none());
        assert_eq!(
            library.reference_mesh(DatasetId(2)),
            Some(&ReferenceMeshSlot::Unavailable)
        );
        assert_eq!(
            library.reference_mesh(DatasetId(0)),
            Some(&ReferenceMeshSlot::Pending)
        );
    }
}
