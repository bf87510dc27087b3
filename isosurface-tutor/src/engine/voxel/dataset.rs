use std::fmt;

use bevy::prelude::*;
use constants::cube_frame::CORNER_COUNT;

/// Zero-based position of a sample in the [`DatasetTable`].
///
/// The interface counts examples from one; use [`DatasetId::example_number`]
/// and [`DatasetId::from_example_number`] at that boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatasetId(pub usize);

impl DatasetId {
    pub fn index(self) -> usize {
        self.0
    }

    pub fn example_number(self) -> usize {
        self.0 + 1
    }

    /// Convert a one-based example number, rejecting numbers outside `1..=len`.
    pub fn from_example_number(number: usize, len: usize) -> Option<Self> {
        (1..=len).contains(&number).then(|| Self(number - 1))
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "example {}", self.example_number())
    }
}

/// Eight scalar values, one per cube corner, indexed x + 2y + 4z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarSample {
    pub name: &'static str,
    pub values: [f32; CORNER_COUNT],
}

impl ScalarSample {
    pub const fn new(name: &'static str, values: [f32; CORNER_COUNT]) -> Self {
        Self { name, values }
    }

    pub fn value(&self, corner: usize) -> f32 {
        self.values[corner]
    }
}

const BUILTIN_SAMPLES: [ScalarSample; 9] = [
    ScalarSample::new("Example 1", [3.0, 2.0, 2.0, -2.0, -1.0, 3.0, 1.0, 2.0]),
    ScalarSample::new("Example 2", [3.0, 2.0, 3.0, 2.0, -2.0, -1.0, 2.0, -1.0]),
    ScalarSample::new("Example 3", [-3.0, 4.0, 1.0, -2.0, -2.0, -2.0, 2.0, 2.0]),
    ScalarSample::new("Example 4", [3.0, 2.0, -2.0, 1.0, 2.0, 2.0, 1.0, -2.0]),
    ScalarSample::new("Example 5", [3.0, 2.0, -1.0, 2.0, 2.0, 2.0, 2.0, -1.0]),
    ScalarSample::new("Example 6", [1.0, -2.0, -2.0, 1.0, -2.0, 1.0, 1.0, -2.0]),
    ScalarSample::new("Example 7", [6.0, -2.0, -2.0, 1.0, -2.0, 6.0, 1.0, -2.0]),
    ScalarSample::new("Example 8", [4.0, -2.0, -2.0, 1.0, -1.0, 2.0, 1.0, -2.0]),
    ScalarSample::new("Example 9", [3.0, -4.0, -2.0, 1.0, 2.0, 2.0, 1.0, -2.0]),
];

/// Ordered, immutable collection of the teaching examples.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DatasetTable {
    samples: Vec<ScalarSample>,
}

impl Default for DatasetTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DatasetTable {
    pub fn new(samples: Vec<ScalarSample>) -> Self {
        Self { samples }
    }

    /// The nine examples the tutor ships with.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_SAMPLES.to_vec())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, id: DatasetId) -> Option<&ScalarSample> {
        self.samples.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (DatasetId, &ScalarSample)> {
        self.samples
            .iter()
            .enumerate()
            .map(|(index, sample)| (DatasetId(index), sample))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_numbers_are_one_based() {
        assert_eq!(DatasetId::from_example_number(1, 9), Some(DatasetId(0)));
        assert_eq!(DatasetId::from_example_number(9, 9), Some(DatasetId(8)));
        assert_eq!(DatasetId::from_example_number(0, 9), None);
        assert_eq!(DatasetId::from_example_number(10, 9), None);
        assert_eq!(DatasetId(4).example_number(), 5);
        assert_eq!(DatasetId(4).to_string(), "example 5");
    }

    #[test]
    fn builtin_table_holds_nine_examples() {
        let table = DatasetTable::builtin();
        assert_eq!(table.len(), 9);
        assert_eq!(
            table.get(DatasetId(0)).map(|s| s.values),
            Some([3.0, 2.0, 2.0, -2.0, -1.0, 3.0, 1.0, 2.0])
        );
        assert!(table.get(DatasetId(9)).is_none());
        let ids: Vec<_> = table.iter().map(|(id, _)| id.index()).collect();
        assert_eq!(ids, (0..9).collect::<Vec<_>>());
    }
}
