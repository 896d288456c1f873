//! Input datasets and their generation
//!
//! Each visualizer has an [`InputProfile`]: the size limits, the value range
//! random data is drawn from, and the fixed dataset shown on startup.
//! [`DatasetGenerator`] wraps a seedable RNG so runs can be reproduced with
//! `--seed`.

use crate::constants::*;
use crate::registry::Visualizer;
use crate::step::Value;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Size and value limits of one visualizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputProfile {
    pub min_size: usize,
    pub max_size: usize,
    pub default_size: usize,
    /// Inclusive range random values are drawn from
    pub values: (Value, Value),
    pub initial: &'static [Value],
}

impl InputProfile {
    pub fn for_visualizer(visualizer: Visualizer) -> InputProfile {
        match visualizer {
            Visualizer::Bars => InputProfile {
                min_size: BARS_MIN_SIZE,
                max_size: BARS_MAX_SIZE,
                default_size: BARS_DEFAULT_SIZE,
                values: BARS_VALUE_RANGE,
                initial: &BARS_INITIAL,
            },
            Visualizer::Blocks => InputProfile {
                min_size: BLOCKS_MIN_SIZE,
                max_size: BLOCKS_MAX_SIZE,
                default_size: BLOCKS_DEFAULT_SIZE,
                values: BLOCKS_VALUE_RANGE,
                initial: &BLOCKS_INITIAL,
            },
            Visualizer::Tree => InputProfile {
                min_size: TREE_MIN_SIZE,
                max_size: TREE_MAX_SIZE,
                default_size: TREE_DEFAULT_SIZE,
                values: TREE_VALUE_RANGE,
                initial: &TREE_INITIAL,
            },
        }
    }

    pub fn clamp_size(&self, size: usize) -> usize {
        size.clamp(self.min_size, self.max_size)
    }
}

/// Input of one run: the values and, for searches, the target
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    pub values: Vec<Value>,
    pub target: Option<Value>,
}

impl Dataset {
    pub fn new(values: Vec<Value>) -> Self {
        Dataset { values, target: None }
    }

    pub fn with_target(mut self, target: Value) -> Self {
        self.target = Some(target);
        self
    }

    /// Startup dataset of a visualizer
    pub fn initial(visualizer: Visualizer) -> Self {
        let profile = InputProfile::for_visualizer(visualizer);
        let dataset = Dataset::new(profile.initial.to_vec());
        match visualizer {
            Visualizer::Blocks => dataset.with_target(BLOCKS_INITIAL_TARGET),
            _ => dataset,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Random datasets and targets
pub struct DatasetGenerator {
    rng: StdRng,
}

impl DatasetGenerator {
    /// Seeded generators repeat the same sequence of datasets
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        DatasetGenerator { rng }
    }

    pub fn values(&mut self, profile: &InputProfile, size: usize) -> Vec<Value> {
        let (lo, hi) = profile.values;
        (0..profile.clamp_size(size))
            .map(|_| self.rng.random_range(lo..=hi))
            .collect()
    }

    /// A target picked from `values`, so a fresh search always succeeds
    pub fn target(&mut self, values: &[Value]) -> Option<Value> {
        values.choose(&mut self.rng).copied()
    }

    /// New random dataset for a visualizer; blocks get a target from the data
    pub fn dataset(&mut self, visualizer: Visualizer, size: usize) -> Dataset {
        let profile = InputProfile::for_visualizer(visualizer);
        let values = self.values(&profile, size);
        let target = match visualizer {
            Visualizer::Blocks => self.target(&values),
            _ => None,
        };
        Dataset { values, target }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_datasets_match_default_sizes() {
        for visualizer in [Visualizer::Bars, Visualizer::Blocks, Visualizer::Tree] {
            let profile = InputProfile::for_visualizer(visualizer);
            assert_eq!(Dataset::initial(visualizer).len(), profile.default_size);
        }
    }

    #[test]
    fn test_initial_search_target_is_present() {
        let dataset = Dataset::initial(Visualizer::Blocks);
        let target = dataset.target.unwrap();
        assert!(dataset.values.contains(&target));
    }

    #[test]
    fn test_values_respect_profile() {
        let mut generator = DatasetGenerator::new(Some(7));
        let profile = InputProfile::for_visualizer(Visualizer::Tree);
        let values = generator.values(&profile, 100);

        assert_eq!(values.len(), profile.max_size);
        assert!(values.iter().all(|v| (1..=50).contains(v)));
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let a = DatasetGenerator::new(Some(42)).dataset(Visualizer::Blocks, 10);
        let b = DatasetGenerator::new(Some(42)).dataset(Visualizer::Blocks, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_target_comes_from_values() {
        let mut generator = DatasetGenerator::new(Some(3));
        let dataset = generator.dataset(Visualizer::Blocks, 8);
        assert!(dataset.values.contains(&dataset.target.unwrap()));
        assert_eq!(generator.target(&[]), None);
    }
}
