//! Dataset container and stratified train/test splitting.

use feature_extractor::TrainingSample;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Labeled samples plus the feature names describing each column.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub feature_names: Vec<String>,
    pub samples: Vec<TrainingSample>,
}

impl Dataset {
    /// Creates a dataset from extracted samples.
    #[must_use]
    pub fn new(feature_names: &[&str], samples: Vec<TrainingSample>) -> Self {
        Self {
            feature_names: feature_names.iter().map(ToString::to_string).collect(),
            samples,
        }
    }

    /// Returns the number of samples.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if there are no samples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Fraction of samples with a positive (no-show) label.
    #[must_use]
    pub fn positive_rate(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let positives = self.samples.iter().filter(|s| s.label == 1).count();
        positives as f64 / self.samples.len() as f64
    }
}

/// Train and test partitions of a dataset.
#[derive(Debug, Clone)]
pub struct SplitDataset {
    pub train: Dataset,
    pub test: Dataset,
}

/// Splits samples into train/test partitions, stratified on the label.
///
/// Indices are grouped by class, shuffled with an RNG seeded from `seed`,
/// and `round(class_count × test_fraction)` of each class go to the test
/// partition. The same seed and input always produce the same partitions.
#[must_use]
pub fn stratified_split(dataset: &Dataset, test_fraction: f64, seed: u64) -> SplitDataset {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut train_samples = Vec::new();
    let mut test_samples = Vec::new();

    for class in [0u8, 1u8] {
        let mut indices: Vec<usize> = dataset
            .samples
            .iter()
            .enumerate()
            .filter(|(_, s)| s.label == class)
            .map(|(i, _)| i)
            .collect();

        indices.shuffle(&mut rng);

        let n_test = (indices.len() as f64 * test_fraction).round() as usize;
        // A represented class always keeps at least one training sample
        let n_test = n_test.min(indices.len().saturating_sub(1));

        for (pos, &idx) in indices.iter().enumerate() {
            let sample = dataset.samples[idx].clone();
            if pos < n_test {
                test_samples.push(sample);
            } else {
                train_samples.push(sample);
            }
        }
    }

    SplitDataset {
        train: Dataset {
            feature_names: dataset.feature_names.clone(),
            samples: train_samples,
        },
        test: Dataset {
            feature_names: dataset.feature_names.clone(),
            samples: test_samples,
        },
    }
}
