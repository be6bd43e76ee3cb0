//! Permutation feature importance.
//!
//! The booster does not expose gain-based importances, so importance is
//! measured directly: shuffle one feature column at a time and record how
//! much the test-set ROC-AUC degrades.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::dataset::Dataset;
use crate::metrics::roc_auc;
use crate::training::TrainedModel;

/// Normalized per-feature importances over the test partition.
///
/// The result always has one entry per feature name and sums to 1.0
/// (uniform when no feature moves the AUC at all). Shuffles are seeded per
/// column, so a fixed seed reproduces the same vector.
#[must_use]
pub fn permutation_importance(model: &TrainedModel, test: &Dataset, seed: u64) -> Vec<f32> {
    let n_features = test.feature_names.len();
    if test.is_empty() || n_features == 0 {
        return uniform(n_features);
    }

    let labels: Vec<u8> = test.samples.iter().map(|s| s.label).collect();
    let features: Vec<Vec<f32>> = test.samples.iter().map(|s| s.features.clone()).collect();

    let baseline = roc_auc(&labels, &model.predict_proba(&features));

    let mut drops = vec![0.0f64; n_features];
    for feature_idx in 0..n_features {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(feature_idx as u64));

        let mut column: Vec<f32> = features.iter().map(|f| f[feature_idx]).collect();
        column.shuffle(&mut rng);

        let mut permuted = features.clone();
        for (row, &value) in permuted.iter_mut().zip(&column) {
            row[feature_idx] = value;
        }

        let permuted_auc = roc_auc(&labels, &model.predict_proba(&permuted));
        drops[feature_idx] = (baseline - permuted_auc).max(0.0);
    }

    let total: f64 = drops.iter().sum();
    if total <= 0.0 {
        return uniform(n_features);
    }

    drops.iter().map(|&d| (d / total) as f32).collect()
}

fn uniform(n: usize) -> Vec<f32> {
    if n == 0 {
        return Vec::new();
    }
    vec![1.0 / n as f32; n]
}

#[cfg(test)]
mod tests {
    use feature_extractor::TrainingSample;

    use super::*;
    use crate::training::{train, TrainOptions};

    /// Label depends entirely on feature 0; feature 1 is noise.
    fn dataset(n: usize) -> Dataset {
        let samples = (0..n)
            .map(|i| {
                let x = i as f32 / n as f32;
                TrainingSample {
                    features: vec![x, (i % 7) as f32],
                    label: u8::from(x >= 0.5),
                }
            })
            .collect();
        Dataset::new(&["signal", "noise"], samples)
    }

    #[test]
    fn test_importance_length_and_normalization() {
        let data = dataset(200);
        let model = train(&data, &TrainOptions::restaurant()).expect("train");

        let importance = permutation_importance(&model, &data, 42);

        assert_eq!(importance.len(), data.feature_names.len());
        let sum: f32 = importance.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5, "importances must sum to 1, got {sum}");
        assert!(importance.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_signal_feature_dominates() {
        let data = dataset(200);
        let model = train(&data, &TrainOptions::restaurant()).expect("train");

        let importance = permutation_importance(&model, &data, 42);
        assert!(
            importance[0] > importance[1],
            "signal {} should outrank noise {}",
            importance[0],
            importance[1]
        );
    }

    #[test]
    fn test_importance_is_reproducible() {
        let data = dataset(100);
        let model = train(&data, &TrainOptions::restaurant()).expect("train");

        let a = permutation_importance(&model, &data, 42);
        let b = permutation_importance(&model, &data, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_test_set_falls_back_to_uniform() {
        let data = dataset(100);
        let model = train(&data, &TrainOptions::restaurant()).expect("train");

        let empty = Dataset::new(&["signal", "noise"], Vec::new());
        let importance = permutation_importance(&model, &empty, 42);
        assert_eq!(importance, vec![0.5, 0.5]);
    }
}
