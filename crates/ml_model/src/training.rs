//! GBDT training wrapper.

use std::path::Path;

use anyhow::Result;
use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;

use crate::dataset::Dataset;

/// Hyperparameters for a training run.
#[derive(Debug, Clone, Copy)]
pub struct TrainOptions {
    pub n_estimators: usize,
    pub max_depth: u32,
    pub learning_rate: f64,
    pub subsample: f64,
    pub colsample_bytree: f64,
    pub seed: u64,
}

impl TrainOptions {
    /// Hyperparameters for the large hotel-proxy dataset.
    #[must_use]
    pub const fn hotel() -> Self {
        Self {
            n_estimators: 100,
            max_depth: 10,
            learning_rate: 0.1,
            subsample: 0.8,
            colsample_bytree: 0.8,
            seed: 42,
        }
    }

    /// Hyperparameters for the small in-house dataset: fewer, shallower
    /// trees to limit overfitting.
    #[must_use]
    pub const fn restaurant() -> Self {
        Self {
            n_estimators: 50,
            max_depth: 5,
            learning_rate: 0.1,
            subsample: 0.8,
            colsample_bytree: 0.8,
            seed: 42,
        }
    }
}

/// A fitted gradient-boosted ensemble.
pub struct TrainedModel {
    gbdt: GBDT,
}

impl TrainedModel {
    /// Positive-class probability for each feature vector.
    #[must_use]
    pub fn predict_proba(&self, features: &[Vec<f32>]) -> Vec<f32> {
        let test_data: DataVec = features
            .iter()
            .map(|f| Data::new_test_data(f.clone(), None))
            .collect();
        self.gbdt.predict(&test_data)
    }

    /// Class predictions at the 0.5 probability threshold.
    #[must_use]
    pub fn predict(&self, features: &[Vec<f32>]) -> Vec<u8> {
        self.predict_proba(features)
            .iter()
            .map(|&p| u8::from(p >= 0.5))
            .collect()
    }

    /// Saves the fitted ensemble to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.gbdt
            .save_model(&path.to_string_lossy())
            .map_err(|e| anyhow::anyhow!("Failed to save model to {}: {e}", path.display()))
    }
}

/// Fits a gradient-boosted classifier on the training partition.
///
/// Binary log-likelihood loss; labels are mapped to ±1 as the booster
/// expects, and predictions come back as positive-class probabilities.
///
/// # Errors
///
/// Returns an error if the training set is empty.
pub fn train(dataset: &Dataset, options: &TrainOptions) -> Result<TrainedModel> {
    if dataset.is_empty() {
        anyhow::bail!("No training samples provided");
    }

    let mut config = Config::new();
    config.set_feature_size(dataset.feature_names.len());
    config.set_max_depth(options.max_depth);
    config.set_iterations(options.n_estimators);
    config.set_shrinkage(options.learning_rate as f32);
    config.set_data_sample_ratio(options.subsample);
    config.set_feature_sample_ratio(options.colsample_bytree);
    config.set_loss("LogLikelyhood");
    config.set_debug(false);
    config.set_training_optimization_level(2);

    let mut training_data: DataVec = dataset
        .samples
        .iter()
        .map(|s| {
            let label = if s.label == 1 { 1.0 } else { -1.0 };
            Data::new_training_data(s.features.clone(), 1.0, label, None)
        })
        .collect();

    let mut gbdt = GBDT::new(&config);
    gbdt.fit(&mut training_data);

    Ok(TrainedModel { gbdt })
}
