//! Exported model artifacts.
//!
//! Two consumers exist: a JSON metadata file read by humans and tooling,
//! and a JavaScript module (`module.exports = {...}`) imported directly by
//! the Node scoring server.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::training::TrainOptions;

/// Serialized bundle describing a training run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelExport {
    #[serde(rename = "type")]
    pub model_type: String,
    pub version: String,
    pub trained_at: String,
    pub training_dataset: DatasetInfo,
    pub feature_names: Vec<String>,
    pub feature_importance: Vec<f32>,
    pub config: BoosterParams,
    pub performance: Performance,
    pub model: ModelSection,
    pub notes: String,
}

/// Provenance of the training data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInfo {
    pub name: String,
    pub samples: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_show_rate: Option<f64>,
}

/// Booster hyperparameters as recorded in the export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoosterParams {
    pub n_estimators: usize,
    pub max_depth: u32,
    pub learning_rate: f64,
    pub subsample: f64,
    pub colsample_bytree: f64,
    pub seed: u64,
}

impl From<&TrainOptions> for BoosterParams {
    fn from(options: &TrainOptions) -> Self {
        Self {
            n_estimators: options.n_estimators,
            max_depth: options.max_depth,
            learning_rate: options.learning_rate,
            subsample: options.subsample,
            colsample_bytree: options.colsample_bytree,
            seed: options.seed,
        }
    }
}

/// Held-out performance of the run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub roc_auc: f64,
    pub train_size: usize,
    pub test_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_show_rate: Option<f64>,
}

/// The model payload itself. The full ensemble is saved separately; the
/// export carries the importance vector the server uses for explanations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSection {
    pub feature_importance: Vec<f32>,
}

/// Writes the metadata bundle as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_metadata_json(path: &Path, export: &ModelExport) -> Result<()> {
    let json =
        serde_json::to_string_pretty(export).context("Failed to serialize model metadata")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Writes the bundle as a Node-importable JavaScript module.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_js_module(path: &Path, export: &ModelExport) -> Result<()> {
    let json =
        serde_json::to_string_pretty(export).context("Failed to serialize model export")?;

    let trained_date = export
        .trained_at
        .split('T')
        .next()
        .unwrap_or(&export.trained_at);

    let module = format!(
        "/**\n\
         \x20* ML Model Data - CUSTOM RESTAURANT MODEL v{version}\n\
         \x20*\n\
         \x20* Trained on this restaurant's actual reservation outcomes.\n\
         \x20*\n\
         \x20* Training Date: {trained_date}\n\
         \x20* Training Samples: {samples}\n\
         \x20* No-Show Rate: {no_show_rate:.1}%\n\
         \x20* Model Performance: {auc:.1}% AUC\n\
         \x20*/\n\
         \n\
         module.exports = {json};\n",
        version = export.version,
        samples = export.training_dataset.samples,
        no_show_rate = export.training_dataset.no_show_rate.unwrap_or(0.0) * 100.0,
        auc = export.performance.roc_auc * 100.0,
    );

    std::fs::write(path, module)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_export() -> ModelExport {
        ModelExport {
            model_type: "gbdt_custom".to_string(),
            version: "3.0.0".to_string(),
            trained_at: "2025-10-25T18:30:00+00:00".to_string(),
            training_dataset: DatasetInfo {
                name: "Your Restaurant Data".to_string(),
                samples: 120,
                features: None,
                cancellation_rate: None,
                no_show_rate: Some(0.25),
            },
            feature_names: vec!["party_size".to_string()],
            feature_importance: vec![1.0],
            config: BoosterParams::from(&TrainOptions::restaurant()),
            performance: Performance {
                roc_auc: 0.87,
                train_size: 102,
                test_size: 18,
                no_show_rate: Some(0.25),
            },
            model: ModelSection {
                feature_importance: vec![1.0],
            },
            notes: "test".to_string(),
        }
    }

    #[test]
    fn test_camel_case_keys() {
        let json = serde_json::to_value(sample_export()).expect("serialize");

        assert_eq!(json["type"], "gbdt_custom");
        assert!(json.get("trainedAt").is_some());
        assert!(json.get("featureNames").is_some());
        assert_eq!(json["config"]["nEstimators"], 50);
        assert_eq!(json["config"]["colsampleBytree"], 0.8);
        assert_eq!(json["performance"]["rocAuc"], 0.87);
        assert_eq!(json["performance"]["trainSize"], 102);
        assert_eq!(json["trainingDataset"]["noShowRate"], 0.25);
        // Hotel-only fields are omitted, not null
        assert!(json["trainingDataset"].get("cancellationRate").is_none());
    }

    #[test]
    fn test_sample_counts_recorded() {
        let export = sample_export();
        assert_eq!(
            export.performance.train_size + export.performance.test_size,
            export.training_dataset.samples
        );
    }

    #[test]
    fn test_js_module_shape() {
        let path = std::env::temp_dir().join("ml_model_test_model_data.js");
        write_js_module(&path, &sample_export()).expect("write");

        let content = std::fs::read_to_string(&path).expect("read back");
        assert!(content.starts_with("/**"));
        assert!(content.contains("Training Date: 2025-10-25"));
        assert!(content.contains("No-Show Rate: 25.0%"));
        assert!(content.contains("module.exports = {"));
        assert!(content.trim_end().ends_with("};"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_metadata_json_roundtrip() {
        let path = std::env::temp_dir().join("ml_model_test_metadata.json");
        write_metadata_json(&path, &sample_export()).expect("write");

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read back"))
                .expect("valid json");
        assert_eq!(value["version"], "3.0.0");

        std::fs::remove_file(&path).ok();
    }
}
