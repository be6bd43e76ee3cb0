//! Gradient-boosted no-show classifier: dataset handling, training,
//! evaluation and export.
//!
//! The model itself is a GBDT ensemble; this crate owns everything around
//! it: the seeded stratified train/test split, classification metrics,
//! permutation feature importance and the artifacts consumed by the
//! serving runtime.

mod dataset;
mod export;
mod importance;
mod metrics;
mod training;

pub use dataset::{stratified_split, Dataset, SplitDataset};
pub use export::{
    write_js_module, write_metadata_json, BoosterParams, DatasetInfo, ModelExport, ModelSection,
    Performance,
};
pub use importance::permutation_importance;
pub use metrics::{classification_report, evaluate, roc_auc, ClassMetrics, Evaluation};
pub use training::{train, TrainOptions, TrainedModel};
