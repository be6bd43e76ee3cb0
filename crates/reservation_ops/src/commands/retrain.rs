//! Retrain command - fits a custom model on the restaurant's own logged
//! reservation outcomes.

use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use feature_extractor::{
    extract_restaurant_samples, load_restaurant_csv, RESTAURANT_FEATURE_NAMES,
};
use ml_model::{
    classification_report, evaluate, permutation_importance, stratified_split, train,
    write_js_module, BoosterParams, Dataset, DatasetInfo, ModelExport, ModelSection, Performance,
    TrainOptions,
};
use tracing::info;

/// Below this many completed reservations, training needs confirmation.
const RECOMMENDED_MIN_SAMPLES: usize = 100;
const CONFIRMATION_THRESHOLD: usize = 50;

/// Runs the retrain command.
///
/// # Errors
///
/// Returns an error if the input CSV is missing, no completed outcomes
/// exist, or training fails. Declining the small-sample prompt is a clean
/// exit, not an error.
pub fn run(input: &Path, output: &Path, skip_confirmation: bool) -> Result<()> {
    println!("{}", "=".repeat(80));
    println!("CUSTOM RESTAURANT MODEL TRAINING");
    println!("Retraining on YOUR actual reservation data");
    println!("{}", "=".repeat(80));

    // 1. Load logged reservations
    println!("\nLoading your restaurant training data...");
    let rows = load_restaurant_csv(input).with_context(|| {
        format!(
            "{} not found! This file is created automatically as customers make \
             reservations. You need at least {RECOMMENDED_MIN_SAMPLES} completed \
             reservations to retrain.",
            input.display()
        )
    })?;

    println!("   Total reservations logged: {}", rows.len());

    let extraction = extract_restaurant_samples(&rows);
    let counts = extraction.counts;

    println!(
        "   Completed reservations (with outcomes): {}",
        counts.completed()
    );
    println!("   - Showed up: {}", counts.showed_up);
    println!("   - No-shows: {}", counts.no_show);
    println!("   - Cancelled: {}", counts.cancelled);

    if counts.completed() == 0 {
        anyhow::bail!("No completed reservations to train on. Collect outcomes first.");
    }

    // 2. Small-sample gate
    if counts.completed() < CONFIRMATION_THRESHOLD && !skip_confirmation {
        println!(
            "\nWARNING: Only {} completed reservations!",
            counts.completed()
        );
        println!("Recommended minimum: {RECOMMENDED_MIN_SAMPLES} samples for reliable training");
        println!(
            "You need {} more completed reservations.",
            RECOMMENDED_MIN_SAMPLES - counts.completed()
        );

        if !confirm("\nContinue anyway? (yes/no): ")? {
            println!("Training cancelled. Collect more data and try again!");
            return Ok(());
        }
    }

    // 3. Prepare features
    println!("\nPreparing features...");
    let no_show_rate = extraction.no_show_rate();
    let dataset = Dataset::new(&RESTAURANT_FEATURE_NAMES, extraction.samples);

    println!(
        "   YOUR no-show rate: {:.1}% ({} / {})",
        no_show_rate * 100.0,
        dataset.samples.iter().filter(|s| s.label == 1).count(),
        dataset.len()
    );
    println!("   Features: {}", dataset.feature_names.len());
    println!("   Samples: {}", dataset.len());

    // 4. Train/test split (smaller held-out share for small datasets)
    println!("\nSplitting dataset...");
    let options = TrainOptions::restaurant();
    let test_fraction = if dataset.len() > 100 { 0.2 } else { 0.15 };
    let split = stratified_split(&dataset, test_fraction, options.seed);

    println!(
        "   Training: {} samples ({:.1}% no-show rate)",
        split.train.len(),
        split.train.positive_rate() * 100.0
    );
    println!(
        "   Testing: {} samples ({:.1}% no-show rate)",
        split.test.len(),
        split.test.positive_rate() * 100.0
    );

    // 5. Train
    println!("\nTraining YOUR custom model...");
    let model = train(&split.train, &options)?;
    println!("   Model trained successfully!");

    // 6. Evaluate
    println!("\nEvaluating YOUR model...");
    let test_features: Vec<Vec<f32>> = split
        .test
        .samples
        .iter()
        .map(|s| s.features.clone())
        .collect();
    let test_labels: Vec<u8> = split.test.samples.iter().map(|s| s.label).collect();
    let evaluation = evaluate(&test_labels, &model.predict_proba(&test_features));

    println!("\n{}", "=".repeat(80));
    println!("CLASSIFICATION REPORT:");
    println!("{}", "=".repeat(80));
    println!(
        "{}",
        classification_report(&evaluation, "Showed Up", "No-Show")
    );
    println!("\nROC-AUC Score: {:.4}", evaluation.roc_auc);

    let importance = permutation_importance(&model, &split.test, options.seed);
    let mut ranked: Vec<(&str, f32)> = RESTAURANT_FEATURE_NAMES
        .iter()
        .copied()
        .zip(importance.iter().copied())
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(core::cmp::Ordering::Equal));

    println!("\n{}", "=".repeat(80));
    println!("YOUR TOP PREDICTORS:");
    println!("{}", "=".repeat(80));
    for (name, value) in &ranked {
        println!("{name:>30}  {value:.4}");
    }

    // 7. Export the Node-importable module
    println!("\nExporting YOUR custom model...");
    let export = ModelExport {
        model_type: "gbdt_custom".to_string(),
        version: "3.0.0".to_string(),
        trained_at: chrono::Local::now().to_rfc3339(),
        training_dataset: DatasetInfo {
            name: "Your Restaurant Data".to_string(),
            samples: dataset.len(),
            features: None,
            cancellation_rate: None,
            no_show_rate: Some(no_show_rate),
        },
        feature_names: dataset.feature_names.clone(),
        feature_importance: importance.clone(),
        config: BoosterParams::from(&options),
        performance: Performance {
            roc_auc: evaluation.roc_auc,
            train_size: split.train.len(),
            test_size: split.test.len(),
            no_show_rate: Some(no_show_rate),
        },
        model: ModelSection {
            feature_importance: importance,
        },
        notes: format!(
            "Custom model trained on {} reservations from YOUR restaurant. \
             Achieves {:.1}% AUC on your specific customer base.",
            dataset.len(),
            evaluation.roc_auc * 100.0
        ),
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    write_js_module(output, &export)?;
    println!("   Custom model saved to: {}", output.display());

    let model_path = Path::new("no_show_model_v3_custom.model");
    model.save(model_path)?;
    println!("   Full ensemble saved to: {}", model_path.display());

    info!(output = %output.display(), "Custom model exported");

    println!("\n{}", "=".repeat(80));
    println!("CUSTOM MODEL TRAINING COMPLETE!");
    println!("{}", "=".repeat(80));
    println!("Model Version: 3.0.0 (CUSTOM)");
    println!("Training Samples: {} YOUR reservations", dataset.len());
    println!("ROC-AUC Score: {:.4}", evaluation.roc_auc);
    println!("Your No-Show Rate: {:.1}%", no_show_rate * 100.0);
    println!("Top Predictor: {}", ranked.first().map_or("N/A", |(n, _)| n));
    println!("{}", "=".repeat(80));
    println!("\nYour custom model is now LIVE!");
    println!("Restart your server to use it.");
    println!("{}", "=".repeat(80));

    Ok(())
}

/// Prompts on stdout and reads one line from stdin; true iff "yes".
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}
