//! Binary classification metrics.

/// Precision/recall/F1 for a single class.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Evaluation summary over a test partition.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Confusion matrix: `confusion[actual][predicted]`.
    pub confusion: [[usize; 2]; 2],
    pub negative: ClassMetrics,
    pub positive: ClassMetrics,
    pub accuracy: f64,
    pub roc_auc: f64,
}

/// Computes the full evaluation from labels and predicted probabilities.
///
/// Class predictions use the 0.5 threshold.
#[must_use]
pub fn evaluate(labels: &[u8], probabilities: &[f32]) -> Evaluation {
    let mut confusion = [[0usize; 2]; 2];
    for (&label, &prob) in labels.iter().zip(probabilities) {
        let predicted = usize::from(prob >= 0.5);
        confusion[usize::from(label)][predicted] += 1;
    }

    let negative = class_metrics(&confusion, 0);
    let positive = class_metrics(&confusion, 1);

    let total = labels.len();
    let accuracy = if total == 0 {
        0.0
    } else {
        (confusion[0][0] + confusion[1][1]) as f64 / total as f64
    };

    Evaluation {
        confusion,
        negative,
        positive,
        accuracy,
        roc_auc: roc_auc(labels, probabilities),
    }
}

fn class_metrics(confusion: &[[usize; 2]; 2], class: usize) -> ClassMetrics {
    let tp = confusion[class][class];
    let fp = confusion[1 - class][class];
    let missed = confusion[class][1 - class];

    let support = tp + missed;
    let precision = safe_ratio(tp, tp + fp);
    let recall = safe_ratio(tp, support);
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    ClassMetrics {
        precision,
        recall,
        f1,
        support,
    }
}

fn safe_ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Area under the ROC curve via the rank-sum formulation, with tied
/// scores receiving their average rank.
///
/// Returns 0.5 when only one class is present (no curve to integrate).
#[must_use]
pub fn roc_auc(labels: &[u8], probabilities: &[f32]) -> f64 {
    let n = labels.len();
    let n_pos = labels.iter().filter(|&&l| l == 1).count();
    let n_neg = n - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return 0.5;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        probabilities[a]
            .partial_cmp(&probabilities[b])
            .unwrap_or(core::cmp::Ordering::Equal)
    });

    // Average ranks across tie groups (1-based ranks)
    let mut ranks = vec![0.0f64; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && probabilities[order[j + 1]] == probabilities[order[i]] {
            j += 1;
        }
        let avg_rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = avg_rank;
        }
        i = j + 1;
    }

    let pos_rank_sum: f64 = labels
        .iter()
        .zip(&ranks)
        .filter(|(&l, _)| l == 1)
        .map(|(_, &r)| r)
        .sum();

    let n_pos_f = n_pos as f64;
    (pos_rank_sum - n_pos_f * (n_pos_f + 1.0) / 2.0) / (n_pos_f * n_neg as f64)
}

/// Renders an sklearn-style classification report.
#[must_use]
pub fn classification_report(
    evaluation: &Evaluation,
    negative_name: &str,
    positive_name: &str,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>15}  {:>9} {:>9} {:>9} {:>9}\n\n",
        "", "precision", "recall", "f1-score", "support"
    ));

    for (name, metrics) in [
        (negative_name, &evaluation.negative),
        (positive_name, &evaluation.positive),
    ] {
        out.push_str(&format!(
            "{:>15}  {:>9.2} {:>9.2} {:>9.2} {:>9}\n",
            name, metrics.precision, metrics.recall, metrics.f1, metrics.support
        ));
    }

    let total = evaluation.negative.support + evaluation.positive.support;
    out.push_str(&format!(
        "\n{:>15}  {:>9} {:>9} {:>9.2} {:>9}\n",
        "accuracy", "", "", evaluation.accuracy, total
    ));

    out
}
