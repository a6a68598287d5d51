//! Multinomial Naive Bayes over TF-IDF rows.

use serde::Serialize;

use crate::error::{NluError, Result};

/// The classifier's answer for one utterance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub intent: String,
    /// Posterior probability of `intent`, in `[0, 1]`.
    pub confidence: f64,
}

#[derive(Debug, Clone)]
pub struct NaiveBayes {
    labels: Vec<String>,
    class_log_prior: Vec<f64>,
    /// `[class][feature]` smoothed log probabilities.
    feature_log_prob: Vec<Vec<f64>>,
}

impl NaiveBayes {
    /// Fit on `(row, class index)` pairs.
    ///
    /// `labels` fixes the class order; ties at prediction time go to the
    /// earliest label. Every label must have at least one example.
    pub fn fit(labels: Vec<String>, rows: &[(Vec<f64>, usize)], alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(NluError::Config(format!(
                "smoothing must be a positive number, got {alpha}"
            )));
        }
        if labels.is_empty() {
            return Err(NluError::EmptyTaxonomy);
        }

        let dimension = rows.first().map(|(row, _)| row.len()).unwrap_or(0);
        let mut class_counts = vec![0usize; labels.len()];
        let mut feature_counts = vec![vec![0.0; dimension]; labels.len()];

        for (row, class) in rows {
            let Some(counts) = feature_counts.get_mut(*class) else {
                return Err(NluError::Config(format!("class index {class} out of range")));
            };
            class_counts[*class] += 1;
            for (acc, value) in counts.iter_mut().zip(row) {
                *acc += value;
            }
        }

        if let Some(index) = class_counts.iter().position(|c| *c == 0) {
            return Err(NluError::NoPatterns(labels[index].clone()));
        }

        let total = rows.len() as f64;
        let class_log_prior = class_counts
            .iter()
            .map(|c| (*c as f64 / total).ln())
            .collect();

        let feature_log_prob = feature_counts
            .into_iter()
            .map(|counts| {
                let denom = (counts.iter().sum::<f64>() + alpha * dimension as f64).ln();
                counts.into_iter().map(|c| (c + alpha).ln() - denom).collect()
            })
            .collect();

        Ok(Self {
            labels,
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Unnormalised log posterior of every class, in label order.
    pub fn joint_log_likelihood(&self, row: &[f64]) -> Vec<f64> {
        self.feature_log_prob
            .iter()
            .zip(&self.class_log_prior)
            .map(|(log_probs, prior)| {
                prior
                    + log_probs
                        .iter()
                        .zip(row)
                        .map(|(lp, x)| lp * x)
                        .sum::<f64>()
            })
            .collect()
    }

    pub fn predict(&self, row: &[f64]) -> Prediction {
        let scores = self.joint_log_likelihood(row);

        let mut best = 0;
        for (index, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = index;
            }
        }

        // softmax, shifted by the max for stability
        let max = scores[best];
        let sum: f64 = scores.iter().map(|s| (s - max).exp()).sum();

        Prediction {
            intent: self.labels[best].clone(),
            confidence: 1.0 / sum,
        }
    }
}
