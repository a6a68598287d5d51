//! The trained intent model: vectorizer plus classifier, built once at startup.

use std::collections::HashSet;

use parley_core::config::NluConfig;
use tracing::{debug, info};

use crate::classifier::{NaiveBayes, Prediction};
use crate::error::{NluError, Result};
use crate::taxonomy::{self, Intent, INTENTS};
use crate::vectorizer::TfIdfVectorizer;

/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    taxonomy: &'static [Intent],
    vectorizer: TfIdfVectorizer,
    classifier: NaiveBayes,
}

impl TrainedModel {
    /// Train on the built-in taxonomy.
    pub fn initialize(config: &NluConfig) -> Result<Self> {
        Self::train(INTENTS, config)
    }

    /// Train on an arbitrary taxonomy.
    ///
    /// Every pattern becomes one labeled example. Intent names must be unique
    /// and every intent needs at least one pattern.
    pub fn train(taxonomy: &'static [Intent], config: &NluConfig) -> Result<Self> {
        if taxonomy.is_empty() {
            return Err(NluError::EmptyTaxonomy);
        }

        let mut names = HashSet::new();
        for intent in taxonomy {
            if !names.insert(intent.name) {
                return Err(NluError::DuplicateIntent(intent.name.to_string()));
            }
            if intent.patterns.is_empty() {
                return Err(NluError::NoPatterns(intent.name.to_string()));
            }
        }

        let documents: Vec<&str> = taxonomy
            .iter()
            .flat_map(|i| i.patterns.iter().copied())
            .collect();
        let vectorizer = TfIdfVectorizer::fit(&documents, config.max_features, config.ngram_max)?;

        let rows: Vec<(Vec<f64>, usize)> = taxonomy
            .iter()
            .enumerate()
            .flat_map(|(class, intent)| {
                let vectorizer = &vectorizer;
                intent
                    .patterns
                    .iter()
                    .map(move |p| (vectorizer.transform(p), class))
            })
            .collect();
        let labels = taxonomy.iter().map(|i| i.name.to_string()).collect();
        let classifier = NaiveBayes::fit(labels, &rows, config.smoothing)?;

        info!(
            intents = taxonomy.len(),
            examples = documents.len(),
            vocabulary = vectorizer.dimension(),
            "Intent model trained"
        );

        Ok(Self {
            taxonomy,
            vectorizer,
            classifier,
        })
    }

    /// Predict the intent of an utterance. Always returns one of the
    /// taxonomy's labels.
    pub fn classify(&self, utterance: &str) -> Prediction {
        let row = self.vectorizer.transform(utterance);
        let prediction = self.classifier.predict(&row);
        debug!(
            intent = %prediction.intent,
            confidence = prediction.confidence,
            "Classified utterance"
        );
        prediction
    }

    pub fn taxonomy(&self) -> &'static [Intent] {
        self.taxonomy
    }

    pub fn intent(&self, name: &str) -> Option<&'static Intent> {
        taxonomy::find(self.taxonomy, name)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.dimension()
    }
}
