//! Entity extraction: named-entity recognition first, then pattern fallback.

use std::sync::{Arc, LazyLock};

use parley_core::config::EntityConfig;
use parley_core::{Entities, EntityKind};
use regex::Regex;
use tracing::trace;

use crate::error::Result;
use crate::recognizer::{GazetteerRecognizer, NamedEntityRecognizer};
use crate::text::normalize;

static LOCATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:weather|temperature|forecast)\s+(?:in|at|for)\s+([\p{L}\s]+)")
        .expect("location pattern should compile")
});

static SEARCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:search\s+for|find\s+(?:information|info|out)\s+(?:about|on)|find|tell\s+me\s+about|what\s+is|who\s+is)\s+([\p{L}\s]+)",
    )
    .expect("search pattern should compile")
});

/// Trailing words dropped from captured runs, longest first.
const TRAILING_FILLERS: &[&[&str]] = &[
    &["right", "now"],
    &["please"],
    &["today"],
    &["tonight"],
    &["tomorrow"],
    &["now"],
    &["currently"],
];

/// Kinds the recognizer is consulted for.
const RECOGNIZED_KINDS: [EntityKind; 3] = [
    EntityKind::Location,
    EntityKind::Person,
    EntityKind::Organization,
];

/// Two-stage extractor. Recognizer output always wins over the fallback
/// patterns, which only fill kinds still unset.
#[derive(Clone)]
pub struct EntityExtractor {
    recognizer: Arc<dyn NamedEntityRecognizer>,
}

impl EntityExtractor {
    pub fn new(recognizer: Arc<dyn NamedEntityRecognizer>) -> Self {
        Self { recognizer }
    }

    /// Extractor backed by a [`GazetteerRecognizer`] built from configuration.
    pub fn from_config(config: &EntityConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(GazetteerRecognizer::from_config(config)?)))
    }

    pub fn extract(&self, utterance: &str) -> Entities {
        let text = normalize(utterance);
        let mut entities = Entities::default();

        let spans = self.recognizer.recognize(&text);
        for kind in RECOGNIZED_KINDS {
            if let Some(span) = spans.iter().find(|s| s.kind == kind) {
                entities.fill(kind, span.value.clone());
            }
        }

        if !entities.contains(EntityKind::Location) {
            if let Some(location) = capture(&LOCATION_PATTERN, &text) {
                entities.fill(EntityKind::Location, location);
            }
        }
        if !entities.contains(EntityKind::SearchTerm) {
            if let Some(term) = capture(&SEARCH_PATTERN, &text) {
                entities.fill(EntityKind::SearchTerm, term);
            }
        }

        trace!(?entities, "Extracted entities");
        entities
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new(Arc::new(GazetteerRecognizer::builtin()))
    }
}

impl std::fmt::Debug for EntityExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityExtractor").finish_non_exhaustive()
    }
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    let run = pattern.captures(text)?.get(1)?.as_str();
    clean_capture(run)
}

/// Collapse whitespace, then strip trailing filler words until none remain.
/// `None` if nothing is left.
fn clean_capture(run: &str) -> Option<String> {
    let mut words: Vec<&str> = run.split_whitespace().collect();
    loop {
        let filler = TRAILING_FILLERS.iter().find(|f| words.ends_with(f));
        match filler {
            Some(f) => words.truncate(words.len() - f.len()),
            None => break,
        }
    }
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
