//! Named-entity recognition over normalized utterances.

use std::fs::File;
use std::path::Path;

use parley_core::config::EntityConfig;
use parley_core::EntityKind;
use tracing::{debug, info};

use crate::error::{NluError, Result};
use crate::gazetteer::Gazetteer;
use crate::resources;
use crate::text::tokenize;

/// A recognized entity, aligned to token boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub kind: EntityKind,
    /// The matched tokens joined by single spaces.
    pub value: String,
    pub token_start: usize,
    /// Exclusive.
    pub token_end: usize,
}

/// Finds entity spans in lowercase text, in document order.
pub trait NamedEntityRecognizer: Send + Sync {
    fn recognize(&self, normalized: &str) -> Vec<EntitySpan>;
}

/// Gazetteer file names inside a configured directory, by kind.
const GAZETTEER_FILES: [(EntityKind, &str); 3] = [
    (EntityKind::Location, "locations.txt"),
    (EntityKind::Person, "people.txt"),
    (EntityKind::Organization, "organizations.txt"),
];

/// Longest-match recognizer over one gazetteer per kind.
///
/// Scans left to right; at each token it takes the longest phrase found in
/// any gazetteer and resumes after it. Equal-length matches resolve as
/// location, then person, then organization.
#[derive(Debug, Clone, Default)]
pub struct GazetteerRecognizer {
    locations: Gazetteer,
    people: Gazetteer,
    organizations: Gazetteer,
}

impl GazetteerRecognizer {
    pub fn new(locations: Gazetteer, people: Gazetteer, organizations: Gazetteer) -> Self {
        Self {
            locations,
            people,
            organizations,
        }
    }

    /// Recognizer over the built-in phrase lists.
    pub fn builtin() -> Self {
        Self::new(
            resources::LOCATIONS.iter().collect(),
            resources::PEOPLE.iter().collect(),
            resources::ORGANIZATIONS.iter().collect(),
        )
    }

    /// Built-in lists plus the configured extra phrases and gazetteer files.
    ///
    /// Missing files in the gazetteer directory are skipped; a directory that
    /// does not exist is an error.
    pub fn from_config(config: &EntityConfig) -> Result<Self> {
        let mut recognizer = Self::builtin();
        recognizer.extend(EntityKind::Location, &config.extra_locations);
        recognizer.extend(EntityKind::Person, &config.extra_people);
        recognizer.extend(EntityKind::Organization, &config.extra_organizations);

        if let Some(dir) = &config.gazetteer_dir {
            recognizer.load_dir(Path::new(dir))?;
        }

        info!(
            locations = recognizer.locations.len(),
            people = recognizer.people.len(),
            organizations = recognizer.organizations.len(),
            "Entity gazetteers loaded"
        );
        Ok(recognizer)
    }

    /// Add phrases for one kind. Kinds without a gazetteer are ignored.
    pub fn extend<S: AsRef<str>>(&mut self, kind: EntityKind, phrases: &[S]) {
        if let Some(gazetteer) = self.gazetteer_mut(kind) {
            gazetteer.extend(phrases.iter().map(AsRef::as_ref));
        }
    }

    fn load_dir(&mut self, dir: &Path) -> Result<()> {
        if !dir.is_dir() {
            return Err(NluError::Gazetteer(format!(
                "gazetteer directory not found: {}",
                dir.display()
            )));
        }

        for (kind, file_name) in GAZETTEER_FILES {
            let path = dir.join(file_name);
            if !path.is_file() {
                continue;
            }
            let file = File::open(&path)?;
            if let Some(gazetteer) = self.gazetteer_mut(kind) {
                let added = gazetteer.extend_from_reader(file)?;
                debug!(path = %path.display(), added, "Loaded gazetteer file");
            }
        }
        Ok(())
    }

    fn gazetteer_mut(&mut self, kind: EntityKind) -> Option<&mut Gazetteer> {
        match kind {
            EntityKind::Location => Some(&mut self.locations),
            EntityKind::Person => Some(&mut self.people),
            EntityKind::Organization => Some(&mut self.organizations),
            EntityKind::SearchTerm => None,
        }
    }

    fn gazetteers(&self) -> [(EntityKind, &Gazetteer); 3] {
        [
            (EntityKind::Location, &self.locations),
            (EntityKind::Person, &self.people),
            (EntityKind::Organization, &self.organizations),
        ]
    }

    /// Longest match starting at `start`, if any.
    fn match_at(&self, tokens: &[String], start: usize) -> Option<EntitySpan> {
        let longest = self
            .gazetteers()
            .iter()
            .map(|(_, g)| g.max_tokens())
            .max()
            .unwrap_or(0)
            .min(tokens.len() - start);

        for len in (1..=longest).rev() {
            let candidate = tokens[start..start + len].join(" ");
            for (kind, gazetteer) in self.gazetteers() {
                if gazetteer.contains(&candidate) {
                    return Some(EntitySpan {
                        kind,
                        value: candidate,
                        token_start: start,
                        token_end: start + len,
                    });
                }
            }
        }
        None
    }
}

impl NamedEntityRecognizer for GazetteerRecognizer {
    fn recognize(&self, normalized: &str) -> Vec<EntitySpan> {
        let tokens = tokenize(normalized);
        let mut spans = Vec::new();
        let mut position = 0;
        while position < tokens.len() {
            match self.match_at(&tokens, position) {
                Some(span) => {
                    position = span.token_end;
                    spans.push(span);
                }
                None => position += 1,
            }
        }
        spans
    }
}
