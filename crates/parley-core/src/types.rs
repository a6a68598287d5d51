//! Types shared across the Parley crates.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// EntityKind
// =============================================================================

/// The kinds of entity the extractor can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Location,
    SearchTerm,
    Person,
    Organization,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Location,
        EntityKind::SearchTerm,
        EntityKind::Person,
        EntityKind::Organization,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Location => "location",
            EntityKind::SearchTerm => "search_term",
            EntityKind::Person => "person",
            EntityKind::Organization => "organization",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Entities
// =============================================================================

/// Entities extracted from a single utterance.
///
/// At most one value per kind. A kind that was not found is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

impl Entities {
    /// Value for the given kind, if present.
    pub fn get(&self, kind: EntityKind) -> Option<&str> {
        match kind {
            EntityKind::Location => self.location.as_deref(),
            EntityKind::SearchTerm => self.search_term.as_deref(),
            EntityKind::Person => self.person.as_deref(),
            EntityKind::Organization => self.organization.as_deref(),
        }
    }

    pub fn contains(&self, kind: EntityKind) -> bool {
        self.get(kind).is_some()
    }

    /// Set a kind only if it is still empty. Returns `true` if the value was stored.
    pub fn fill(&mut self, kind: EntityKind, value: impl Into<String>) -> bool {
        let slot = self.slot_mut(kind);
        if slot.is_some() {
            return false;
        }
        *slot = Some(value.into());
        true
    }

    pub fn is_empty(&self) -> bool {
        EntityKind::ALL.iter().all(|k| !self.contains(*k))
    }

    fn slot_mut(&mut self, kind: EntityKind) -> &mut Option<String> {
        match kind {
            EntityKind::Location => &mut self.location,
            EntityKind::SearchTerm => &mut self.search_term,
            EntityKind::Person => &mut self.person,
            EntityKind::Organization => &mut self.organization,
        }
    }
}
