//! Phrase lists for one entity kind.

use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};

use crate::error::Result;
use crate::text::tokenize;

/// A set of known phrases, stored as space-joined lowercase tokens.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    phrases: HashSet<String>,
    max_tokens: usize,
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a phrase. It is tokenized the same way utterances are, so
    /// `"New  York"` and `"new york"` are the same entry. Returns `false` for
    /// phrases with no tokens.
    pub fn insert(&mut self, phrase: &str) -> bool {
        let tokens = tokenize(phrase);
        if tokens.is_empty() {
            return false;
        }
        self.max_tokens = self.max_tokens.max(tokens.len());
        self.phrases.insert(tokens.join(" "));
        true
    }

    /// Read one phrase per line. Blank lines and lines starting with `#` are
    /// skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut gazetteer = Self::new();
        gazetteer.extend_from_reader(reader)?;
        Ok(gazetteer)
    }

    pub fn extend_from_reader<R: Read>(&mut self, reader: R) -> Result<usize> {
        let mut added = 0;
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let phrase = line.trim();
            if phrase.is_empty() || phrase.starts_with('#') {
                continue;
            }
            if self.insert(phrase) {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Exact lookup of an already-normalized, space-joined phrase.
    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.contains(phrase)
    }

    /// Token count of the longest phrase.
    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Gazetteer {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut gazetteer = Self::new();
        for phrase in iter {
            gazetteer.insert(phrase.as_ref());
        }
        gazetteer
    }
}

impl<S: AsRef<str>> Extend<S> for Gazetteer {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for phrase in iter {
            self.insert(phrase.as_ref());
        }
    }
}
