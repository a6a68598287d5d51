//! TF-IDF feature vectorizer over word n-grams.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{NluError, Result};
use crate::text::{ngrams, tokenize};

/// Maps text to a fixed-dimension, L2-normalised TF-IDF vector.
///
/// The vocabulary and IDF weights are learned once by [`TfIdfVectorizer::fit`]
/// and never change afterwards. Terms not in the vocabulary are ignored.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    ngram_max: usize,
}

impl TfIdfVectorizer {
    /// Learn the vocabulary and IDF weights from a set of documents.
    ///
    /// When more than `max_features` distinct terms exist, the most frequent
    /// ones across the corpus are kept (ties broken by term order). Column
    /// indices follow lexicographic term order. IDF is smoothed:
    /// `ln((1 + n) / (1 + df)) + 1`.
    pub fn fit<S: AsRef<str>>(documents: &[S], max_features: usize, ngram_max: usize) -> Result<Self> {
        if ngram_max == 0 {
            return Err(NluError::Config("ngram_max must be at least 1".to_string()));
        }
        if max_features == 0 {
            return Err(NluError::Config("max_features must be at least 1".to_string()));
        }

        // term -> (document frequency, corpus frequency)
        let mut stats: BTreeMap<String, (usize, usize)> = BTreeMap::new();
        for doc in documents {
            let terms = ngrams(&tokenize(doc.as_ref()), ngram_max);
            let mut seen = HashSet::new();
            for term in terms {
                let first_in_doc = seen.insert(term.clone());
                let entry = stats.entry(term).or_insert((0, 0));
                entry.1 += 1;
                if first_in_doc {
                    entry.0 += 1;
                }
            }
        }

        if stats.is_empty() {
            return Err(NluError::EmptyVocabulary);
        }

        let mut selected: Vec<(String, usize)> = stats
            .iter()
            .map(|(term, (df, _))| (term.clone(), *df))
            .collect();
        if selected.len() > max_features {
            selected.sort_by(|a, b| stats[&b.0].1.cmp(&stats[&a.0].1).then_with(|| a.0.cmp(&b.0)));
            selected.truncate(max_features);
            selected.sort_by(|a, b| a.0.cmp(&b.0));
        }

        let n_docs = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(selected.len());
        let mut idf = Vec::with_capacity(selected.len());
        for (index, (term, df)) in selected.into_iter().enumerate() {
            idf.push(((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Ok(Self {
            vocabulary,
            idf,
            ngram_max,
        })
    }

    /// Vectorize a piece of text against the fixed vocabulary.
    ///
    /// Text with no known term yields the zero vector.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut row = vec![0.0; self.idf.len()];
        for term in ngrams(&tokenize(text), self.ngram_max) {
            if let Some(&index) = self.vocabulary.get(&term) {
                row[index] += 1.0;
            }
        }

        for (value, weight) in row.iter_mut().zip(&self.idf) {
            *value *= weight;
        }

        let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in row.iter_mut() {
                *value /= norm;
            }
        }
        row
    }

    /// Number of columns produced by [`transform`](Self::transform).
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCS: &[&str] = &["weather in", "weather today", "news today"];

    fn fitted() -> TfIdfVectorizer {
        TfIdfVectorizer::fit(DOCS, 1000, 2).unwrap()
    }

    #[test]
    fn test_vocabulary_contains_unigrams_and_bigrams() {
        let v = fitted();
        // weather, in, today, news, weather in, weather today, news today
        assert_eq!(v.dimension(), 7);
        assert!(v.contains("weather"));
        assert!(v.contains("weather in"));
        assert!(v.contains("news today"));
        assert!(!v.contains("in today"));
    }

    #[test]
    fn test_transform_is_l2_normalised() {
        let v = fitted();
        let row = v.transform("weather in paris");
        let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_text_is_zero_vector() {
        let v = fitted();
        let row = v.transform("qwerty zxcvb");
        assert_eq!(row.len(), v.dimension());
        assert!(row.iter().all(|x| *x == 0.0));
        assert!(v.transform("").iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_rare_terms_weigh_more() {
        let v = fitted();
        // "weather" occurs in two documents, "in" in one.
        let row = v.transform("weather in");
        let weather = row[v.vocabulary["weather"]];
        let in_ = row[v.vocabulary["in"]];
        assert!(in_ > weather);
    }

    #[test]
    fn test_idf_is_smoothed() {
        let v = fitted();
        let expected = (4.0_f64 / 3.0).ln() + 1.0;
        assert!((v.idf[v.vocabulary["weather"]] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_case_insensitive() {
        let v = fitted();
        assert_eq!(v.transform("WEATHER Today"), v.transform("weather today"));
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let v = TfIdfVectorizer::fit(DOCS, 2, 1).unwrap();
        assert_eq!(v.dimension(), 2);
        // "today" and "weather" each occur twice; "in" and "news" once.
        assert!(v.contains("today"));
        assert!(v.contains("weather"));
        assert!(!v.contains("news"));
    }

    #[test]
    fn test_unigrams_only() {
        let v = TfIdfVectorizer::fit(DOCS, 1000, 1).unwrap();
        assert_eq!(v.dimension(), 4);
        assert!(!v.contains("weather in"));
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            TfIdfVectorizer::fit(DOCS, 1000, 0),
            Err(NluError::Config(_))
        ));
        assert!(matches!(
            TfIdfVectorizer::fit(DOCS, 0, 2),
            Err(NluError::Config(_))
        ));
    }

    #[test]
    fn test_empty_corpus() {
        let empty: &[&str] = &["", "?!"];
        assert!(matches!(
            TfIdfVectorizer::fit(empty, 1000, 2),
            Err(NluError::EmptyVocabulary)
        ));
    }
}
