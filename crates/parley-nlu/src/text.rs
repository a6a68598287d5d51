//! Text normalization and tokenization shared by the vectorizer and the
//! entity recognizer.

/// Lowercase an utterance and fold typographic apostrophes to `'`.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'")
}

/// Split text into lowercase word tokens.
///
/// A token is a maximal run of alphanumeric characters and apostrophes, with
/// leading and trailing apostrophes removed, so `"What's up?"` yields
/// `["what's", "up"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// All word n-grams of length `1..=max_n`, unigrams first, each joined by a
/// single space.
pub fn ngrams(tokens: &[String], max_n: usize) -> Vec<String> {
    let mut terms = Vec::new();
    for n in 1..=max_n.min(tokens.len()) {
        for window in tokens.windows(n) {
            terms.push(window.join(" "));
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_tokenize_keeps_inner_apostrophes() {
        assert_eq!(tokenize("What's up?"), vec!["what's", "up"]);
        assert_eq!(tokenize("'quoted'"), vec!["quoted"]);
    }

    #[test]
    fn test_tokenize_folds_curly_apostrophe() {
        assert_eq!(tokenize("What\u{2019}s the weather"), vec!["what's", "the", "weather"]);
    }

    #[test]
    fn test_tokenize_unicode() {
        assert_eq!(tokenize("Weather in Zürich"), vec!["weather", "in", "zürich"]);
        assert_eq!(tokenize("東京 weather"), vec!["東京", "weather"]);
    }

    #[test]
    fn test_tokenize_empty_and_symbols() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ?!  ... ''").is_empty());
    }

    #[test]
    fn test_ngrams_unigrams_then_bigrams() {
        let tokens = tokenize("tell me about");
        assert_eq!(
            ngrams(&tokens, 2),
            vec!["tell", "me", "about", "tell me", "me about"]
        );
    }

    #[test]
    fn test_ngrams_shorter_than_n() {
        let tokens = tokenize("news");
        assert_eq!(ngrams(&tokens, 3), vec!["news"]);
        assert!(ngrams(&[], 2).is_empty());
    }
}
