use parley_core::ParleyError;
use thiserror::Error;

/// Errors raised while building the intent model or the entity recognizer.
///
/// All of these happen at startup; once a model is built, classification and
/// extraction cannot fail.
#[derive(Error, Debug)]
pub enum NluError {
    #[error("taxonomy is empty")]
    EmptyTaxonomy,
    #[error("duplicate intent name: {0}")]
    DuplicateIntent(String),
    #[error("intent '{0}' has no patterns")]
    NoPatterns(String),
    #[error("vocabulary is empty")]
    EmptyVocabulary,
    #[error("invalid model configuration: {0}")]
    Config(String),
    #[error("gazetteer error: {0}")]
    Gazetteer(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<NluError> for ParleyError {
    fn from(err: NluError) -> Self {
        match err {
            NluError::Io(e) => ParleyError::Io(e),
            NluError::Gazetteer(msg) => ParleyError::Resource(msg),
            other => ParleyError::Model(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, NluError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NluError::EmptyTaxonomy.to_string(), "taxonomy is empty");
        assert_eq!(
            NluError::DuplicateIntent("greet".into()).to_string(),
            "duplicate intent name: greet"
        );
        assert_eq!(
            NluError::NoPatterns("news".into()).to_string(),
            "intent 'news' has no patterns"
        );
        assert_eq!(
            NluError::Config("ngram_max must be at least 1".into()).to_string(),
            "invalid model configuration: ngram_max must be at least 1"
        );
    }

    #[test]
    fn test_into_parley_error() {
        let err: ParleyError = NluError::EmptyVocabulary.into();
        assert!(matches!(err, ParleyError::Model(_)));
        assert!(err.to_string().contains("vocabulary is empty"));

        let err: ParleyError = NluError::Gazetteer("bad file".into()).into();
        assert!(matches!(err, ParleyError::Resource(_)));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ParleyError = NluError::from(io).into();
        assert!(matches!(err, ParleyError::Io(_)));
    }
}
