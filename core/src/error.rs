use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    /// Weighting scheme name is not one of `binary`, `tf`, `tfidf`.
    #[error("unrecognized weighting scheme {scheme:?} (expected binary, tf or tfidf)")]
    Configuration { scheme: String },
    /// A term maps to an empty posting list, so its IDF is undefined.
    #[error("term {term:?} has an empty posting list")]
    DataIntegrity { term: String },
}

pub type Result<T> = std::result::Result<T, RetrievalError>;
