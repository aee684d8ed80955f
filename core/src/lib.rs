//! Vector-space ranking over a precomputed inverted index.
//!
//! A [`Retriever`] borrows an index of `term -> {doc -> frequency}`, fixes one
//! weighting [`Scheme`] and answers queries with the best matching document ids.

pub mod candidates;
pub mod config;
pub mod error;
pub mod index;
pub mod rank;
pub mod retriever;
pub mod weighting;

pub use error::{Result, RetrievalError};
pub use index::{count_documents, DocId, DocKey, InvertedIndex, Query};
pub use rank::ScoredDoc;
pub use retriever::Retriever;
pub use weighting::{Accumulator, Binary, Scheme, Tf, TfIdf, Weighting};
