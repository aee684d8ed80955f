use std::fmt;

use crate::candidates::select_candidates;
use crate::config::{DEFAULT_TOP_K, MAX_TOP_K};
use crate::error::Result;
use crate::index::{count_documents, DocId, DocKey, InvertedIndex, Query};
use crate::rank::{rank, ScoredDoc};
use crate::weighting::{Scheme, Weighting};

/// A retrieval session over one read-only index with a fixed weighting scheme.
///
/// The document universe size is counted once here and reused by every query.
/// Queries keep all their working state local, so a session can be shared across
/// threads.
pub struct Retriever<'a, D = DocId> {
    index: &'a InvertedIndex<D>,
    scheme: Scheme,
    weighting: Box<dyn Weighting<D>>,
    num_docs: usize,
    top_k: usize,
}

impl<'a, D: DocKey> Retriever<'a, D> {
    /// Build a session from a scheme name: `binary`, `tf` or `tfidf`.
    pub fn new(index: &'a InvertedIndex<D>, scheme: &str) -> Result<Self> {
        let scheme: Scheme = scheme.parse()?;
        Ok(Self::with_scheme(index, scheme))
    }

    pub fn with_scheme(index: &'a InvertedIndex<D>, scheme: Scheme) -> Self {
        let num_docs = count_documents(index);
        tracing::info!(%scheme, num_terms = index.len(), num_docs, "retrieval session ready");
        Self { index, scheme, weighting: scheme.strategy(), num_docs, top_k: DEFAULT_TOP_K }
    }

    /// Number of results per query, clamped to `1..=MAX_TOP_K`.
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k.clamp(1, MAX_TOP_K);
        self
    }

    pub fn scheme(&self) -> Scheme { self.scheme }

    pub fn num_docs(&self) -> usize { self.num_docs }

    pub fn top_k(&self) -> usize { self.top_k }

    /// Best matching document ids, most similar first.
    pub fn for_query(&self, query: &Query) -> Result<Vec<D>> {
        let hits = self.for_query_scored(query)?;
        Ok(hits.into_iter().map(|hit| hit.doc_id).collect())
    }

    pub fn for_query_scored(&self, query: &Query) -> Result<Vec<ScoredDoc<D>>> {
        let candidates = select_candidates(self.index, query);
        if candidates.is_empty() {
            tracing::debug!(query_terms = query.len(), "no candidates");
            return Ok(Vec::new());
        }
        let acc = self.weighting.score(self.index, query, &candidates, self.num_docs)?;
        let hits = rank(acc, self.top_k);
        tracing::debug!(candidates = candidates.len(), returned = hits.len(), "query ranked");
        Ok(hits)
    }
}

impl<D> fmt::Debug for Retriever<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Retriever")
            .field("scheme", &self.scheme)
            .field("num_terms", &self.index.len())
            .field("num_docs", &self.num_docs)
            .field("top_k", &self.top_k)
            .finish()
    }
}
