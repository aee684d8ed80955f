use std::cmp::Ordering;

use serde::Serialize;

use crate::index::DocKey;
use crate::weighting::Accumulators;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDoc<D> {
    pub doc_id: D,
    pub similarity: f64,
}

/// Cosine similarity of each candidate against the query, best `k` first.
///
/// The query norm is left out since it is the same for every candidate. Only
/// candidates with a positive similarity are returned; a zero norm counts as
/// similarity 0. Equal similarities are ordered by ascending document id.
pub fn rank<D: DocKey>(acc: Accumulators<'_, D>, k: usize) -> Vec<ScoredDoc<D>> {
    let mut scored: Vec<(&D, f64)> = acc
        .into_iter()
        .map(|(doc, a)| {
            let similarity = if a.norm_sq > 0.0 { a.dot / a.norm_sq.sqrt() } else { 0.0 };
            (doc, similarity)
        })
        .filter(|&(_, similarity)| similarity > 0.0)
        .collect();
    scored.sort_by(by_similarity_then_id);
    scored.truncate(k);
    scored
        .into_iter()
        .map(|(doc, similarity)| ScoredDoc { doc_id: doc.clone(), similarity })
        .collect()
}

fn by_similarity_then_id<D: Ord>(a: &(&D, f64), b: &(&D, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0))
}
