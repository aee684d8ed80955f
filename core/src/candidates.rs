use std::collections::HashSet;

use crate::index::{DocKey, InvertedIndex, Query};

/// Documents sharing at least one term with the query.
pub fn select_candidates<'a, D: DocKey>(index: &'a InvertedIndex<D>, query: &Query) -> HashSet<&'a D> {
    query
        .keys()
        .filter_map(|term| index.get(term))
        .flat_map(|postings| postings.keys())
        .collect()
}
