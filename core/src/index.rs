use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

pub type DocId = u32;

/// Term → (document → raw term frequency). Every posting list is expected to be non-empty.
pub type InvertedIndex<D = DocId> = HashMap<String, HashMap<D, u32>>;

/// Term → query-side frequency.
pub type Query = HashMap<String, u32>;

/// Anything usable as a document identifier. `Ord` supplies the tie-break when ranking.
pub trait DocKey: Eq + Hash + Ord + Clone + Debug {}

impl<T: Eq + Hash + Ord + Clone + Debug> DocKey for T {}

/// Number of distinct documents appearing in at least one posting list.
pub fn count_documents<D: DocKey>(index: &InvertedIndex<D>) -> usize {
    let docs: HashSet<&D> = index.values().flat_map(|postings| postings.keys()).collect();
    docs.len()
}
