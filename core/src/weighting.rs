//! Term weighting strategies.
//!
//! Each strategy walks the whole index once, visiting only postings of candidate
//! documents. For every visited posting the document-side weight is squared into
//! the document's norm, and when the term is also in the query the product of the
//! document and query weights is added to the document's dot product.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RetrievalError};
use crate::index::{DocKey, InvertedIndex, Query};

/// Running dot product and squared norm of one candidate document.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulator {
    pub dot: f64,
    pub norm_sq: f64,
}

pub type Accumulators<'a, D> = HashMap<&'a D, Accumulator>;

/// A weighting scheme turned into per-candidate accumulators.
pub trait Weighting<D>: Send + Sync {
    fn score<'a>(
        &self,
        index: &'a InvertedIndex<D>,
        query: &Query,
        candidates: &HashSet<&'a D>,
        num_docs: usize,
    ) -> Result<Accumulators<'a, D>>;
}

/// Presence/absence weighting.
///
/// The dot product counts shared terms and the norm counts every term of the document.
#[derive(Debug, Clone, Copy, Default)]
pub struct Binary;

/// Raw term frequency on both sides.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tf;

/// Term frequency scaled by `log10(num_docs / df)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdf;

impl<D: DocKey> Weighting<D> for Binary {
    fn score<'a>(
        &self,
        index: &'a InvertedIndex<D>,
        query: &Query,
        candidates: &HashSet<&'a D>,
        _num_docs: usize,
    ) -> Result<Accumulators<'a, D>> {
        scan(index, query, candidates, |_, _| Ok(1.0), |_| 1.0)
    }
}

impl<D: DocKey> Weighting<D> for Tf {
    fn score<'a>(
        &self,
        index: &'a InvertedIndex<D>,
        query: &Query,
        candidates: &HashSet<&'a D>,
        _num_docs: usize,
    ) -> Result<Accumulators<'a, D>> {
        scan(index, query, candidates, |_, _| Ok(1.0), f64::from)
    }
}

impl<D: DocKey> Weighting<D> for TfIdf {
    fn score<'a>(
        &self,
        index: &'a InvertedIndex<D>,
        query: &Query,
        candidates: &HashSet<&'a D>,
        num_docs: usize,
    ) -> Result<Accumulators<'a, D>> {
        scan(
            index,
            query,
            candidates,
            |term, postings| idf(term, num_docs, postings.len()),
            f64::from,
        )
    }
}

/// Inverse document frequency, `log10(num_docs / df)`.
pub fn idf(term: &str, num_docs: usize, df: usize) -> Result<f64> {
    if df == 0 {
        tracing::warn!(term, "empty posting list, idf undefined");
        return Err(RetrievalError::DataIntegrity { term: term.to_string() });
    }
    Ok((num_docs as f64 / df as f64).log10())
}

/// Single pass over the index shared by all schemes.
///
/// `term_factor` is evaluated once per index term and multiplies both sides;
/// `frequency` maps a raw document or query frequency to its base weight.
fn scan<'a, D, F, W>(
    index: &'a InvertedIndex<D>,
    query: &Query,
    candidates: &HashSet<&'a D>,
    mut term_factor: F,
    frequency: W,
) -> Result<Accumulators<'a, D>>
where
    D: DocKey,
    F: FnMut(&str, &HashMap<D, u32>) -> Result<f64>,
    W: Fn(u32) -> f64,
{
    let mut acc: Accumulators<'a, D> =
        candidates.iter().map(|&doc| (doc, Accumulator::default())).collect();
    if acc.is_empty() {
        return Ok(acc);
    }

    for (term, postings) in index {
        let factor = term_factor(term.as_str(), postings)?;
        let query_weight = query.get(term).map(|&qf| frequency(qf) * factor);
        for (doc, &tf) in postings {
            let Some(slot) = acc.get_mut(doc) else { continue };
            let weight = frequency(tf) * factor;
            slot.norm_sq += weight * weight;
            if let Some(qw) = query_weight {
                slot.dot += weight * qw;
            }
        }
    }
    Ok(acc)
}

/// The closed set of weighting schemes a session can be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Binary,
    Tf,
    TfIdf,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Binary => "binary",
            Scheme::Tf => "tf",
            Scheme::TfIdf => "tfidf",
        }
    }

    pub fn strategy<D: DocKey>(self) -> Box<dyn Weighting<D>> {
        match self {
            Scheme::Binary => Box::new(Binary),
            Scheme::Tf => Box::new(Tf),
            Scheme::TfIdf => Box::new(TfIdf),
        }
    }
}

impl FromStr for Scheme {
    type Err = RetrievalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" => Ok(Scheme::Binary),
            "tf" => Ok(Scheme::Tf),
            "tfidf" => Ok(Scheme::TfIdf),
            _ => Err(RetrievalError::Configuration { scheme: s.to_string() }),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
