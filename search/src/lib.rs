use anyhow::{Context, Result};
use clap::Parser;
use ir_core::{DocKey, InvertedIndex, Query, Retriever, ScoredDoc};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "retrieve")]
#[command(about = "Rank documents of a prebuilt inverted index against a set of queries")]
pub struct Args {
    /// JSON index: { term: { doc_id: frequency } }
    #[arg(long)]
    pub index: PathBuf,
    /// JSON queries: { query_id: { term: frequency } }
    #[arg(long)]
    pub queries: PathBuf,
    /// Term weighting: binary, tf or tfidf
    #[arg(long, default_value_t = ir_core::config::DEFAULT_SCHEME.to_string())]
    pub weighting: String,
    /// Results per query
    #[arg(long, default_value_t = ir_core::config::DEFAULT_TOP_K)]
    pub top_k: usize,
    /// Write results here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Append the similarity to each result line
    #[arg(long, default_value_t = false)]
    pub scores: bool,
}

/// An index as found on disk. Document ids stay numeric when every key parses as one,
/// so ties order 9 before 10.
#[derive(Debug)]
pub enum LoadedIndex {
    Numeric(InvertedIndex<u32>),
    Text(InvertedIndex<String>),
}

pub fn load_index(path: &Path) -> Result<LoadedIndex> {
    let json = fs::read_to_string(path).with_context(|| format!("opening index {}", path.display()))?;
    if let Ok(index) = serde_json::from_str::<InvertedIndex<u32>>(&json) {
        return Ok(LoadedIndex::Numeric(index));
    }
    let index: InvertedIndex<String> =
        serde_json::from_str(&json).with_context(|| format!("parsing index {}", path.display()))?;
    Ok(LoadedIndex::Text(index))
}

pub fn load_queries(path: &Path) -> Result<BTreeMap<String, Query>> {
    let f = File::open(path).with_context(|| format!("opening queries {}", path.display()))?;
    let queries = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parsing queries {}", path.display()))?;
    Ok(queries)
}

/// Answer every query in id order, one `query_id doc_id [similarity]` line per hit.
pub fn write_results<D, W>(
    retriever: &Retriever<'_, D>,
    queries: &BTreeMap<String, Query>,
    with_scores: bool,
    out: &mut W,
) -> Result<()>
where
    D: DocKey + Display,
    W: Write,
{
    for (qid, query) in queries {
        let hits: Vec<ScoredDoc<D>> = retriever
            .for_query_scored(query)
            .with_context(|| format!("ranking query {qid}"))?;
        for hit in hits {
            if with_scores {
                writeln!(out, "{qid} {} {:.6}", hit.doc_id, hit.similarity)?;
            } else {
                writeln!(out, "{qid} {}", hit.doc_id)?;
            }
        }
    }
    Ok(())
}

pub fn run(args: &Args) -> Result<()> {
    let index = load_index(&args.index)?;
    let queries = load_queries(&args.queries)?;
    match &index {
        LoadedIndex::Numeric(index) => answer(index, &queries, args),
        LoadedIndex::Text(index) => answer(index, &queries, args),
    }
}

fn answer<D: DocKey + Display>(
    index: &InvertedIndex<D>,
    queries: &BTreeMap<String, Query>,
    args: &Args,
) -> Result<()> {
    let retriever = Retriever::new(index, &args.weighting)?.with_top_k(args.top_k);
    tracing::info!(queries = queries.len(), ?retriever, "running queries");

    match &args.output {
        Some(path) => {
            let f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let mut out = BufWriter::new(f);
            write_results(&retriever, queries, args.scores, &mut out)?;
            out.flush()?;
            tracing::info!(output = %path.display(), "results written");
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_results(&retriever, queries, args.scores, &mut out)?;
        }
    }
    Ok(())
}
