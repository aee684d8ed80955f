//! Compile-time defaults for retrieval sessions.
//!
//! Runtime configuration happens through the `retrieve` command line.

use crate::weighting::Scheme;

/// Number of documents returned per query unless overridden.
pub const DEFAULT_TOP_K: usize = 10;

/// Upper bound accepted by [`crate::Retriever::with_top_k`].
pub const MAX_TOP_K: usize = 100;

/// Weighting used by the command line when none is given.
pub const DEFAULT_SCHEME: Scheme = Scheme::TfIdf;
