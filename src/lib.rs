//! `surfrank`: PageRank estimation over string-labelled link graphs.
//!
//! Two independent estimators run against the same immutable [`Graph`]:
//! - [`sample_pagerank`]: a random-surfer simulation driven by the
//!   [`transition`] model, counting visit frequencies over a long walk.
//! - [`iterate_pagerank`]: the deterministic fixed-point recurrence, the
//!   ground-truth baseline the sampler is compared against.
//!
//! Public invariants (must not drift):
//! - **Node order**: score vectors are indexed by dense node id \(0..n-1\) in
//!   the graph's label-insertion order; [`RankTable`] maps ids back to labels.
//! - **Mass conservation**: transition distributions and both estimators'
//!   outputs sum to 1 over the full node set, sink nodes included.
//! - **Determinism**: `iterate_pagerank` is deterministic given identical
//!   inputs + config; `sample_pagerank` is deterministic given a fixed seed.
//!
//! Swappable (allowed to change without breaking the contract):
//! - iteration strategy and convergence details (so long as tolerance
//!   semantics remain correct)
//! - internal graph storage (so long as invariants hold)

pub mod corpus;
pub mod graph;
pub mod iterate;
pub mod rank;
pub mod sample;
pub mod transition;

pub use corpus::load_corpus;
pub use graph::Graph;
pub use iterate::{
    iterate_pagerank, iterate_pagerank_checked, iterate_pagerank_from, iterate_pagerank_run,
    IterateConfig, IterateRun,
};
pub use rank::{normalize, rank_both, top_k, RankTable};
pub use sample::{sample_pagerank, sample_pagerank_checked, SampleConfig};
pub use transition::{transition, transition_checked};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("damping factor must be in (0, 1), got {0}")]
    InvalidDamping(f64),
    #[error("sample count must be at least 1, got {0}")]
    InvalidSampleCount(usize),
    #[error("convergence tolerance must be finite and > 0, got {0}")]
    InvalidTolerance(f64),
    #[error("graph has no nodes")]
    EmptyGraph,
    #[error("unknown node: {0:?}")]
    UnknownNode(String),
    #[error("corpus ingestion failed: {0}")]
    Corpus(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
