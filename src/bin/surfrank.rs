use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use surfrank::{
    iterate_pagerank_checked, load_corpus, sample_pagerank_checked, IterateConfig, RankTable,
    SampleConfig,
};

/// Estimate PageRank for a corpus of HTML pages, by sampling and by iteration.
#[derive(Debug, Parser)]
#[command(name = "surfrank", version, about)]
struct Args {
    /// Directory of .html pages forming the corpus.
    corpus: PathBuf,

    /// Probability of following an out-link instead of jumping anywhere.
    #[arg(long, default_value_t = 0.85)]
    damping: f64,

    /// Number of random-surfer samples.
    #[arg(long, default_value_t = 10_000)]
    samples: usize,

    /// Per-node convergence threshold for the iterative estimator.
    #[arg(long, default_value_t = 1e-3)]
    tolerance: f64,

    /// Fix the sampler's RNG seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let graph = load_corpus(&args.corpus)
        .with_context(|| format!("failed to load corpus from {}", args.corpus.display()))?;

    let sample_cfg = SampleConfig {
        damping: args.damping,
        samples: args.samples,
        seed: args.seed,
    };
    let iterate_cfg = IterateConfig {
        damping: args.damping,
        tolerance: args.tolerance,
        ..Default::default()
    };

    let sampled = RankTable::new(&graph, sample_pagerank_checked(&graph, sample_cfg)?);
    let iterated = RankTable::new(&graph, iterate_pagerank_checked(&graph, iterate_cfg)?);

    let heading = format!("PageRank Results from Sampling (n = {})", args.samples);
    println!("{}", heading.bold());
    print!("{sampled}");
    println!("{}", "PageRank Results from Iteration".bold());
    print!("{iterated}");

    Ok(())
}
