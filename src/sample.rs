//! Monte Carlo estimator: count visits along one long random-surfer walk.

use crate::graph::Graph;
use crate::transition::{transition, validate_damping};
use crate::{Error, Result};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleConfig {
    pub damping: f64,
    pub samples: usize,
    /// Fixed RNG seed for reproducible runs; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self { damping: 0.85, samples: 10_000, seed: None }
    }
}

impl SampleConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if self.samples == 0 {
            return Err(Error::InvalidSampleCount(self.samples));
        }
        Ok(())
    }
}

/// Estimate PageRank by simulating a `config.samples`-step random surfer.
///
/// The walk starts at a uniformly random node; every further step draws the
/// next node from the [`transition`] distribution of the current one. Each
/// step increments exactly one visit counter, so the returned scores
/// (count / samples) sum to 1 by construction.
///
/// The visit counters are local to this call; each invocation returns a
/// fresh, independent estimate. Assumes a non-empty graph and a valid
/// config; use [`sample_pagerank_checked`] to validate.
pub fn sample_pagerank(graph: &Graph, config: SampleConfig) -> Vec<f64> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };

    let mut visits = vec![0u64; n];
    let mut curr = rng.random_range(0..n);
    visits[curr] += 1;
    for _ in 1..config.samples {
        let probs = transition(graph, curr, config.damping);
        curr = weighted_choice(&probs, &mut rng);
        visits[curr] += 1;
    }

    visits
        .iter()
        .map(|&count| count as f64 / config.samples as f64)
        .collect()
}

pub fn sample_pagerank_checked(graph: &Graph, config: SampleConfig) -> Result<Vec<f64>> {
    config.validate()?;
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }
    Ok(sample_pagerank(graph, config))
}

/// One uniform draw walked over the cumulative distribution in node-id order.
fn weighted_choice<R: Rng>(probs: &[f64], rng: &mut R) -> usize {
    let draw: f64 = rng.random();
    let mut cumulative = 0.0;
    for (i, &p) in probs.iter().enumerate() {
        cumulative += p;
        if draw < cumulative {
            return i;
        }
    }
    // Rounding can leave the cumulative total a hair under 1.0.
    probs.len() - 1
}
