//! Deterministic fixed-point estimator.

use crate::graph::Graph;
use crate::transition::validate_damping;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterateConfig {
    pub damping: f64,
    /// Per-node convergence threshold: a round is final when no node moved
    /// by this much.
    pub tolerance: f64,
    /// Safety bound on round count; convergence is expected far earlier.
    pub max_rounds: usize,
}

impl Default for IterateConfig {
    fn default() -> Self {
        Self { damping: 0.85, tolerance: 1e-3, max_rounds: 100 }
    }
}

impl IterateConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(Error::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

/// Outcome of an iterative run: final scores plus convergence telemetry.
#[derive(Debug, Clone)]
pub struct IterateRun {
    /// Scores indexed by node id, summing to 1.
    pub scores: Vec<f64>,
    /// Rounds actually performed.
    pub rounds: usize,
    /// Largest per-node change in the final round.
    pub delta: f64,
    pub converged: bool,
}

/// Estimate PageRank by running the fixed-point recurrence from the uniform
/// table. See [`iterate_pagerank_run`] for the semantics.
pub fn iterate_pagerank(graph: &Graph, config: IterateConfig) -> Vec<f64> {
    iterate_pagerank_run(graph, config).scores
}

pub fn iterate_pagerank_checked(graph: &Graph, config: IterateConfig) -> Result<Vec<f64>> {
    config.validate()?;
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }
    Ok(iterate_pagerank(graph, config))
}

pub fn iterate_pagerank_run(graph: &Graph, config: IterateConfig) -> IterateRun {
    let n = graph.node_count();
    let uniform = vec![1.0 / n.max(1) as f64; n];
    iterate_pagerank_from(graph, config, uniform)
}

/// Run the recurrence starting from a caller-supplied rank table.
///
/// Each round rebuilds the full table from the previous round's values
/// (Jacobi update), so the result does not depend on node id order:
///
/// `new[p] = (1 - d)/n + d * Σ old[q] / out_degree(q)` over all `q` linking
/// to `p`, where a sink `q` counts as linking to every node uniformly and
/// contributes `old[q] / n` everywhere. That redistribution keeps the total
/// mass at 1; dropped, it leaks out of the system at sink nodes.
///
/// Termination: the loop ends when the largest per-node change of a round —
/// all nodes measured against the same prior table — falls below
/// `config.tolerance`, or at `config.max_rounds`. Each round contracts
/// per-node deltas by at least the damping factor, so for any tolerance > 0
/// the threshold is reached in finitely many rounds.
pub fn iterate_pagerank_from(graph: &Graph, config: IterateConfig, initial: Vec<f64>) -> IterateRun {
    let n = graph.node_count();
    if n == 0 {
        return IterateRun { scores: Vec::new(), rounds: 0, delta: 0.0, converged: true };
    }
    debug_assert_eq!(initial.len(), n);

    let n_f64 = n as f64;
    let teleport = (1.0 - config.damping) / n_f64;
    let mut scores = initial;
    let mut new_scores = vec![0.0; n];

    let mut rounds = 0;
    let mut delta = f64::MAX;
    while rounds < config.max_rounds && delta >= config.tolerance {
        rounds += 1;

        let sink_mass: f64 = (0..n)
            .filter(|&u| graph.out_degree(u) == 0)
            .map(|u| scores[u])
            .sum();
        new_scores.fill(teleport + config.damping * sink_mass / n_f64);

        for u in 0..n {
            let deg = graph.out_degree(u);
            if deg > 0 {
                let share = config.damping * scores[u] / deg as f64;
                for &v in graph.out_links(u) {
                    new_scores[v] += share;
                }
            }
        }

        delta = scores
            .iter()
            .zip(new_scores.iter())
            .map(|(old, new)| (old - new).abs())
            .fold(0.0, f64::max);
        std::mem::swap(&mut scores, &mut new_scores);
    }

    IterateRun { scores, rounds, delta, converged: delta < config.tolerance }
}
