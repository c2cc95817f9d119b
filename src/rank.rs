//! Rank tables and ranking utilities.

use crate::graph::Graph;
use crate::iterate::{iterate_pagerank, IterateConfig};
use crate::sample::{sample_pagerank, SampleConfig};
use ordered_float::NotNan;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

/// Final artifact of an estimator run: node labels bound to their scores.
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct RankTable {
    labels: Vec<String>,
    scores: Vec<f64>,
}

impl RankTable {
    /// Bind a score vector (indexed by node id) to the graph's labels.
    pub fn new(graph: &Graph, scores: Vec<f64>) -> Self {
        debug_assert_eq!(graph.node_count(), scores.len());
        Self { labels: graph.labels().to_vec(), scores }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == label)?;
        Some(self.scores[i])
    }

    /// Scores in node-id order.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn sum(&self) -> f64 {
        self.scores.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels.iter().map(String::as_str).zip(self.scores.iter().copied())
    }

    /// Entries sorted by label, the usual order for printed reports.
    pub fn sorted_by_label(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.iter().collect();
        entries.sort_unstable_by_key(|&(label, _)| label);
        entries
    }

    /// The `k` highest-scoring nodes, best first.
    pub fn top_k(&self, k: usize) -> Vec<(&str, f64)> {
        top_k(&self.scores, k)
            .into_iter()
            .map(|(i, score)| (self.labels[i].as_str(), score))
            .collect()
    }
}

impl fmt::Display for RankTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, score) in self.sorted_by_label() {
            writeln!(f, "  {label}: {score:.4}")?;
        }
        Ok(())
    }
}

/// Run both estimators against the same graph and return their tables as
/// `(sampled, iterated)`.
///
/// The estimators share only the read-only graph and keep private working
/// state, so with the `parallel` feature the two runs proceed on separate
/// rayon tasks.
pub fn rank_both(
    graph: &Graph,
    sample_config: SampleConfig,
    iterate_config: IterateConfig,
) -> (RankTable, RankTable) {
    #[cfg(feature = "parallel")]
    let (sampled, iterated) = rayon::join(
        || sample_pagerank(graph, sample_config),
        || iterate_pagerank(graph, iterate_config),
    );
    #[cfg(not(feature = "parallel"))]
    let (sampled, iterated) = (
        sample_pagerank(graph, sample_config),
        iterate_pagerank(graph, iterate_config),
    );
    (RankTable::new(graph, sampled), RankTable::new(graph, iterated))
}

/// Indices of the `k` largest finite positive scores, best first.
pub fn top_k(scores: &[f64], k: usize) -> Vec<(usize, f64)> {
    if k == 0 || scores.is_empty() {
        return Vec::new();
    }
    let mut heap = BinaryHeap::with_capacity(k + 1);
    for (i, &score) in scores.iter().enumerate() {
        if !score.is_finite() || score <= 0.0 {
            continue;
        }
        let s = NotNan::new(score).unwrap();
        if heap.len() < k {
            heap.push(Reverse((s, i)));
        } else if let Some(&Reverse((min_score, _))) = heap.peek() {
            if s > min_score {
                heap.pop();
                heap.push(Reverse((s, i)));
            }
        }
    }
    let mut results: Vec<(usize, f64)> = heap
        .into_iter()
        .map(|Reverse((s, i))| (i, s.into_inner()))
        .collect();
    results.sort_unstable_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    results
}

/// Scale scores in place so they sum to 1 (no-op when the sum is not positive).
pub fn normalize(scores: &mut [f64]) {
    let sum: f64 = scores.iter().sum();
    if sum > 0.0 {
        for s in scores {
            *s /= sum;
        }
    }
}
