//! Random-surfer transition model.

use crate::graph::Graph;
use crate::{Error, Result};

/// Probability distribution over "where the surfer goes next" from `node`,
/// indexed by node id.
///
/// Every node gets the uniform floor `(1 - damping) / n`; each out-link
/// target additionally gets `damping / out_degree` on top of it. A sink node
/// (no out-links) collapses to the exact uniform distribution `1/n`, so the
/// result is a proper distribution in every case.
///
/// Assumes `node < graph.node_count()` and `damping` in (0, 1); use
/// [`transition_checked`] to validate against caller input.
pub fn transition(graph: &Graph, node: usize, damping: f64) -> Vec<f64> {
    let n = graph.node_count();
    let linked = graph.out_links(node);
    if linked.is_empty() {
        return vec![1.0 / n as f64; n];
    }
    let mut probs = vec![(1.0 - damping) / n as f64; n];
    let share = damping / linked.len() as f64;
    for &v in linked {
        probs[v] += share;
    }
    probs
}

/// Validating entrypoint to [`transition`], addressing the node by label.
pub fn transition_checked(graph: &Graph, node: &str, damping: f64) -> Result<Vec<f64>> {
    validate_damping(damping)?;
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }
    let id = graph
        .index_of(node)
        .ok_or_else(|| Error::UnknownNode(node.to_owned()))?;
    Ok(transition(graph, id, damping))
}

pub(crate) fn validate_damping(damping: f64) -> Result<()> {
    // The negated form also rejects NaN.
    if !(damping > 0.0 && damping < 1.0) {
        return Err(Error::InvalidDamping(damping));
    }
    Ok(())
}
