//! Immutable string-labelled directed link graph.

use std::collections::HashMap;

/// A directed graph over string-labelled nodes, built once and never mutated.
///
/// Labels are interned to dense ids `0..n` in insertion order, and out-link
/// lists are stored as sorted id slices so the estimators can walk them
/// without allocating. The node set is exactly the set of source labels
/// passed to [`Graph::from_links`]; out-links pointing outside that set, and
/// self-links, are dropped at construction.
#[derive(Debug, Clone)]
pub struct Graph {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    adj: Vec<Vec<usize>>,
}

impl Graph {
    /// Build a graph from `(label, out-link labels)` pairs.
    ///
    /// Duplicate out-links collapse (set semantics). If the same source label
    /// appears more than once its out-links are merged.
    pub fn from_links<'a, I, O>(links: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, O)>,
        O: IntoIterator<Item = &'a str>,
    {
        let pairs: Vec<(&str, Vec<&str>)> = links
            .into_iter()
            .map(|(label, outs)| (label, outs.into_iter().collect()))
            .collect();

        let mut labels = Vec::with_capacity(pairs.len());
        let mut index = HashMap::with_capacity(pairs.len());
        for (label, _) in &pairs {
            if !index.contains_key(*label) {
                index.insert((*label).to_owned(), labels.len());
                labels.push((*label).to_owned());
            }
        }

        let mut adj = vec![Vec::new(); labels.len()];
        for (label, outs) in &pairs {
            let u = index[*label];
            for target in outs {
                // Self-links and links outside the corpus are discarded.
                if let Some(&v) = index.get(*target) {
                    if v != u {
                        adj[u].push(v);
                    }
                }
            }
        }
        for nbrs in &mut adj {
            nbrs.sort_unstable();
            nbrs.dedup();
        }

        Self { labels, index, adj }
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// All node labels, indexed by node id.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, node: usize) -> &str {
        &self.labels[node]
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Out-neighbor ids of `node`, sorted ascending.
    pub fn out_links(&self, node: usize) -> &[usize] {
        &self.adj[node]
    }

    pub fn out_degree(&self, node: usize) -> usize {
        self.adj[node].len()
    }

    /// `(id, label)` pairs in id order.
    pub fn nodes(&self) -> impl Iterator<Item = (usize, &str)> {
        self.labels.iter().enumerate().map(|(i, l)| (i, l.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_self_links_and_foreign_targets() {
        let g = Graph::from_links(vec![
            ("a", vec!["a", "b", "ghost"]),
            ("b", vec!["a", "a"]),
        ]);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.out_links(0), &[1]);
        assert_eq!(g.out_links(1), &[0]);
    }

    #[test]
    fn interns_in_insertion_order() {
        let g = Graph::from_links(vec![("x", vec!["y"]), ("y", vec![]), ("z", vec!["x"])]);
        assert_eq!(g.labels(), &["x", "y", "z"]);
        assert_eq!(g.index_of("z"), Some(2));
        assert_eq!(g.index_of("missing"), None);
        assert_eq!(g.out_degree(1), 0);
    }

    #[test]
    fn merges_duplicate_sources() {
        let g = Graph::from_links(vec![("a", vec!["b"]), ("b", vec![]), ("a", vec!["c"]), ("c", vec![])]);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.out_links(0), &[1, 2]);
    }
}
