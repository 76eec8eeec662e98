//! Undirected view of the citation graph
//!
//! Shared by centrality and k-core. Built on demand, never cached.

use super::CitationIndex;
use std::collections::{HashMap, HashSet};

/// Undirected reference graph over the works of an index.
///
/// Each resolved reference `A -> B` becomes the edge `A - B`. Parallel edges
/// (duplicate references, or `A -> B` together with `B -> A`) collapse into
/// one, and self-references are dropped. Nodes are numbered in index order.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<'a> {
    ids: Vec<&'a str>,
    position: HashMap<&'a str, usize>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<'a> UndirectedGraph<'a> {
    /// Build the undirected graph for every work in the index
    pub fn build(index: &CitationIndex<'a>) -> Self {
        let ids: Vec<&'a str> = index.ids().to_vec();
        let position: HashMap<&'a str, usize> =
            ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); ids.len()];
        let mut seen: HashSet<(usize, usize)> = HashSet::new();

        for work in index.works() {
            let Some(&from) = position.get(work.id.as_str()) else {
                continue;
            };

            for reference in &work.referenced_work_ids {
                let Some(&to) = position.get(reference.as_str()) else {
                    continue;
                };
                if from == to {
                    continue;
                }

                let key = (from.min(to), from.max(to));
                if seen.insert(key) {
                    adjacency[from].push(to);
                    adjacency[to].push(from);
                }
            }
        }

        Self {
            ids,
            position,
            adjacency,
            edge_count: seen.len(),
        }
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of distinct undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Identifier of node `node`
    pub fn id(&self, node: usize) -> &'a str {
        self.ids[node]
    }

    pub fn ids(&self) -> &[&'a str] {
        &self.ids
    }

    /// Node number of an identifier
    pub fn position(&self, id: &str) -> Option<usize> {
        self.position.get(id).copied()
    }

    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    pub fn degree(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Work;

    fn work(id: &str, refs: &[&str]) -> Work {
        Work::new(id, refs.iter().copied())
    }

    fn neighbor_ids<'a>(graph: &UndirectedGraph<'a>, id: &str) -> Vec<&'a str> {
        let node = graph.position(id).unwrap();
        graph.neighbors(node).iter().map(|&n| graph.id(n)).collect()
    }

    #[test]
    fn test_graph_construction() {
        let works = vec![
            work("A", &[]),
            work("B", &["A"]),
            work("C", &["A"]),
            work("D", &["B", "C"]),
        ];
        let index = CitationIndex::build(&works);
        let graph = UndirectedGraph::build(&index);

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(neighbor_ids(&graph, "A"), vec!["B", "C"]);
        assert_eq!(neighbor_ids(&graph, "D"), vec!["B", "C"]);
        assert_eq!(neighbor_ids(&graph, "B"), vec!["A", "D"]);
    }

    #[test]
    fn test_parallel_edges_collapse() {
        // A cites B twice, B cites A back
        let works = vec![work("A", &["B", "B"]), work("B", &["A"])];
        let index = CitationIndex::build(&works);
        let graph = UndirectedGraph::build(&index);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 1);
    }

    #[test]
    fn test_self_reference_and_dangling_dropped() {
        let works = vec![work("A", &["A", "X"]), work("B", &[])];
        let index = CitationIndex::build(&works);
        let graph = UndirectedGraph::build(&index);

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(0), 0);
        assert!(graph.position("X").is_none());
    }
}
