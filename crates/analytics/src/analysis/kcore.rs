//! k-core decomposition by iterative degree pruning

use crate::citation::{CitationIndex, UndirectedGraph};
use crate::model::Work;

/// Outcome of one pruning run
#[derive(Debug, Clone)]
pub struct KCore<'a> {
    /// Surviving works in index order
    pub members: Vec<&'a Work>,

    /// Full passes over the node list, the last one removing nothing
    pub passes: usize,
}

/// Works of the maximal subgraph in which every node has degree >= `k`.
///
/// Each pass walks the nodes in index order and removes every node whose
/// current degree is below `k`, decrementing its surviving neighbors as it
/// goes. Passes repeat until one removes nothing. `k <= 0` keeps everything.
pub fn k_core<'a>(index: &CitationIndex<'a>, k: i64) -> KCore<'a> {
    let graph = UndirectedGraph::build(index);
    let (removed, passes) = prune(&graph, k);

    let members = (0..graph.node_count())
        .filter(|&node| !removed[node])
        .filter_map(|node| index.lookup(graph.id(node)))
        .collect();

    KCore { members, passes }
}

fn prune(graph: &UndirectedGraph<'_>, k: i64) -> (Vec<bool>, usize) {
    let n = graph.node_count();
    let mut degrees: Vec<i64> = (0..n).map(|node| graph.degree(node) as i64).collect();
    let mut removed = vec![false; n];
    let mut passes = 0;

    loop {
        passes += 1;
        let mut changed = false;

        for node in 0..n {
            if removed[node] || degrees[node] >= k {
                continue;
            }

            removed[node] = true;
            changed = true;
            for &neighbor in graph.neighbors(node) {
                if !removed[neighbor] {
                    degrees[neighbor] -= 1;
                }
            }
        }

        if !changed {
            break;
        }
    }

    (removed, passes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn work(id: &str, refs: &[&str]) -> Work {
        Work::new(id, refs.iter().copied())
    }

    fn member_ids(works: &[Work], k: i64) -> Vec<String> {
        let index = CitationIndex::build(works);
        k_core(&index, k).members.iter().map(|w| w.id.clone()).collect()
    }

    fn toy() -> Vec<Work> {
        vec![
            work("A", &[]),
            work("B", &["A"]),
            work("C", &["A"]),
            work("D", &["B", "C"]),
        ]
    }

    #[test]
    fn test_toy_graph_is_a_four_cycle() {
        let works = toy();
        assert_eq!(member_ids(&works, 1), vec!["A", "B", "C", "D"]);
        assert_eq!(member_ids(&works, 2), vec!["A", "B", "C", "D"]);
        assert!(member_ids(&works, 3).is_empty());
    }

    #[test]
    fn test_non_positive_k_keeps_everything() {
        let works = vec![work("A", &[]), work("B", &["missing"]), work("C", &["A"])];
        assert_eq!(member_ids(&works, 0), vec!["A", "B", "C"]);
        assert_eq!(member_ids(&works, -3), vec!["A", "B", "C"]);

        let index = CitationIndex::build(&works);
        assert_eq!(k_core(&index, 0).passes, 1);
    }

    #[test]
    fn test_pruning_cascades() {
        // triangle T1-T2-T3 with a tail T3 - X - Y, Y listed before X
        let works = vec![
            work("T1", &["T2", "T3"]),
            work("T2", &["T3"]),
            work("T3", &[]),
            work("Y", &["X"]),
            work("X", &["T3"]),
        ];
        let index = CitationIndex::build(&works);
        let core = k_core(&index, 2);

        // Y (deg 1) goes first, X drops to 1 and goes in the same pass
        let ids: Vec<&str> = core.members.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["T1", "T2", "T3"]);
        assert_eq!(core.passes, 2);
        assert_eq!(member_ids(&works, 1), vec!["T1", "T2", "T3", "Y", "X"]);
    }

    #[test]
    fn test_later_pass_needed() {
        // X precedes Y in index order, so X survives the first pass and falls in the second
        let works = vec![
            work("T1", &["T2", "T3"]),
            work("T2", &["T3"]),
            work("T3", &[]),
            work("X", &["T3", "Y"]),
            work("Y", &[]),
        ];
        let index = CitationIndex::build(&works);
        let core = k_core(&index, 2);

        let ids: Vec<&str> = core.members.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["T1", "T2", "T3"]);
        assert_eq!(core.passes, 3);
    }

    #[test]
    fn test_duplicate_references_do_not_inflate_degree() {
        let works = vec![work("A", &["B", "B", "B"]), work("B", &["A"])];
        assert!(member_ids(&works, 2).is_empty());
        assert_eq!(member_ids(&works, 1), vec!["A", "B"]);
    }

    #[test]
    fn test_random_graphs_idempotent() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let n: usize = rng.gen_range(1..20);
            let works: Vec<Work> = (0..n)
                .map(|i| {
                    let refs: Vec<String> = (0..rng.gen_range(0..5))
                        .map(|_| format!("W{}", rng.gen_range(0..n)))
                        .collect();
                    Work::new(format!("W{}", i), refs)
                })
                .collect();
            let k = rng.gen_range(0..4);

            let first = member_ids(&works, k);
            let survivors: Vec<Work> = works
                .iter()
                .filter(|w| first.contains(&w.id))
                .cloned()
                .collect();
            let second = member_ids(&survivors, k);

            assert_eq!(first, second);
            assert_eq!(member_ids(&works, 0).len(), n);
        }
    }
}
