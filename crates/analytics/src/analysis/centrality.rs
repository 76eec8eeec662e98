//! Betweenness centrality by shortest-path membership
//!
//! All-pairs distances come from one BFS per node over the undirected graph,
//! `O(V * (V + E))`, which beats Floyd-Warshall on sparse citation graphs.
//!
//! For every unordered pair `(s, t)` at finite distance, every other node `v`
//! with `d(s, v) + d(v, t) == d(s, t)` gains 1.0. This counts membership on
//! *some* shortest path. It does not split credit between multiple shortest
//! paths the way Brandes' algorithm does, and is not meant to.

use crate::citation::UndirectedGraph;
use std::collections::VecDeque;

const UNREACHABLE: u32 = u32::MAX;

/// Centrality score of every node, indexed by node number
pub fn betweenness(graph: &UndirectedGraph<'_>) -> Vec<f64> {
    let n = graph.node_count();
    let distances: Vec<Vec<u32>> = (0..n).map(|source| bfs_distances(graph, source)).collect();
    let mut scores = vec![0.0; n];

    for s in 0..n {
        for t in (s + 1)..n {
            let d_st = distances[s][t];
            if d_st == UNREACHABLE {
                continue;
            }

            for (v, score) in scores.iter_mut().enumerate() {
                if v == s || v == t {
                    continue;
                }
                let d_sv = distances[s][v];
                let d_vt = distances[v][t];
                if d_sv == UNREACHABLE || d_vt == UNREACHABLE {
                    continue;
                }
                if u64::from(d_sv) + u64::from(d_vt) == u64::from(d_st) {
                    *score += 1.0;
                }
            }
        }
    }

    scores
}

/// Hop distance from `source` to every node, `UNREACHABLE` if disconnected
fn bfs_distances(graph: &UndirectedGraph<'_>, source: usize) -> Vec<u32> {
    let mut distances = vec![UNREACHABLE; graph.node_count()];
    let mut queue = VecDeque::new();

    distances[source] = 0;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next = distances[current] + 1;
        for &neighbor in graph.neighbors(current) {
            if distances[neighbor] == UNREACHABLE {
                distances[neighbor] = next;
                queue.push_back(neighbor);
            }
        }
    }

    distances
}
