//! Citation graph representation
//!
//! Identifier index, citation counting, and the undirected view used by the
//! whole-graph algorithms.

mod graph;
mod index;

pub use graph::UndirectedGraph;
pub use index::{count_citations, CitationCounts, CitationIndex};
