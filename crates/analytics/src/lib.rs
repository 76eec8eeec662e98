//! Graphcite Analytics
//!
//! Derived statistics over a citation graph snapshot:
//! - Citation (in-degree) counts
//! - h-index, h-core and h-median of a focal work
//! - Betweenness centrality by shortest-path membership
//! - k-core decomposition
//!
//! Pure in-memory computation: no I/O, no background work. The engine borrows
//! the caller's work slice and never mutates it.
//!
//! ```rust
//! use graphcite_analytics::{CitationAnalytics, Work};
//!
//! let works = vec![
//!     Work::new("A", Vec::<String>::new()),
//!     Work::new("B", ["A"]),
//!     Work::new("C", ["A"]),
//!     Work::new("D", ["B", "C"]),
//! ];
//! let engine = CitationAnalytics::new(&works);
//!
//! assert_eq!(engine.citation_count("A"), Some(2));
//! assert_eq!(engine.h_index("A"), 1);
//! assert_eq!(engine.k_core_decomposition(2).len(), 4);
//! ```

pub mod analysis;
pub mod citation;
pub mod engine;
pub mod model;

// Re-export primary public API at crate root.
pub use analysis::{CorpusSummary, HIndexReport, KCore, RankedWork};
pub use citation::{CitationCounts, CitationIndex, UndirectedGraph};
pub use engine::CitationAnalytics;
pub use model::Work;
