//! Graph algorithms over an indexed corpus

pub mod centrality;
pub mod hindex;
pub mod kcore;
pub mod summary;

pub use hindex::HIndexReport;
pub use kcore::KCore;
pub use summary::{CorpusSummary, RankedWork};
