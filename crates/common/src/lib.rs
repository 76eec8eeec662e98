//! Graphcite Common Library
//!
//! Shared code for the Graphcite crates:
//! - Error types and handling
//! - Configuration management
//! - Tracing setup
//! - Metrics

pub mod config;
pub mod errors;
pub mod metrics;
pub mod telemetry;

// Re-export commonly used types
pub use crate::config::{AnalysisConfig, DuplicateIdPolicy, GraphciteConfig, ObservabilityConfig};
pub use crate::errors::{AppError, ErrorCode, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
