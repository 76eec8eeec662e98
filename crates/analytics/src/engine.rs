//! Analytics facade
//!
//! Built once per corpus snapshot. Citation counts are computed eagerly at
//! construction; every query afterwards is read-only and repeatable.

use crate::analysis::{centrality, hindex, kcore, summary, CorpusSummary, HIndexReport};
use crate::citation::{count_citations, CitationCounts, CitationIndex, UndirectedGraph};
use crate::model::Work;
use graphcite_common::{metrics, AnalysisConfig, AppError, DuplicateIdPolicy, Result};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Citation analytics over a borrowed corpus
#[derive(Debug, Clone)]
pub struct CitationAnalytics<'a> {
    index: CitationIndex<'a>,
    counts: CitationCounts,
    config: AnalysisConfig,
}

impl<'a> CitationAnalytics<'a> {
    /// Index a corpus with the default configuration.
    ///
    /// Never fails: duplicate identifiers keep the last record, and an empty
    /// slice yields an empty engine.
    pub fn new(works: &'a [Work]) -> Self {
        Self::build(works, AnalysisConfig::default())
    }

    /// Index a corpus, applying the configured duplicate identifier policy.
    ///
    /// Under [`DuplicateIdPolicy::Reject`] an empty identifier is a
    /// validation error and a repeated one is [`AppError::DuplicateWork`].
    pub fn with_config(works: &'a [Work], config: &AnalysisConfig) -> Result<Self> {
        if config.duplicate_ids == DuplicateIdPolicy::Reject {
            if let Some(position) = works.iter().position(|work| work.id.trim().is_empty()) {
                return Err(AppError::Validation {
                    message: format!("work at position {} has an empty identifier", position),
                    field: Some("id".to_string()),
                });
            }
        }

        let engine = Self::build(works, config.clone());

        if config.duplicate_ids == DuplicateIdPolicy::Reject {
            if let Some(id) = engine.index.duplicate_ids().first() {
                return Err(AppError::DuplicateWork { id: id.to_string() });
            }
        }

        Ok(engine)
    }

    fn build(works: &'a [Work], config: AnalysisConfig) -> Self {
        let start = Instant::now();
        let index = CitationIndex::build(works);
        let counts = count_citations(&index);

        if !index.duplicate_ids().is_empty() {
            warn!(
                duplicates = index.duplicate_ids().len(),
                first = index.duplicate_ids()[0],
                "Duplicate work identifiers, keeping the last record for each"
            );
        }

        info!(
            works = works.len(),
            indexed = index.len(),
            citations = counts.total(),
            dangling_references = counts.dangling_references(),
            "Citation index built"
        );
        metrics::record_dangling_references(counts.dangling_references());
        metrics::record_analysis("index", start.elapsed().as_secs_f64(), index.len());

        Self { index, counts, config }
    }

    /// Look up a work by identifier
    pub fn lookup(&self, id: &str) -> Option<&'a Work> {
        self.index.lookup(id)
    }

    /// Look up a work, failing with [`AppError::WorkNotFound`]
    pub fn require(&self, id: &str) -> Result<&'a Work> {
        self.lookup(id).ok_or_else(|| AppError::WorkNotFound { id: id.to_string() })
    }

    /// Number of works citing `id`, `None` if `id` is not in the corpus
    pub fn citation_count(&self, id: &str) -> Option<usize> {
        self.counts.get(id)
    }

    /// The derived citation counts of the whole corpus
    pub fn citation_counts(&self) -> &CitationCounts {
        &self.counts
    }

    /// Works referencing `id`, in index order
    pub fn citers(&self, id: &str) -> Vec<&'a Work> {
        hindex::citers(&self.index, id)
    }

    pub fn h_index(&self, id: &str) -> usize {
        hindex::h_index(&self.index, &self.counts, id)
    }

    pub fn h_median(&self, id: &str) -> usize {
        hindex::h_median(&self.index, &self.counts, id)
    }

    pub fn h_core(&self, id: &str) -> Vec<&'a Work> {
        hindex::h_core(&self.index, &self.counts, id)
    }

    /// h-index, h-median and h-core together
    pub fn h_report(&self, id: &str) -> HIndexReport {
        hindex::report(&self.index, &self.counts, id)
    }

    /// Shortest-path membership score for every work
    pub fn betweenness_centrality(&self) -> HashMap<String, f64> {
        self.ordered_centrality().into_iter().collect()
    }

    /// Works by descending centrality, ties in index order
    pub fn ranked_centrality(&self, limit: usize) -> Vec<(String, f64)> {
        let mut ranked = self.ordered_centrality();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(limit);
        ranked
    }

    /// `ranked_centrality` limited to the configured top-N
    pub fn top_central(&self) -> Vec<(String, f64)> {
        self.ranked_centrality(self.config.centrality_top_n)
    }

    fn ordered_centrality(&self) -> Vec<(String, f64)> {
        let start = Instant::now();
        let graph = UndirectedGraph::build(&self.index);
        let scores = centrality::betweenness(&graph);
        let elapsed = start.elapsed().as_secs_f64();

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            elapsed_ms = elapsed * 1000.0,
            "Betweenness centrality computed"
        );
        metrics::record_analysis("betweenness", elapsed, graph.node_count());

        scores
            .into_iter()
            .enumerate()
            .map(|(node, score)| (graph.id(node).to_string(), score))
            .collect()
    }

    /// Works of the `k`-core, in index order. `k <= 0` returns every work.
    pub fn k_core_decomposition(&self, k: i64) -> Vec<&'a Work> {
        let start = Instant::now();
        let core = kcore::k_core(&self.index, k);
        let elapsed = start.elapsed().as_secs_f64();

        debug!(
            k,
            passes = core.passes,
            survivors = core.members.len(),
            removed = self.index.len() - core.members.len(),
            "k-core pruning finished"
        );
        metrics::record_analysis("k_core", elapsed, self.index.len());

        core.members
    }

    /// Reference statistics for the whole corpus
    pub fn summary(&self) -> CorpusSummary {
        summary::summarize(&self.index, &self.counts)
    }

    /// Number of distinct work identifiers
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
