//! h-index family: h-index, h-core and h-median of a focal work
//!
//! All three are computed over the *citers* of the target: the works whose
//! reference list names it. A citer is counted once however many times it
//! lists the target, and a repeated identifier is one citer: only the record
//! that won the lookup is considered.

use crate::citation::{CitationCounts, CitationIndex};
use crate::model::Work;
use graphcite_common::Result;
use serde::{Deserialize, Serialize};

/// h-index, h-median and h-core of one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HIndexReport {
    /// Target work identifier
    pub target: String,

    pub h_index: usize,

    pub h_median: usize,

    /// Identifiers of the h-core, most cited first
    pub h_core: Vec<String>,
}

impl HIndexReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Indexed works that reference `target`, in index order
pub fn citers<'a>(index: &CitationIndex<'a>, target: &str) -> Vec<&'a Work> {
    index.iter().filter(|work| work.references(target)).collect()
}

/// Largest `h` such that `h` citers each have at least `h` citations
pub fn h_index(index: &CitationIndex<'_>, counts: &CitationCounts, target: &str) -> usize {
    let mut citer_counts: Vec<usize> = citers(index, target)
        .iter()
        .map(|work| counts.get_or_zero(&work.id))
        .collect();
    citer_counts.sort_unstable_by(|a, b| b.cmp(a));

    h_from_descending(&citer_counts)
}

/// The `h_index(target)` most cited citers, most cited first.
///
/// Ties keep index order.
pub fn h_core<'a>(index: &CitationIndex<'a>, counts: &CitationCounts, target: &str) -> Vec<&'a Work> {
    let mut core = citers(index, target);
    core.sort_by(|a, b| counts.get_or_zero(&b.id).cmp(&counts.get_or_zero(&a.id)));

    // Same sequence h_index sorts, so h never exceeds the citer count.
    let descending: Vec<usize> = core.iter().map(|work| counts.get_or_zero(&work.id)).collect();
    core.truncate(h_from_descending(&descending));
    core
}

/// Median citation count within the h-core, 0 for an empty core.
///
/// Even-sized cores average the two middle values, truncating.
pub fn h_median(index: &CitationIndex<'_>, counts: &CitationCounts, target: &str) -> usize {
    let mut values: Vec<usize> = h_core(index, counts, target)
        .iter()
        .map(|work| counts.get_or_zero(&work.id))
        .collect();
    median(&mut values)
}

/// Compute all three in one pass over the citers
pub fn report(index: &CitationIndex<'_>, counts: &CitationCounts, target: &str) -> HIndexReport {
    let core = h_core(index, counts, target);
    let mut values: Vec<usize> = core.iter().map(|work| counts.get_or_zero(&work.id)).collect();

    HIndexReport {
        target: target.to_string(),
        h_index: core.len(),
        h_median: median(&mut values),
        h_core: core.iter().map(|work| work.id.clone()).collect(),
    }
}

fn h_from_descending(sorted: &[usize]) -> usize {
    sorted
        .iter()
        .enumerate()
        .take_while(|&(i, &count)| count > i)
        .count()
}

fn median(values: &mut [usize]) -> usize {
    if values.is_empty() {
        return 0;
    }
    values.sort_unstable();

    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2
    }
}
