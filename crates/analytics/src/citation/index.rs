//! Identifier lookup and citation counting

use crate::model::Work;
use std::collections::HashMap;

/// Lookup from work identifier to the caller's record.
///
/// Borrows the work slice, so it can never outlive the corpus. On duplicate
/// identifiers the last record wins the lookup; the repeated identifiers are
/// kept in [`CitationIndex::duplicate_ids`].
#[derive(Debug, Clone)]
pub struct CitationIndex<'a> {
    works: &'a [Work],

    by_id: HashMap<&'a str, &'a Work>,

    /// Unique identifiers in first-occurrence order. This is the iteration
    /// order of every whole-graph query.
    order: Vec<&'a str>,

    duplicates: Vec<&'a str>,
}

impl<'a> CitationIndex<'a> {
    /// Index a corpus
    pub fn build(works: &'a [Work]) -> Self {
        let mut by_id: HashMap<&'a str, &'a Work> = HashMap::with_capacity(works.len());
        let mut order = Vec::with_capacity(works.len());
        let mut duplicates = Vec::new();

        for work in works {
            let id = work.id.as_str();
            if by_id.insert(id, work).is_none() {
                order.push(id);
            } else {
                duplicates.push(id);
            }
        }

        Self {
            works,
            by_id,
            order,
            duplicates,
        }
    }

    /// Look up a work by identifier
    pub fn lookup(&self, id: &str) -> Option<&'a Work> {
        self.by_id.get(id).copied()
    }

    /// True if the identifier belongs to the corpus
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// The full corpus in input order, duplicates included
    pub fn works(&self) -> &'a [Work] {
        self.works
    }

    /// Unique identifiers in index order
    pub fn ids(&self) -> &[&'a str] {
        &self.order
    }

    /// Indexed records in index order (one per identifier)
    pub fn iter(&self) -> impl Iterator<Item = &'a Work> + '_ {
        self.order.iter().filter_map(|id| self.by_id.get(id).copied())
    }

    /// Identifiers that appeared more than once, one entry per repeat
    pub fn duplicate_ids(&self) -> &[&'a str] {
        &self.duplicates
    }

    /// Number of distinct identifiers
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Citation (in-degree) counts derived from one pass over a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationCounts {
    counts: HashMap<String, usize>,
    dangling: usize,
}

impl CitationCounts {
    /// Citation count of a known work, `None` for identifiers outside the corpus
    pub fn get(&self, id: &str) -> Option<usize> {
        self.counts.get(id).copied()
    }

    /// Citation count, 0 for unknown identifiers
    pub fn get_or_zero(&self, id: &str) -> usize {
        self.get(id).unwrap_or(0)
    }

    /// Sum of all citation counts (resolved reference occurrences)
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Reference occurrences whose target is not in the corpus
    pub fn dangling_references(&self) -> usize {
        self.dangling
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(id, &count)| (id.as_str(), count))
    }
}

/// Count incoming citations for every work in the index.
///
/// Every known work starts at zero. Each reference occurrence that resolves
/// to a known work adds exactly one, so a work listed twice in the same
/// reference list is counted twice. Unresolved references are skipped.
pub fn count_citations(index: &CitationIndex<'_>) -> CitationCounts {
    let mut counts: HashMap<String, usize> =
        index.ids().iter().map(|id| (id.to_string(), 0)).collect();
    let mut dangling = 0;

    for work in index.works() {
        for reference in &work.referenced_work_ids {
            match counts.get_mut(reference.as_str()) {
                Some(count) => *count += 1,
                None => dangling += 1,
            }
        }
    }

    CitationCounts { counts, dangling }
}
