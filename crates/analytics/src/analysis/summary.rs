//! Whole-corpus reference statistics

use crate::citation::{CitationCounts, CitationIndex};
use graphcite_common::Result;
use serde::{Deserialize, Serialize};

/// A work identifier and the number attached to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedWork {
    pub id: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSummary {
    /// Records in the input, duplicates included
    pub total_works: usize,

    /// Reference occurrences that resolve to a work in the corpus
    pub in_corpus_references: usize,

    /// Reference occurrences of any kind, dangling included
    pub total_given_references: usize,

    /// Sum of all citation counts
    pub total_received_references: usize,

    /// Highest citation count, `None` if nothing in the corpus is cited
    pub most_cited: Option<RankedWork>,

    /// Longest reference list, `None` for an empty corpus
    pub most_referencing: Option<RankedWork>,
}

impl CorpusSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub fn summarize(index: &CitationIndex<'_>, counts: &CitationCounts) -> CorpusSummary {
    let works = index.works();

    let total_given_references = works.iter().map(|w| w.referenced_work_ids.len()).sum();
    let in_corpus_references = total_given_references - counts.dangling_references();

    // Ties go to the earliest work: strict comparison while scanning in order
    let mut most_cited: Option<RankedWork> = None;
    for &id in index.ids() {
        let count = counts.get_or_zero(id);
        if count > 0 && most_cited.as_ref().map_or(true, |best| count > best.count) {
            most_cited = Some(RankedWork { id: id.to_string(), count });
        }
    }

    let mut most_referencing: Option<RankedWork> = None;
    for work in works {
        let count = work.referenced_work_ids.len();
        if most_referencing.as_ref().map_or(true, |best| count > best.count) {
            most_referencing = Some(RankedWork { id: work.id.clone(), count });
        }
    }

    CorpusSummary {
        total_works: works.len(),
        in_corpus_references,
        total_given_references,
        total_received_references: counts.total(),
        most_cited,
        most_referencing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citation::count_citations;
    use crate::model::Work;

    fn work(id: &str, refs: &[&str]) -> Work {
        Work::new(id, refs.iter().copied())
    }

    fn summary_of(works: &[Work]) -> CorpusSummary {
        let index = CitationIndex::build(works);
        let counts = count_citations(&index);
        summarize(&index, &counts)
    }

    #[test]
    fn test_summary_counts() {
        let works = vec![
            work("A", &["ext-1"]),
            work("B", &["A"]),
            work("C", &["A", "ext-2"]),
            work("D", &["B", "C", "A"]),
        ];
        let summary = summary_of(&works);

        assert_eq!(summary.total_works, 4);
        assert_eq!(summary.total_given_references, 7);
        assert_eq!(summary.in_corpus_references, 5);
        assert_eq!(summary.total_received_references, 5);
        assert_eq!(summary.most_cited, Some(RankedWork { id: "A".into(), count: 3 }));
        assert_eq!(summary.most_referencing, Some(RankedWork { id: "D".into(), count: 3 }));
    }

    #[test]
    fn test_ties_go_to_first() {
        let works = vec![work("A", &["B"]), work("B", &["A"])];
        let summary = summary_of(&works);

        assert_eq!(summary.most_cited.unwrap().id, "A");
        assert_eq!(summary.most_referencing.unwrap().id, "A");
    }

    #[test]
    fn test_nothing_cited() {
        let works = vec![work("A", &["outside"])];
        let summary = summary_of(&works);

        assert_eq!(summary.in_corpus_references, 0);
        assert!(summary.most_cited.is_none());
        assert_eq!(summary.most_referencing.unwrap().count, 1);
    }

    #[test]
    fn test_empty_corpus() {
        let summary = summary_of(&[]);

        assert_eq!(summary.total_works, 0);
        assert!(summary.most_cited.is_none());
        assert!(summary.most_referencing.is_none());
        assert!(summary.to_json().unwrap().contains("\"most_cited\":null"));
    }
}
