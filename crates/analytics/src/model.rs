//! Work records as supplied by the dataset loader

use serde::{Deserialize, Serialize};

/// A citable work and its outgoing references.
///
/// Records are immutable once handed to the engine. Citation counts are
/// derived separately (see [`crate::citation::CitationCounts`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    /// Unique identifier, the natural key
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub doi: String,

    /// Publication year, 0 when unknown
    #[serde(default)]
    pub year: i32,

    /// Author names in byline order
    #[serde(default)]
    pub authors: Vec<String>,

    /// Identifiers of referenced works. May name works outside the corpus,
    /// and may repeat an identifier.
    #[serde(default, alias = "referenced_works")]
    pub referenced_work_ids: Vec<String>,
}

impl Work {
    /// Create a work with only an identifier and references
    pub fn new<I, S>(id: impl Into<String>, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            referenced_work_ids: references.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// True if `target` appears at least once in the reference list
    pub fn references(&self, target: &str) -> bool {
        self.referenced_work_ids.iter().any(|r| r == target)
    }
}
