//! Paper record entity

use serde::{Deserialize, Serialize};

/// Entity: a single bibliographic record as harvested from the source.
///
/// Every field is optional (harvested metadata is frequently incomplete)
/// and a record's identity is its position in the input batch. Records are
/// immutable once ingested; every pipeline run starts from the raw batch.
///
/// ## Example
///
/// ```rust
/// use pta_domain::entities::Paper;
///
/// let paper = Paper {
///     title: Some("Deep learning for protein folding".to_string()),
///     abstract_text: None,
///     journal: Some("Nature".to_string()),
///     year: Some("2021".to_string()),
///     authors: Some(vec!["J. Jumper".to_string()]),
/// };
/// assert!(paper.abstract_text.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paper {
    /// Paper title
    #[serde(default)]
    pub title: Option<String>,
    /// Abstract text (`abstract` on the wire; keyword-safe name in Rust)
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    /// Journal name
    #[serde(default)]
    pub journal: Option<String>,
    /// Publication year, kept as a string as supplied by the source
    #[serde(default)]
    pub year: Option<String>,
    /// Ordered author list
    #[serde(default)]
    pub authors: Option<Vec<String>>,
}

impl Paper {
    /// Title with missing values rendered as an empty string
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Abstract with missing values rendered as an empty string
    pub fn abstract_or_empty(&self) -> &str {
        self.abstract_text.as_deref().unwrap_or("")
    }

    /// Journal with missing values rendered as an empty string
    pub fn journal_or_empty(&self) -> &str {
        self.journal.as_deref().unwrap_or("")
    }

    /// Author list, empty when absent
    pub fn authors_or_empty(&self) -> &[String] {
        self.authors.as_deref().unwrap_or(&[])
    }
}
