//! Composite text construction
//!
//! Builds the single string per record that is handed to the embedding
//! model. Which fields participate is a policy choice; missing fields
//! contribute empty strings and never fail composition.

use serde::{Deserialize, Serialize};

use crate::entities::Paper;

/// Value Object: field-selection policy for composite texts.
///
/// Selected field values are joined with single-space separators. The join
/// is deliberately not trimmed: a missing field leaves its empty
/// contribution (and possibly a trailing separator) in place, the same way
/// for every record of a batch. An entirely empty composite is passed
/// through unchanged; degraded embedding quality is accepted, it is not
/// an error.
///
/// ## Example
///
/// ```rust
/// use pta_domain::entities::Paper;
/// use pta_domain::value_objects::FieldSelection;
///
/// let paper = Paper {
///     title: Some("A".to_string()),
///     ..Paper::default()
/// };
/// assert_eq!(FieldSelection::TitleOnly.compose(&paper), "A");
/// assert_eq!(FieldSelection::TitleAbstract.compose(&paper), "A ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FieldSelection {
    /// Abstract text only
    AbstractOnly,
    /// Title only
    TitleOnly,
    /// Title followed by abstract
    TitleAbstract,
    /// Title, abstract, and journal name
    #[default]
    TitleAbstractJournal,
}

impl FieldSelection {
    /// Build the composite text for one record under this policy.
    pub fn compose(&self, paper: &Paper) -> String {
        match self {
            FieldSelection::AbstractOnly => paper.abstract_or_empty().to_string(),
            FieldSelection::TitleOnly => paper.title_or_empty().to_string(),
            FieldSelection::TitleAbstract => {
                format!("{} {}", paper.title_or_empty(), paper.abstract_or_empty())
            }
            FieldSelection::TitleAbstractJournal => format!(
                "{} {} {}",
                paper.title_or_empty(),
                paper.abstract_or_empty(),
                paper.journal_or_empty()
            ),
        }
    }

    /// Build composite texts for a whole batch, preserving input order.
    pub fn compose_batch(&self, papers: &[Paper]) -> Vec<String> {
        papers.iter().map(|p| self.compose(p)).collect()
    }
}

impl std::fmt::Display for FieldSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldSelection::AbstractOnly => write!(f, "abstract-only"),
            FieldSelection::TitleOnly => write!(f, "title-only"),
            FieldSelection::TitleAbstract => write!(f, "title-abstract"),
            FieldSelection::TitleAbstractJournal => write!(f, "title-abstract-journal"),
        }
    }
}
