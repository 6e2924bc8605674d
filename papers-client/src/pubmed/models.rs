use serde::{Deserialize, Serialize};

/// Placeholder substituted for any scalar field missing from the source record.
pub const MISSING_FIELD: &str = "N/A";

/// One PubMed article, flattened for export.
///
/// Every field is always populated: scalar fields missing from the source
/// record carry the [`MISSING_FIELD`] sentinel, and the list-valued fields are
/// joined with `"; "` (empty when the record has no authors/affiliations).
/// Field declaration order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub pubmed_id: String,
    pub title: String,
    pub journal: String,
    /// Publication year as printed in the record, not validated as numeric
    pub year: String,
    /// Full author names in document order, joined with `"; "`
    pub authors: String,
    /// Raw affiliation strings across all authors, joined with `"; "`
    pub affiliations: String,
    /// True if any affiliation matched the industry keyword heuristic
    pub has_pharma_author: bool,
}
