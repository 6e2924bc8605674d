//! Heuristic affiliation classification
//!
//! Free-text affiliation strings are matched against two fixed keyword sets
//! to decide whether an article has at least one industry co-author.

/// Tokens indicating a pharmaceutical/biotech or other commercial affiliation.
pub const INDUSTRY_KEYWORDS: &[&str] = &[
    "pharma",
    "biotech",
    "therapeutics",
    "laboratories",
    "inc",
    "llc",
    "gmbh",
    "ltd",
    "genentech",
    "pfizer",
    "novartis",
    "astrazeneca",
    "gilead",
    "sanofi",
    "roche",
    "abbvie",
    "company",
    "corporation",
    "corp",
    "private limited",
];

/// Tokens indicating an academic or clinical affiliation.
pub const ACADEMIC_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school",
    "hospital",
    "faculty",
    "department",
];

/// Classifies author affiliations as industry or academic.
///
/// Holds two immutable lowercase keyword sets. An affiliation counts as
/// industry-indicating only if it contains at least one industry keyword as a
/// substring and none of the academic keywords. Matching is substring-based,
/// so a keyword embedded in an unrelated word can misfire (e.g. `inc` inside
/// "Princeton"). This is a known limitation of the heuristic, kept because
/// word-boundary matching would change observable classification results.
///
/// # Example
///
/// ```
/// use papers_client::AffiliationClassifier;
///
/// let classifier = AffiliationClassifier::default();
/// assert!(classifier.has_industry_author(&["Acme Pharma Inc, Cambridge, MA"]));
/// assert!(!classifier.has_industry_author(&["University of Somewhere"]));
/// ```
#[derive(Debug, Clone)]
pub struct AffiliationClassifier {
    industry: Vec<String>,
    academic: Vec<String>,
}

impl AffiliationClassifier {
    /// Create a classifier with custom keyword sets.
    ///
    /// Tokens are lowercased once here; matching is case-insensitive.
    pub fn new<I, J>(industry: I, academic: J) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
    {
        Self {
            industry: industry
                .into_iter()
                .map(|token| token.as_ref().to_lowercase())
                .collect(),
            academic: academic
                .into_iter()
                .map(|token| token.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Check whether any affiliation in the sequence appears to be industry.
    ///
    /// Logical OR across the sequence, short-circuiting on the first match.
    /// An empty sequence yields `false`.
    pub fn has_industry_author<S: AsRef<str>>(&self, affiliations: &[S]) -> bool {
        affiliations
            .iter()
            .any(|affiliation| self.is_industry(affiliation.as_ref()))
    }

    fn is_industry(&self, affiliation: &str) -> bool {
        let lower = affiliation.to_lowercase();
        self.industry.iter().any(|token| lower.contains(token.as_str()))
            && !self.academic.iter().any(|token| lower.contains(token.as_str()))
    }
}

impl Default for AffiliationClassifier {
    fn default() -> Self {
        Self::new(INDUSTRY_KEYWORDS.iter().copied(), ACADEMIC_KEYWORDS.iter().copied())
    }
}
