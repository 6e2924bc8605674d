//! PubMed EFetch XML parser
//!
//! Turns a raw EFetch response body into flat [`PaperRecord`]s. Missing
//! sub-nodes never fail a record: scalar fields degrade to the `"N/A"`
//! sentinel and authors without an extractable name are dropped. Only a body
//! that does not deserialize at all is an error, which the orchestrator
//! absorbs per chunk.

mod preprocessing;
mod xml_types;

use quick_xml::de::from_str;
use tracing::instrument;

use crate::classify::AffiliationClassifier;
use crate::error::{PubMedError, Result};
use crate::pubmed::models::{MISSING_FIELD, PaperRecord};
use preprocessing::strip_inline_markup;
use xml_types::{AuthorXml, PubmedArticleSet, PubmedArticleXml};

/// Parse all `<PubmedArticle>` containers from an EFetch XML response.
///
/// Records come back in document order. The classifier decides
/// `has_pharma_author` from the flat affiliation list of each record.
#[instrument(skip(xml, classifier), fields(xml_size = xml.len()))]
pub fn parse_papers_from_xml(
    xml: &str,
    classifier: &AffiliationClassifier,
) -> Result<Vec<PaperRecord>> {
    let cleaned = strip_inline_markup(xml);

    let article_set: PubmedArticleSet = from_str(&cleaned)
        .map_err(|e| PubMedError::XmlError(format!("Failed to deserialize EFetch response: {e}")))?;

    Ok(article_set
        .articles
        .into_iter()
        .map(|article| into_record(article, classifier))
        .collect())
}

fn missing() -> String {
    MISSING_FIELD.to_string()
}

fn into_record(article: PubmedArticleXml, classifier: &AffiliationClassifier) -> PaperRecord {
    let citation = article.medline_citation.unwrap_or_default();

    let pubmed_id = citation
        .pmid
        .and_then(|pmid| pmid.value)
        .unwrap_or_else(missing);

    let article = citation.article.unwrap_or_default();
    let title = article.title.unwrap_or_else(missing);

    let journal_node = article.journal.unwrap_or_default();
    let journal = journal_node.title.unwrap_or_else(missing);
    // Year requires the whole PubDate path to be present.
    let year = journal_node
        .issue
        .and_then(|issue| issue.pub_date)
        .and_then(|date| date.year)
        .unwrap_or_else(missing);

    let mut authors = Vec::new();
    let mut affiliations = Vec::new();
    for author in article.author_list.unwrap_or_default().authors {
        collect_author(author, &mut authors, &mut affiliations);
    }

    let has_pharma_author = classifier.has_industry_author(&affiliations);

    PaperRecord {
        pubmed_id,
        title,
        journal,
        year,
        authors: authors.join("; "),
        affiliations: affiliations.join("; "),
        has_pharma_author,
    }
}

fn collect_author(author: AuthorXml, names: &mut Vec<String>, affiliations: &mut Vec<String>) {
    let composed = format!(
        "{} {}",
        author.fore_name.as_deref().unwrap_or(""),
        author.last_name.as_deref().unwrap_or("")
    );
    let name = composed.trim();
    if !name.is_empty() {
        names.push(name.to_string());
    }

    affiliations.extend(author.affiliations);
    affiliations.extend(
        author
            .affiliation_info
            .into_iter()
            .filter_map(|info| info.affiliation),
    );
}
