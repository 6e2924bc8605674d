//! Internal XML schema types for EFetch responses
//!
//! Every field is `Option` or `Vec` so that a well-formed but incomplete
//! record deserializes without error; the converter in the parent module does
//! explicit presence checks and substitutes sentinels.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticleXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PubmedArticleXml {
    #[serde(rename = "MedlineCitation")]
    pub medline_citation: Option<MedlineCitationXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MedlineCitationXml {
    #[serde(rename = "PMID")]
    pub pmid: Option<PmidXml>,
    #[serde(rename = "Article")]
    pub article: Option<ArticleXml>,
}

/// `<PMID Version="1">123</PMID>`: the attribute forces map deserialization,
/// so the text content lands in `$text`.
#[derive(Debug, Deserialize)]
pub(crate) struct PmidXml {
    #[serde(rename = "$text")]
    pub value: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ArticleXml {
    #[serde(rename = "ArticleTitle")]
    pub title: Option<String>,
    #[serde(rename = "Journal")]
    pub journal: Option<JournalXml>,
    #[serde(rename = "AuthorList")]
    pub author_list: Option<AuthorListXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct JournalXml {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "JournalIssue")]
    pub issue: Option<JournalIssueXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct JournalIssueXml {
    #[serde(rename = "PubDate")]
    pub pub_date: Option<PubDateXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PubDateXml {
    #[serde(rename = "Year")]
    pub year: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AuthorListXml {
    #[serde(rename = "Author", default)]
    pub authors: Vec<AuthorXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AuthorXml {
    #[serde(rename = "LastName")]
    pub last_name: Option<String>,
    #[serde(rename = "ForeName")]
    pub fore_name: Option<String>,
    /// Pre-2014 DTD: affiliation text directly under `<Author>`
    #[serde(rename = "Affiliation", default)]
    pub affiliations: Vec<String>,
    /// Current DTD: one or more `<AffiliationInfo>` wrappers
    #[serde(rename = "AffiliationInfo", default)]
    pub affiliation_info: Vec<AffiliationInfoXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AffiliationInfoXml {
    #[serde(rename = "Affiliation")]
    pub affiliation: Option<String>,
}
