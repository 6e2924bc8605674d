use reqwest::{Client, Response};
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

use crate::classify::AffiliationClassifier;
use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};
use crate::pubmed::models::PaperRecord;
use crate::pubmed::parser::parse_papers_from_xml;
use crate::pubmed::responses::ESearchResult;

/// Identifiers per EFetch request. NCBI accepts more, but batches of 50 keep
/// individual responses small and failures cheap to skip.
pub const CHUNK_SIZE: usize = 50;

/// Accumulated result of a batched detail fetch.
///
/// Records appear in chunk order, and within a chunk in document order of the
/// response. A failed chunk contributes no records but is recorded in
/// `failures`, so partial results and their gaps are both visible to the
/// caller.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub papers: Vec<PaperRecord>,
    pub failures: Vec<ChunkFailure>,
}

impl FetchOutcome {
    /// True when no records were retrieved (failures may still be present).
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

/// A chunk abandoned after a transport or parse failure.
#[derive(Debug)]
pub struct ChunkFailure {
    /// Zero-based position of the chunk in submission order
    pub chunk_index: usize,
    pub error: PubMedError,
}

/// Client for the PubMed ESearch/EFetch pipeline
///
/// # Example
///
/// ```no_run
/// use papers_client::PubMedClient;
///
/// #[tokio::main]
/// async fn main() {
///     let client = PubMedClient::new();
///     let outcome = client.search_and_fetch("cancer immunotherapy").await;
///     for paper in &outcome.papers {
///         println!("{}\t{}\t{}", paper.pubmed_id, paper.has_pharma_author, paper.title);
///     }
/// }
/// ```
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    classifier: AffiliationClassifier,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a client with default configuration.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a client with custom configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use papers_client::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new().with_timeout(Duration::from_secs(10));
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();
        let classifier = config.classifier.clone();
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            classifier,
            config,
        }
    }

    /// Search PubMed and return the matching article identifiers.
    ///
    /// Issues one ESearch request (`retmax` capped per configuration). This
    /// is a fail-soft boundary: transport errors, non-success statuses, and
    /// malformed response bodies are logged and yield an empty vector, so
    /// callers treat "no results" and "search failed" identically.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search_papers(&self, query: &str) -> Vec<String> {
        match self.try_search(query).await {
            Ok(ids) => {
                debug!(count = ids.len(), "ESearch returned identifiers");
                ids
            }
            Err(error) => {
                warn!(%error, "PubMed search failed, treating as empty result");
                Vec::new()
            }
        }
    }

    async fn try_search(&self, query: &str) -> Result<Vec<String>> {
        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.base_url,
            urlencoding::encode(query),
            self.config.retmax
        );

        let response = self.get(&url).await?;
        let body = response.text().await?;
        // Body decode failures (including a missing esearchresult field) are
        // malformed-response errors, distinct from transport errors.
        let search_result: ESearchResult = serde_json::from_str(&body)?;

        // NCBI sometimes returns 200 OK with an ERROR field in the body
        if let Some(message) = search_result.esearchresult.error {
            return Err(PubMedError::ApiError {
                status: 200,
                message: format!("NCBI ESearch error: {message}"),
            });
        }

        if let Some(count) = &search_result.esearchresult.count {
            debug!(total = %count, "ESearch reported total result count");
        }

        Ok(search_result.esearchresult.idlist)
    }

    /// Fetch and parse detail records for the given identifiers.
    ///
    /// Identifiers are submitted in consecutive chunks of at most
    /// [`CHUNK_SIZE`], with a courtesy pause between chunks (not after the
    /// last). A chunk that fails in transport or parsing is skipped and
    /// recorded; records already collected are kept. Empty input returns
    /// immediately with no network activity. Identifiers are passed through
    /// verbatim; a repeated identifier yields a repeated record.
    #[instrument(skip(self, ids), fields(id_count = ids.len()))]
    pub async fn fetch_paper_details<S: AsRef<str>>(&self, ids: &[S]) -> FetchOutcome {
        let mut outcome = FetchOutcome::default();
        if ids.is_empty() {
            return outcome;
        }

        let chunk_count = ids.len().div_ceil(CHUNK_SIZE);
        for (index, chunk) in ids.chunks(CHUNK_SIZE).enumerate() {
            match self.fetch_chunk(chunk).await {
                Ok(papers) => {
                    debug!(
                        chunk = index + 1,
                        requested = chunk.len(),
                        parsed = papers.len(),
                        "Chunk fetch completed"
                    );
                    outcome.papers.extend(papers);
                }
                Err(error) => {
                    warn!(chunk = index + 1, %error, "Skipping failed chunk");
                    outcome.failures.push(ChunkFailure {
                        chunk_index: index,
                        error,
                    });
                }
            }

            if index + 1 < chunk_count {
                sleep(self.config.chunk_delay).await;
            }
        }

        info!(
            papers = outcome.papers.len(),
            failed_chunks = outcome.failures.len(),
            "Detail fetch completed"
        );
        outcome
    }

    async fn fetch_chunk<S: AsRef<str>>(&self, chunk: &[S]) -> Result<Vec<PaperRecord>> {
        let id_list = chunk
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url, id_list
        );

        let response = self.get(&url).await?;
        let xml = response.text().await?;
        parse_papers_from_xml(&xml, &self.classifier)
    }

    /// Combined pipeline: search, then fetch details for every hit.
    ///
    /// An empty search result (including a failed search) short-circuits
    /// without issuing any detail requests.
    pub async fn search_and_fetch(&self, query: &str) -> FetchOutcome {
        let ids = self.search_papers(query).await;
        if ids.is_empty() {
            return FetchOutcome::default();
        }
        self.fetch_paper_details(&ids).await
    }

    async fn get(&self, url: &str) -> Result<Response> {
        debug!(%url, "Issuing E-utilities request");
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(PubMedError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
