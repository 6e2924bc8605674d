use std::time::Duration;

use crate::classify::AffiliationClassifier;

/// Default NCBI E-utilities base URL
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CHUNK_DELAY: Duration = Duration::from_millis(500);
const DEFAULT_RETMAX: usize = 100;

/// Configuration for the PubMed client
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use papers_client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_retmax(20);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) base_url: Option<String>,
    /// Per-request timeout applied on the HTTP client
    pub(crate) timeout: Duration,
    /// Courtesy pause between consecutive detail-fetch chunks
    pub(crate) chunk_delay: Duration,
    /// Maximum number of identifiers requested from ESearch
    pub(crate) retmax: usize,
    pub(crate) user_agent: Option<String>,
    pub(crate) classifier: AffiliationClassifier,
}

impl ClientConfig {
    /// Create a configuration with the NCBI defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            chunk_delay: DEFAULT_CHUNK_DELAY,
            retmax: DEFAULT_RETMAX,
            user_agent: None,
            classifier: AffiliationClassifier::default(),
        }
    }

    /// Override the E-utilities base URL (used by mocked tests).
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the pause between consecutive detail-fetch chunks.
    pub fn with_chunk_delay(mut self, delay: Duration) -> Self {
        self.chunk_delay = delay;
        self
    }

    /// Set the maximum number of identifiers returned by a search.
    pub fn with_retmax(mut self, retmax: usize) -> Self {
        self.retmax = retmax;
        self
    }

    /// Set a custom User-Agent header value.
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the built-in affiliation keyword sets.
    pub fn with_classifier(mut self, classifier: AffiliationClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub(crate) fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub(crate) fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("papers-client/{}", env!("CARGO_PKG_VERSION")))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
