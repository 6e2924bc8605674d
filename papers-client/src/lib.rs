//! # Papers Client
//!
//! An async Rust client that searches PubMed, fetches article metadata in
//! rate-limited batches, and flags papers with industry-affiliated
//! (pharma/biotech) co-authors.
//!
//! ## Pipeline
//!
//! - **Search**: one ESearch request returning up to `retmax` article
//!   identifiers for a free-text query
//! - **Fetch**: EFetch requests in chunks of 50 identifiers, parsed into flat
//!   [`PaperRecord`]s; a failed chunk is skipped, not fatal
//! - **Classify**: each record's affiliations run through the
//!   [`AffiliationClassifier`] keyword heuristic
//!
//! ## Quick Start
//!
//! ```no_run
//! use papers_client::PubMedClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = PubMedClient::new();
//!
//!     let outcome = client.search_and_fetch("cancer immunotherapy").await;
//!     for paper in &outcome.papers {
//!         if paper.has_pharma_author {
//!             println!("{}: {}", paper.pubmed_id, paper.title);
//!         }
//!     }
//! }
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod pubmed;

// Re-export main types for convenience
pub use classify::{AffiliationClassifier, ACADEMIC_KEYWORDS, INDUSTRY_KEYWORDS};
pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use pubmed::{ChunkFailure, FetchOutcome, PaperRecord, PubMedClient};
