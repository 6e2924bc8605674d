//! PubMed E-utilities integration: search, batched detail fetch, and parsing.

pub mod client;
pub mod models;
pub mod parser;
pub(crate) mod responses;

pub use client::{ChunkFailure, FetchOutcome, PubMedClient};
pub use models::PaperRecord;
