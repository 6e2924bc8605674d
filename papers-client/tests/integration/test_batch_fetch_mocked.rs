//! Integration tests for batched detail fetching using mocked HTTP responses
//!
//! These tests pin the chunking behavior: identifiers go out in consecutive
//! chunks of at most 50, a failed chunk is skipped without aborting the run,
//! and results concatenate in chunk order.

use std::time::Duration;

use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use papers_client::{ClientConfig, PubMedClient, PubMedError};

/// Build a minimal single-article EFetch response with the given PMID.
fn article_response(pmid: &str) -> String {
    format!(
        r#"<?xml version="1.0" ?>
<PubmedArticleSet>
    <PubmedArticle>
        <MedlineCitation>
            <PMID Version="1">{pmid}</PMID>
            <Article>
                <Journal><Title>Test Journal</Title></Journal>
                <ArticleTitle>Article {pmid}</ArticleTitle>
                <AuthorList>
                    <Author>
                        <LastName>Test</LastName>
                        <ForeName>Author</ForeName>
                    </Author>
                </AuthorList>
            </Article>
        </MedlineCitation>
    </PubmedArticle>
</PubmedArticleSet>"#
    )
}

/// Client with the inter-chunk pause disabled so tests stay fast.
fn create_mock_client(mock_server: &MockServer) -> PubMedClient {
    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_chunk_delay(Duration::ZERO);
    PubMedClient::with_config(config)
}

fn ids(range: std::ops::RangeInclusive<u32>) -> Vec<String> {
    range.map(|i| i.to_string()).collect()
}

/// Extract the comma-joined `id` parameter from a recorded request.
fn id_param(request: &wiremock::Request) -> String {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
        .expect("efetch request should carry an id parameter")
}

/// 120 identifiers are fetched in exactly 3 chunks of 50/50/20,
/// concatenated in chunk order
#[tokio::test]
#[traced_test]
async fn test_fetch_120_ids_in_three_chunks() {
    let mock_server = MockServer::start().await;
    let all_ids = ids(1..=120);

    let chunk1 = all_ids[..50].join(",");
    let chunk2 = all_ids[50..100].join(",");
    let chunk3 = all_ids[100..].join(",");

    for (chunk, first_pmid) in [(&chunk1, "1"), (&chunk2, "51"), (&chunk3, "101")] {
        Mock::given(method("GET"))
            .and(path("/efetch.fcgi"))
            .and(query_param("db", "pubmed"))
            .and(query_param("retmode", "xml"))
            .and(query_param("id", chunk.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_string(article_response(first_pmid)))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = create_mock_client(&mock_server);
    let outcome = client.fetch_paper_details(&all_ids).await;

    assert!(outcome.failures.is_empty());
    let pmids: Vec<&str> = outcome.papers.iter().map(|p| p.pubmed_id.as_str()).collect();
    assert_eq!(pmids, vec!["1", "51", "101"]);

    // Requests went out in chunk order with sizes 50/50/20.
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    let sizes: Vec<usize> = requests
        .iter()
        .map(|request| id_param(request).split(',').count())
        .collect();
    assert_eq!(sizes, vec![50, 50, 20]);
    assert_eq!(id_param(&requests[0]), chunk1);
    assert_eq!(id_param(&requests[1]), chunk2);
    assert_eq!(id_param(&requests[2]), chunk3);
}

/// A transport failure in the middle chunk skips that chunk only
#[tokio::test]
#[traced_test]
async fn test_fetch_middle_chunk_failure_is_skipped() {
    let mock_server = MockServer::start().await;
    let all_ids = ids(1..=120);

    let chunk1 = all_ids[..50].join(",");
    let chunk2 = all_ids[50..100].join(",");
    let chunk3 = all_ids[100..].join(",");

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("id", chunk1.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_response("1")))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("id", chunk2.as_str()))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("id", chunk3.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_response("101")))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let outcome = client.fetch_paper_details(&all_ids).await;

    // Chunks 1 and 3 contribute; chunk 2 contributes nothing but is recorded.
    let pmids: Vec<&str> = outcome.papers.iter().map(|p| p.pubmed_id.as_str()).collect();
    assert_eq!(pmids, vec!["1", "101"]);

    assert_eq!(outcome.failures.len(), 1);
    let failure = &outcome.failures[0];
    assert_eq!(failure.chunk_index, 1);
    assert!(matches!(
        failure.error,
        PubMedError::ApiError { status: 500, .. }
    ));

    // All three chunk requests were still issued.
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

/// An unparseable chunk body is skipped the same way as a transport failure
#[tokio::test]
async fn test_fetch_malformed_chunk_is_skipped() {
    let mock_server = MockServer::start().await;
    let all_ids = ids(1..=60);

    let chunk1 = all_ids[..50].join(",");
    let chunk2 = all_ids[50..].join(",");

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("id", chunk1.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_response("1")))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("id", chunk2.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not xml <<<"))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let outcome = client.fetch_paper_details(&all_ids).await;

    assert_eq!(outcome.papers.len(), 1);
    assert_eq!(outcome.papers[0].pubmed_id, "1");
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].chunk_index, 1);
    assert!(matches!(
        outcome.failures[0].error,
        PubMedError::XmlError(_)
    ));
}

/// Fewer than CHUNK_SIZE identifiers go out as a single request
#[tokio::test]
async fn test_fetch_single_chunk() {
    let mock_server = MockServer::start().await;
    let all_ids = ids(1..=3);

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("id", "1,2,3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_response("1")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let outcome = client.fetch_paper_details(&all_ids).await;

    assert_eq!(outcome.papers.len(), 1);
    assert!(outcome.failures.is_empty());
}

/// Empty input issues no requests at all
#[tokio::test]
async fn test_fetch_empty_input_makes_no_requests() {
    let mock_server = MockServer::start().await;
    let client = create_mock_client(&mock_server);

    let no_ids: Vec<String> = Vec::new();
    let outcome = client.fetch_paper_details(&no_ids).await;

    assert!(outcome.papers.is_empty());
    assert!(outcome.failures.is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 0);
}

/// Repeated identifiers are passed through without de-duplication
#[tokio::test]
async fn test_fetch_does_not_deduplicate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("id", "7,7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_response("7")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let outcome = client.fetch_paper_details(&["7", "7"]).await;

    assert_eq!(outcome.papers.len(), 1);
    assert!(outcome.failures.is_empty());
}
