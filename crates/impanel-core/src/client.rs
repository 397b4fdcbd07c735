//! Search client for the explore endpoint
//!
//! The endpoint is the explore page's own path; criteria are POSTed to
//! it as JSON and the response body is a JSON array of datasets. The
//! [`SearchBackend`] trait is the seam between the panel controller and
//! the transport, so tests can swap in a recording stub.

use thiserror::Error;

use crate::criteria::SearchCriteria;
use crate::domain::Dataset;
use crate::http::{HttpClient, HttpError};

/// Errors from a search request
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Parse a response body as a JSON array of datasets.
///
/// Response status is not special-cased upstream; an error body that
/// fails to parse surfaces here as a parse failure.
pub fn parse_results(json: &str) -> Result<Vec<Dataset>, SearchError> {
    serde_json::from_str(json)
        .map_err(|e| SearchError::Parse(format!("Invalid results JSON: {}", e)))
}

/// Transport seam for issuing searches.
///
/// Implemented by [`ExploreClient`] for the real endpoint and by
/// recording stubs in tests.
pub trait SearchBackend {
    fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> impl std::future::Future<Output = Result<Vec<Dataset>, SearchError>>;
}

/// HTTP client for the explore endpoint
pub struct ExploreClient {
    http: HttpClient,
    endpoint: String,
}

impl ExploreClient {
    /// Create a client for the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: HttpClient::default(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a client with a preconfigured HTTP client
    pub fn with_http(http: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint URL searches are POSTed to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchBackend for ExploreClient {
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Dataset>, SearchError> {
        let response = self.http.post_json(&self.endpoint, criteria).await?;
        parse_results(&response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESULTS: &str = r#"[
        {
            "id": 4,
            "url": "http://localhost:5000/doi/10.1234/dataset4",
            "title": "Sample dataset 4",
            "publication_type": "Data Management Plan",
            "created_at": "2024-03-05 15:07:00",
            "description": "Sample description.",
            "authors": [
                {"name": "Author 4", "affiliation": "Club 4", "orcid": "0000-0000-0000-0004"}
            ],
            "tags": ["tag1", "tag2"],
            "total_size_in_human_format": "120 KB"
        },
        {
            "id": 7,
            "url": "http://localhost:5000/doi/10.1234/dataset7",
            "title": "Sample dataset 7",
            "publication_type": "None",
            "created_at": "2024-01-12 09:30:00",
            "authors": [],
            "tags": [],
            "total_size_in_human_format": "3 MB"
        }
    ]"#;

    #[test]
    fn test_parse_results() {
        let datasets = parse_results(SAMPLE_RESULTS).unwrap();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].id, 4);
        assert_eq!(datasets[0].publication_type, "Data Management Plan");
        assert_eq!(datasets[1].title, "Sample dataset 7");
        assert!(datasets[1].description.is_none());
    }

    #[test]
    fn test_parse_empty_array() {
        let datasets = parse_results("[]").unwrap();
        assert!(datasets.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_results(r#"{"error": "server blew up"}"#).unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            parse_results("not json"),
            Err(SearchError::Parse(_))
        ));
    }

    #[test]
    fn test_http_error_converts() {
        let err = SearchError::from(HttpError::Timeout);
        assert!(matches!(err, SearchError::Http(HttpError::Timeout)));
    }

    #[test]
    fn test_client_keeps_endpoint() {
        let client = ExploreClient::new("http://localhost:5000/explore");
        assert_eq!(client.endpoint(), "http://localhost:5000/explore");
    }
}
