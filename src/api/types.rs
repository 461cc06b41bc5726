//! Wire types for the similarity-search backend.
//!
//! These mirror the backend's JSON contract exactly (see the endpoint table
//! in [`crate::api`]): health check, similarity search, and random sample.
//! Anything the client derives (exact-match flags, percentages) lives in
//! `classify`, not here.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// One ranked match from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Path relative to the backend origin, e.g. `images/cats/001.jpg`
    pub path: String,
    /// Cosine similarity in `[0, 1]`
    pub similarity: f64,
    /// Derived client-side by the classifier; the backend may send its own
    /// flags but they are recomputed (top rank only)
    #[serde(default)]
    pub is_exact_match: bool,
}

/// Ranked result list, ordered descending by similarity (backend contract;
/// the client does not re-sort).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// Health check payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub indexed: bool,
    #[serde(default)]
    pub total_images: usize,
}

/// One entry from the random-sample endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RandomImage {
    pub path: String,
}

/// Random-sample payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RandomResponse {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub results: Vec<RandomImage>,
}

/// Structured error body the backend sends with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// Backend readiness as shown in the status banner.
///
/// Independent lifecycle from the search session: checked once at startup and
/// never mutated by searches.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerStatus {
    /// Health check has not completed yet
    Unknown,
    /// Backend is up and has an index loaded
    Ready { total_images: usize },
    /// Backend is up but no index has been built
    NotIndexed,
    /// Transport or parse failure talking to the backend
    Unreachable,
}

impl ServerStatus {
    /// Map a health-check outcome onto the tri-state banner.
    ///
    /// A reachable backend reporting anything other than `status == "ok"` is
    /// treated as unreachable; there is no partial-health state to show.
    pub fn from_health(outcome: Result<HealthResponse, SearchError>) -> Self {
        match outcome {
            Ok(health) if health.status == "ok" => {
                if health.indexed {
                    Self::Ready {
                        total_images: health.total_images,
                    }
                } else {
                    Self::NotIndexed
                }
            }
            Ok(_) | Err(_) => Self::Unreachable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_deserializes() {
        let json = r#"{
            "count": 3,
            "results": [
                {"path": "a.jpg", "similarity": 1.0},
                {"path": "b.jpg", "similarity": 0.8},
                {"path": "c.jpg", "similarity": 0.5}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.count, 3);
        assert_eq!(response.results.len(), 3);
        assert_eq!(response.results[0].path, "a.jpg");
        assert!(!response.results[0].is_exact_match);
    }

    #[test]
    fn test_search_response_tolerates_empty_body_fields() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.count, 0);
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_health_indexed_maps_to_ready() {
        let health = HealthResponse {
            status: "ok".to_string(),
            indexed: true,
            total_images: 1234,
        };
        assert_eq!(
            ServerStatus::from_health(Ok(health)),
            ServerStatus::Ready { total_images: 1234 }
        );
    }

    #[test]
    fn test_health_unindexed_maps_to_not_indexed() {
        let health = HealthResponse {
            status: "ok".to_string(),
            indexed: false,
            total_images: 0,
        };
        assert_eq!(ServerStatus::from_health(Ok(health)), ServerStatus::NotIndexed);
    }

    #[test]
    fn test_health_transport_failure_maps_to_unreachable() {
        assert_eq!(
            ServerStatus::from_health(Err(SearchError::Unreachable)),
            ServerStatus::Unreachable
        );
    }

    #[test]
    fn test_health_degraded_status_maps_to_unreachable() {
        let health = HealthResponse {
            status: "starting".to_string(),
            indexed: false,
            total_images: 0,
        };
        assert_eq!(ServerStatus::from_health(Ok(health)), ServerStatus::Unreachable);
    }
}
