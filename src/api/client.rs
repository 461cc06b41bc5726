//! HTTP client for the backend endpoints.
//!
//! The transport is platform-split (browser fetch via `gloo-net` on wasm,
//! `reqwest` on native) but both funnel into the same status/body mapping so
//! error semantics are identical everywhere: no response at all becomes
//! [`SearchError::Unreachable`], a non-2xx becomes
//! [`SearchError::BackendRejected`] carrying the backend's `error` field when
//! one is present, and an unparseable 2xx body becomes
//! [`SearchError::MalformedResponse`].

use serde::de::DeserializeOwned;

use crate::api::types::{ErrorBody, HealthResponse, RandomResponse, SearchResponse};
use crate::candidate::UploadCandidate;
use crate::error::SearchError;
use crate::session::SearchParams;

/// Backend base path. Empty means same-origin, which is how the client is
/// served in production.
pub const DEFAULT_BASE: &str = "";

/// Total-request timeout for the native transport. A reachable-but-stalled
/// backend must surface as [`SearchError::Unreachable`] instead of hanging
/// the health check forever.
#[cfg(not(target_arch = "wasm32"))]
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Thin client over the three backend operations. Holds one transport for
/// its lifetime so native builds reuse a single connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    transport: transport::Transport,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE)
    }
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            transport: transport::Transport::new(),
        }
    }

    /// `GET /api/health`: backend readiness, called once at startup.
    pub async fn health(&self) -> Result<HealthResponse, SearchError> {
        let (status, body) = self
            .transport
            .get(&format!("{}/api/health", self.base))
            .await?;
        finish(status, &body)
    }

    /// `POST /api/search`: multipart upload of the candidate plus `top_k`.
    pub async fn search(
        &self,
        candidate: &UploadCandidate,
        params: SearchParams,
    ) -> Result<SearchResponse, SearchError> {
        let url = format!("{}/api/search", self.base);
        let (status, body) = self
            .transport
            .post_image(&url, candidate, params.top_k())
            .await?;
        finish(status, &body)
    }

    /// `GET /api/random?count=N`: random sample for browsing.
    pub async fn random(&self, count: usize) -> Result<RandomResponse, SearchError> {
        let url = format!("{}/api/random?count={}", self.base, count);
        let (status, body) = self.transport.get(&url).await?;
        finish(status, &body)
    }
}

/// Map a received status/body pair onto the success type or a tagged error.
fn finish<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, SearchError> {
    if (200..300).contains(&status) {
        decode_success(body)
    } else {
        Err(SearchError::BackendRejected(error_message(status, body)))
    }
}

fn decode_success<T: DeserializeOwned>(body: &str) -> Result<T, SearchError> {
    serde_json::from_str(body).map_err(|e| SearchError::MalformedResponse(e.to_string()))
}

/// Pull the backend's structured `error` field out of a rejection body,
/// falling back to a generic message carrying the status code.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| format!("Server returned status {}", status))
}

#[cfg(not(target_arch = "wasm32"))]
mod transport {
    use super::*;

    /// One shared `reqwest::Client`, built once with the request timeout and
    /// reused for connection pooling.
    #[derive(Debug, Clone)]
    pub struct Transport {
        http: reqwest::Client,
    }

    impl Transport {
        pub fn new() -> Self {
            let http = reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to build HTTP client");
            Self { http }
        }

        pub async fn get(&self, url: &str) -> Result<(u16, String), SearchError> {
            let response = self
                .http
                .get(url)
                .send()
                .await
                .map_err(|_| SearchError::Unreachable)?;
            read(response).await
        }

        pub async fn post_image(
            &self,
            url: &str,
            candidate: &UploadCandidate,
            top_k: u32,
        ) -> Result<(u16, String), SearchError> {
            let part = reqwest::multipart::Part::bytes(candidate.bytes().to_vec())
                .file_name(candidate.name().to_string())
                .mime_str(candidate.media_type())
                .map_err(|e| SearchError::MalformedResponse(e.to_string()))?;
            let form = reqwest::multipart::Form::new()
                .part("image", part)
                .text("top_k", top_k.to_string());

            let response = self
                .http
                .post(url)
                .multipart(form)
                .send()
                .await
                .map_err(|_| SearchError::Unreachable)?;
            read(response).await
        }
    }

    impl Default for Transport {
        fn default() -> Self {
            Self::new()
        }
    }

    async fn read(response: reqwest::Response) -> Result<(u16, String), SearchError> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|_| SearchError::Unreachable)?;
        Ok((status, body))
    }
}

#[cfg(target_arch = "wasm32")]
mod transport {
    use super::*;
    use gloo_net::http::{Request, Response};
    use wasm_bindgen::JsValue;

    /// Browser fetch: pooling and timeouts belong to the browser, so there is
    /// no client state to hold.
    #[derive(Debug, Clone, Default)]
    pub struct Transport;

    impl Transport {
        pub fn new() -> Self {
            Self
        }

        pub async fn get(&self, url: &str) -> Result<(u16, String), SearchError> {
            let response = Request::get(url)
                .send()
                .await
                .map_err(|_| SearchError::Unreachable)?;
            read(response).await
        }

        pub async fn post_image(
            &self,
            url: &str,
            candidate: &UploadCandidate,
            top_k: u32,
        ) -> Result<(u16, String), SearchError> {
            let form = form_data(candidate, top_k)?;
            let request = Request::post(url).body(form).map_err(|_| {
                SearchError::MalformedResponse("failed to build upload request".to_string())
            })?;
            let response = request.send().await.map_err(|_| SearchError::Unreachable)?;
            read(response).await
        }
    }

    fn js_err(err: JsValue) -> SearchError {
        SearchError::MalformedResponse(format!("{:?}", err))
    }

    async fn read(response: Response) -> Result<(u16, String), SearchError> {
        let status = response.status();
        let body = response.text().await.map_err(|_| SearchError::Unreachable)?;
        Ok((status, body))
    }

    /// Build the multipart body: the raw image bytes as a typed Blob plus the
    /// integer `top_k`. The browser sets the multipart boundary itself.
    fn form_data(
        candidate: &UploadCandidate,
        top_k: u32,
    ) -> Result<web_sys::FormData, SearchError> {
        let form = web_sys::FormData::new().map_err(js_err)?;

        let bytes = js_sys::Uint8Array::from(candidate.bytes());
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(candidate.media_type());
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_err)?;

        form.append_with_blob_and_filename("image", &blob, candidate.name())
            .map_err(js_err)?;
        form.append_with_str("top_k", &top_k.to_string())
            .map_err(js_err)?;
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_field_surfaces_verbatim() {
        let msg = error_message(500, r#"{"error": "model unavailable"}"#);
        assert_eq!(msg, "model unavailable");
    }

    #[test]
    fn test_unstructured_rejection_gets_generic_message() {
        assert_eq!(
            error_message(502, "<html>Bad Gateway</html>"),
            "Server returned status 502"
        );
        // Structured body without an error field falls back too
        assert_eq!(error_message(500, "{}"), "Server returned status 500");
    }

    #[test]
    fn test_finish_rejects_non_2xx() {
        let result: Result<SearchResponse, _> =
            finish(500, r#"{"error": "model unavailable"}"#);
        assert_eq!(
            result,
            Err(SearchError::BackendRejected("model unavailable".to_string()))
        );
    }

    #[test]
    fn test_finish_decodes_success() {
        let result: Result<SearchResponse, _> =
            finish(200, r#"{"count": 1, "results": [{"path": "a.jpg", "similarity": 0.5}]}"#);
        let response = result.unwrap();
        assert_eq!(response.count, 1);
        assert_eq!(response.results[0].path, "a.jpg");
    }

    #[test]
    fn test_finish_flags_malformed_success_body() {
        let result: Result<SearchResponse, _> = finish(200, "not json");
        assert!(matches!(result, Err(SearchError::MalformedResponse(_))));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_request_timeout_is_bounded() {
        // The native client must never wait indefinitely on a stalled backend
        assert!(REQUEST_TIMEOUT > std::time::Duration::ZERO);
        assert!(REQUEST_TIMEOUT <= std::time::Duration::from_secs(60));
    }

    // Port 9 (discard) is closed on loopback, so both calls fail fast with a
    // connection refusal rather than waiting out the timeout.
    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_unreachable_backend_maps_to_unreachable() {
        let client = ApiClient::new("http://127.0.0.1:9");
        assert_eq!(client.health().await, Err(SearchError::Unreachable));
        assert_eq!(client.random(5).await, Err(SearchError::Unreachable));
    }
}
