//! Search session: the asynchronous lifecycle of one similarity search.
//!
//! The state machine lives here as plain data so it can be driven from a
//! Dioxus signal and tested without any UI or network attached. The
//! components own the async plumbing (coroutine + HTTP call); this module
//! owns every transition rule:
//!
//! ```text
//! Idle -> Loading -> {Success, Failed} -> Idle
//! ```
//!
//! Concurrency policy (documented, not configurable): a submit while a search
//! is already `Loading` is ignored, and a completion that belongs to a
//! superseded candidate is discarded. Selecting a new candidate always wins.

use crate::classify::AnnotatedResponse;
use crate::error::SearchError;

/// Bounds for the `top_k` control.
pub const TOP_K_MIN: u32 = 1;
pub const TOP_K_MAX: u32 = 50;
pub const TOP_K_DEFAULT: u32 = 10;

/// Validated request parameters: `top_k` clamped to `1..=50` before any
/// transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    top_k: u32,
}

impl SearchParams {
    pub fn new(top_k: u32) -> Self {
        Self {
            top_k: top_k.clamp(TOP_K_MIN, TOP_K_MAX),
        }
    }

    pub fn top_k(&self) -> u32 {
        self.top_k
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            top_k: TOP_K_DEFAULT,
        }
    }
}

/// Identity tag for an in-flight request.
///
/// Every candidate selection mints a new id; a completion is applied only if
/// its id still matches the session's current candidate. This is what gives
/// last-selection-wins semantics without explicit network cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateId(u64);

/// Exactly one state is active at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Success(AnnotatedResponse),
    Failed(String),
}

/// Owner of [`SessionState`] for the lifetime of the search view.
///
/// Single-writer: only the active session mutates its state. The results view
/// gets a read-only snapshot through the handoff slot and never touches this.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    state: SessionState,
    generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    /// Register a newly selected candidate.
    ///
    /// Resets the session to `Idle` (stale results must not linger under a
    /// new query image) and advances the generation so any search still in
    /// flight for the previous candidate will be discarded on completion.
    pub fn select_candidate(&mut self) -> CandidateId {
        self.generation += 1;
        self.state = SessionState::Idle;
        CandidateId(self.generation)
    }

    /// Try to start a search for `id`.
    ///
    /// Returns false (and changes nothing) if a search is already loading or
    /// if `id` no longer names the current candidate. The caller disables the
    /// trigger while loading; this guard is the defensive backstop.
    pub fn begin(&mut self, id: CandidateId) -> bool {
        if self.is_loading() || id.0 != self.generation {
            return false;
        }
        self.state = SessionState::Loading;
        true
    }

    /// Apply a completed search, unless it is stale.
    ///
    /// A completion is stale when the candidate changed while it was in
    /// flight; it is dropped and the state (owned by the newer candidate's
    /// flow) is left alone. Returns whether the outcome was applied. Either
    /// way the loading indicator for this request is finished: an applied
    /// outcome leaves `Loading`, a stale one was already superseded.
    pub fn finish(
        &mut self,
        id: CandidateId,
        outcome: Result<AnnotatedResponse, SearchError>,
    ) -> bool {
        if id.0 != self.generation || !self.is_loading() {
            return false;
        }
        self.state = match outcome {
            Ok(annotated) => SessionState::Success(annotated),
            Err(err) => SessionState::Failed(err.to_string()),
        };
        true
    }

    /// Back to `Idle`, keeping the current candidate valid (explicit retry).
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Snapshot of the response if the last search succeeded.
    pub fn success(&self) -> Option<&AnnotatedResponse> {
        match &self.state {
            SessionState::Success(annotated) => Some(annotated),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{SearchResult, SearchResponse};
    use crate::classify::classify;

    fn ok_response(similarity: f64) -> Result<AnnotatedResponse, SearchError> {
        Ok(classify(SearchResponse {
            count: 1,
            results: vec![SearchResult {
                path: "a.jpg".to_string(),
                similarity,
                is_exact_match: false,
            }],
        }))
    }

    #[test]
    fn test_top_k_is_clamped() {
        assert_eq!(SearchParams::new(0).top_k(), 1);
        assert_eq!(SearchParams::new(10).top_k(), 10);
        assert_eq!(SearchParams::new(100).top_k(), 50);
        assert_eq!(SearchParams::default().top_k(), 10);
    }

    #[test]
    fn test_successful_search_lifecycle() {
        let mut session = SearchSession::new();
        assert_eq!(*session.state(), SessionState::Idle);

        let id = session.select_candidate();
        assert!(session.begin(id));
        assert!(session.is_loading());

        assert!(session.finish(id, ok_response(0.8)));
        assert!(session.success().is_some());
        assert!(!session.success().unwrap().exact_match);
    }

    #[test]
    fn test_failed_search_carries_backend_message() {
        let mut session = SearchSession::new();
        let id = session.select_candidate();
        session.begin(id);

        session.finish(
            id,
            Err(SearchError::BackendRejected("model unavailable".to_string())),
        );
        assert_eq!(
            *session.state(),
            SessionState::Failed("model unavailable".to_string())
        );
    }

    #[test]
    fn test_second_submit_while_loading_is_ignored() {
        let mut session = SearchSession::new();
        let id = session.select_candidate();
        assert!(session.begin(id));
        assert!(!session.begin(id));
        assert!(session.is_loading());
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut session = SearchSession::new();

        // First candidate goes in flight
        let first = session.select_candidate();
        assert!(session.begin(first));

        // User picks a new image while the first search is loading
        let second = session.select_candidate();
        assert_eq!(*session.state(), SessionState::Idle);
        assert!(session.begin(second));
        assert!(session.finish(second, ok_response(0.8)));

        // The first search finally completes; it must not clobber the newer result
        assert!(!session.finish(first, ok_response(1.0)));
        let annotated = session.success().expect("newer result kept");
        assert!(!annotated.exact_match);
        assert!((annotated.response.results[0].similarity - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_begin_with_stale_candidate_is_rejected() {
        let mut session = SearchSession::new();
        let old = session.select_candidate();
        let _new = session.select_candidate();
        assert!(!session.begin(old));
        assert_eq!(*session.state(), SessionState::Idle);
    }

    #[test]
    fn test_selecting_candidate_clears_prior_result() {
        let mut session = SearchSession::new();
        let id = session.select_candidate();
        session.begin(id);
        session.finish(id, ok_response(1.0));
        assert!(session.success().is_some());

        session.select_candidate();
        assert_eq!(*session.state(), SessionState::Idle);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut session = SearchSession::new();
        let id = session.select_candidate();
        session.begin(id);
        session.finish(id, Err(SearchError::Unreachable));
        session.reset();
        assert_eq!(*session.state(), SessionState::Idle);
        // Same candidate can be retried after a reset
        assert!(session.begin(id));
    }
}
