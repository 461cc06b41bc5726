//! One-shot handoff of search results from the search view to the results
//! view.
//!
//! The results view renders entirely from this snapshot; zero additional
//! network calls. The slot is consumed on read so a reload or direct entry
//! finds it empty and shows the navigational empty state instead of stale
//! results.

use crate::classify::AnnotatedResponse;

/// Read-only snapshot carried across the view transition.
#[derive(Debug, Clone, PartialEq)]
pub struct HandoffPayload {
    pub annotated: AnnotatedResponse,
    /// Base64 data URI of the query image, when one was decoded.
    pub preview: Option<String>,
}

/// Single-payload slot: written by the search view on success, emptied by the
/// first read in the results view.
#[derive(Debug, Clone, Default)]
pub struct HandoffSlot {
    payload: Option<HandoffPayload>,
}

impl HandoffSlot {
    /// Store a payload, replacing any unconsumed one (a newer search always
    /// supersedes an older, never-viewed result).
    pub fn put(&mut self, payload: HandoffPayload) {
        self.payload = Some(payload);
    }

    /// Consume the payload. Second read returns `None`.
    pub fn take(&mut self) -> Option<HandoffPayload> {
        self.payload.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::SearchResponse;
    use crate::classify::classify;

    fn payload() -> HandoffPayload {
        HandoffPayload {
            annotated: classify(SearchResponse {
                count: 0,
                results: Vec::new(),
            }),
            preview: Some("data:image/png;base64,AA==".to_string()),
        }
    }

    #[test]
    fn test_take_consumes_payload() {
        let mut slot = HandoffSlot::default();
        slot.put(payload());
        assert!(slot.take().is_some());
        assert!(slot.take().is_none());
    }

    #[test]
    fn test_empty_slot_yields_none() {
        let mut slot = HandoffSlot::default();
        assert!(slot.take().is_none());
    }

    #[test]
    fn test_put_replaces_unconsumed_payload() {
        let mut slot = HandoffSlot::default();
        slot.put(HandoffPayload {
            preview: None,
            ..payload()
        });
        slot.put(payload());
        let taken = slot.take().unwrap();
        assert!(taken.preview.is_some());
    }
}
