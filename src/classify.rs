//! Result classification: exact-match detection and score presentation.

use crate::api::types::SearchResponse;

/// Similarity above which the top result is presumed to be the query image
/// itself, already present in the index. Strictly greater-than; a score of
/// exactly 0.99 is not an exact match.
pub const EXACT_MATCH_THRESHOLD: f64 = 0.99;

/// A [`SearchResponse`] with the exact-match annotation applied.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedResponse {
    pub response: SearchResponse,
    /// True when the top result crossed [`EXACT_MATCH_THRESHOLD`]; drives the
    /// "exact match found" banner.
    pub exact_match: bool,
}

/// Annotate a response with exact-match information.
///
/// Exactness is a property of the top rank only: if the first result's
/// similarity exceeds the threshold it is flagged, and no other result ever
/// is, even at a tied score. Assumes the backend returned results sorted
/// descending by similarity; ordering is not validated here. Any flags the
/// backend may have set itself are recomputed under this rule.
pub fn classify(mut response: SearchResponse) -> AnnotatedResponse {
    for result in &mut response.results {
        result.is_exact_match = false;
    }

    let exact_match = response
        .results
        .first()
        .is_some_and(|top| top.similarity > EXACT_MATCH_THRESHOLD);
    if exact_match {
        response.results[0].is_exact_match = true;
    }

    AnnotatedResponse {
        response,
        exact_match,
    }
}

/// Similarity as a percentage with one decimal place, e.g. `0.857` → `"85.7"`.
/// Purely presentational; classification never looks at this.
pub fn similarity_pct(similarity: f64) -> String {
    format!("{:.1}", similarity * 100.0)
}
