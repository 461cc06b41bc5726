//! Error types for the Lookalike client.

use std::fmt;

/// Failures that can occur while validating, submitting, or decoding a search.
///
/// Everything here is terminal and displayable: errors are converted to a
/// session or status state at the component boundary and never propagate as
/// unhandled faults. The connectivity wording (`Unreachable`) is deliberately
/// distinct from a backend-reported rejection so the user can tell the two
/// apart.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The selected file's declared media type is not an image
    InvalidMediaType(String),
    /// The backend answered with a non-2xx status and (possibly) a structured message
    BackendRejected(String),
    /// No response was received at all
    Unreachable,
    /// The backend answered 2xx but the body did not parse
    MalformedResponse(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMediaType(declared) => {
                if declared.is_empty() {
                    write!(f, "Selected file is not an image")
                } else {
                    write!(f, "Selected file is not an image (got \"{}\")", declared)
                }
            }
            Self::BackendRejected(msg) => write!(f, "{}", msg),
            Self::Unreachable => write!(f, "Unable to connect to server."),
            Self::MalformedResponse(msg) => write!(f, "Unexpected response from server: {}", msg),
        }
    }
}

impl std::error::Error for SearchError {}

/// Convert to String at the UI boundary
impl From<SearchError> for String {
    fn from(err: SearchError) -> String {
        err.to_string()
    }
}
