//! Lookalike - web client for an image-similarity search service.
//!
//! The user supplies an image (drag-drop or picker), the client submits it to
//! the backend, and ranked visually-similar matches are shown on a dedicated
//! results view. The backend is an opaque HTTP service (health check,
//! similarity search, random sample); everything here is client-side.
//!
//! # Architecture
//!
//! - **`candidate`**: upload validation and local preview encoding
//! - **`session`**: the search state machine (`Idle → Loading → Success/Failed`),
//!   including stale-completion discard when the candidate changes mid-flight
//! - **`classify`**: exact-match detection on the top-ranked result
//! - **`handoff`**: one-shot payload carrying results across the view transition
//! - **`api`**: wire types and the platform-split HTTP client
//! - **`components`**: the Dioxus views driving all of the above
//!
//! # Examples
//!
//! ```ignore
//! use lookalike::candidate::UploadCandidate;
//! use lookalike::session::{SearchParams, SearchSession};
//!
//! let candidate = UploadCandidate::new("cat.jpg", "image/jpeg", bytes)?;
//! let mut session = SearchSession::new();
//! let id = session.select_candidate();
//! session.begin(id);
//! ```

pub mod api;
pub mod candidate;
pub mod classify;
pub mod components;
pub mod error;
pub mod handoff;
pub mod session;
