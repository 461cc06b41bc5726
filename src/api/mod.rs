//! Backend contract: wire types and the HTTP client.
//!
//! The backend is treated as an opaque service with three operations:
//!
//! | Operation | Request | Success response |
//! |---|---|---|
//! | Health check | `GET /api/health` | `{status, indexed, total_images}` |
//! | Similarity search | `POST /api/search` multipart `image` + `top_k` | `{count, results: [{path, similarity}]}` |
//! | Random sample | `GET /api/random?count=N` | `{count, results: [{path}]}` |
//!
//! Non-2xx responses carry `{error: string}` when the backend has something
//! specific to say.

mod client;
pub mod types;

pub use client::{ApiClient, DEFAULT_BASE};
