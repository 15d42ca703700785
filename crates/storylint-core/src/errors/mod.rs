//! Error surface.
//!
//! The engines themselves are total over their input domain and return plain
//! values; only the JSON boundary with the host can fail.

/// Errors crossing the storylint API boundary.
#[derive(Debug, thiserror::Error)]
pub enum StorylintError {
    #[error("JSON (de)serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
