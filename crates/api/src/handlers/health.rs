//! Liveness handler for the root path.

/// GET /
pub async fn liveness() -> &'static str {
    "Gradeboard API is running"
}
