use std::sync::Arc;

use gradeboard_store::{ProjectStore, SubmissionStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The store handles are trait objects injected at startup (MongoDB in
/// production, in-memory in tests), so the gateway itself holds no state
/// between requests beyond these shared handles.
#[derive(Clone)]
pub struct AppState {
    /// Project collection handle.
    pub projects: Arc<dyn ProjectStore>,
    /// Submitted-project collection handle.
    pub submissions: Arc<dyn SubmissionStore>,
    /// Server configuration (cookie attributes, update policy, JWT secret).
    pub config: Arc<ServerConfig>,
}
