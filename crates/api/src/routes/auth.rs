//! Route definitions for token issuance and logout.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// POST /jwt     -> issue_token (public)
/// POST /logout  -> logout (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(auth::issue_token))
        .route("/logout", post(auth::logout))
}
