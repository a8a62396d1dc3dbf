//! Route definitions for the submitted-project collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::submission;
use crate::state::AppState;

/// ```text
/// POST /submitted-projects               -> create
/// GET  /submitted-projects               -> list
/// GET  /my-submitted-projects/{email}    -> list_by_examinee
/// GET  /pending-submit/{key}             -> list_pending   ({key} is a creator email)
/// PUT  /pending-submit/{key}             -> grade          ({key} is a submission id)
/// ```
///
/// The two `/pending-submit` operations share one path segment but read it
/// differently, an inherited quirk of the public surface.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/submitted-projects",
            get(submission::list).post(submission::create),
        )
        .route(
            "/my-submitted-projects/{email}",
            get(submission::list_by_examinee),
        )
        .route(
            "/pending-submit/{key}",
            get(submission::list_pending).put(submission::grade),
        )
}
