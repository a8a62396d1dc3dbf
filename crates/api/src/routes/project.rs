//! Route definitions for the project collection.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// ```text
/// POST   /projects                      -> create
/// GET    /projects                      -> list (public)
/// GET    /projects/filter               -> list_filtered
/// PUT    /projects/{id}                 -> update
/// DELETE /projects/{id}                 -> delete
/// GET    /project/{id}                  -> get_by_id
/// GET    /my-created-project/{email}    -> list_by_creator
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list).post(project::create))
        .route("/projects/filter", get(project::list_filtered))
        .route(
            "/projects/{id}",
            put(project::update).delete(project::delete),
        )
        .route("/project/{id}", get(project::get_by_id))
        .route("/my-created-project/{email}", get(project::list_by_creator))
}
