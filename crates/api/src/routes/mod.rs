pub mod auth;
pub mod health;
pub mod project;
pub mod submission;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// GET    /                                   liveness (public)
///
/// POST   /projects                           create project
/// GET    /projects                           paginated listing (public)
/// GET    /projects/filter                    filtered listing
/// GET    /project/{id}                       fetch by id
/// PUT    /projects/{id}                      replace project fields
/// DELETE /projects/{id}                      delete by id
/// GET    /my-created-project/{email}         list by creator
///
/// POST   /submitted-projects                 create submission
/// GET    /submitted-projects                 list all submissions
/// GET    /my-submitted-projects/{email}      list by examinee
/// GET    /pending-submit/{key}               list pending by creator email
/// PUT    /pending-submit/{key}               grade submission by id
///
/// POST   /jwt                                issue token cookie (public)
/// POST   /logout                             clear token cookie (public)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(project::router())
        .merge(submission::router())
        .merge(auth::router())
}
