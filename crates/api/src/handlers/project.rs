//! Handlers for the project collection.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use gradeboard_core::error::CoreError;
use gradeboard_core::id::DocumentId;
use gradeboard_core::project::{Project, ProjectFields, ProjectFilter};

use crate::config::MissingUpdatePolicy;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{FilterParams, IdentityParams, PageParams};
use crate::response::{DeleteResponse, InsertedResponse, UpdateResponse};
use crate::state::AppState;

/// Fixed page size of the project listing.
const PAGE_SIZE: i64 = 6;

/// Body of `GET /projects`: one page plus the whole-collection count.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListing {
    pub result: Vec<Project>,
    pub total_count: u64,
}

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Query(identity): Query<IdentityParams>,
    Json(input): Json<ProjectFields>,
) -> AppResult<Json<InsertedResponse>> {
    user.ensure_matches(identity.user_id.as_deref())?;
    let id = state.projects.insert(&input).await?;
    Ok(Json(InsertedResponse::new(id)))
}

/// GET /projects
///
/// Public. `?page=` is zero-based; the page size is fixed at 6. The
/// returned count covers the whole collection, not the page.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<ProjectListing>> {
    let page = params.page.unwrap_or(0);
    // A huge page value must not overflow the skip offset; saturating to
    // u64::MAX yields the same empty page the store would return anyway.
    let skip = page.saturating_mul(PAGE_SIZE as u64);

    let result = state.projects.list_page(skip, PAGE_SIZE).await?;
    let total_count = state.projects.count().await?;

    Ok(Json(ProjectListing {
        result,
        total_count,
    }))
}

/// GET /project/{id}
///
/// The body is the document, or JSON null when nothing matches.
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Query(identity): Query<IdentityParams>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<Project>>> {
    let id = DocumentId::parse(&id)?;
    user.ensure_matches(identity.user_id.as_deref())?;
    let project = state.projects.find_by_id(&id).await?;
    Ok(Json(project))
}

/// GET /my-created-project/{email}
pub async fn list_by_creator(
    State(state): State<AppState>,
    user: AuthUser,
    Query(identity): Query<IdentityParams>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<Project>>> {
    user.ensure_matches(identity.user_id.as_deref())?;
    let projects = state.projects.list_by_creator(&email).await?;
    Ok(Json(projects))
}

/// GET /projects/filter
pub async fn list_filtered(
    State(state): State<AppState>,
    user: AuthUser,
    Query(identity): Query<IdentityParams>,
    Query(params): Query<FilterParams>,
) -> AppResult<Json<Vec<Project>>> {
    user.ensure_matches(identity.user_id.as_deref())?;
    let filter = ProjectFilter::from_query(params.difficulty.as_deref(), params.category.as_deref());
    let projects = state.projects.list_filtered(&filter).await?;
    Ok(Json(projects))
}

/// PUT /projects/{id}
///
/// Full-field replace. A miss follows the configured policy: Not-Found, or
/// a true upsert reporting the upserted id.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Query(identity): Query<IdentityParams>,
    Path(id): Path<String>,
    Json(input): Json<ProjectFields>,
) -> AppResult<Json<UpdateResponse>> {
    let id = DocumentId::parse(&id)?;
    user.ensure_matches(identity.user_id.as_deref())?;

    let upsert = state.config.update_missing == MissingUpdatePolicy::Insert;
    let outcome = state.projects.replace_fields(&id, &input, upsert).await?;

    if outcome.matched_count == 0 && outcome.upserted_id.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: id.to_string(),
        }));
    }
    Ok(Json(UpdateResponse::from(outcome)))
}

/// DELETE /projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Query(identity): Query<IdentityParams>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let id = DocumentId::parse(&id)?;
    user.ensure_matches(identity.user_id.as_deref())?;
    let deleted_count = state.projects.delete(&id).await?;
    Ok(Json(DeleteResponse {
        acknowledged: true,
        deleted_count,
    }))
}
