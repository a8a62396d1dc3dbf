//! Handlers for the submitted-project collection.

use axum::extract::{Path, Query, State};
use axum::Json;

use gradeboard_core::error::CoreError;
use gradeboard_core::id::DocumentId;
use gradeboard_core::submission::{Grade, SubmissionFields, SubmittedProject};

use crate::config::MissingUpdatePolicy;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::IdentityParams;
use crate::response::{InsertedResponse, UpdateResponse};
use crate::state::AppState;

/// POST /submitted-projects
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Query(identity): Query<IdentityParams>,
    Json(input): Json<SubmissionFields>,
) -> AppResult<Json<InsertedResponse>> {
    user.ensure_matches(identity.user_id.as_deref())?;
    let id = state.submissions.insert(&input).await?;
    Ok(Json(InsertedResponse::new(id)))
}

/// GET /submitted-projects
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(identity): Query<IdentityParams>,
) -> AppResult<Json<Vec<SubmittedProject>>> {
    user.ensure_matches(identity.user_id.as_deref())?;
    let submissions = state.submissions.list_all().await?;
    Ok(Json(submissions))
}

/// GET /my-submitted-projects/{email}
pub async fn list_by_examinee(
    State(state): State<AppState>,
    user: AuthUser,
    Query(identity): Query<IdentityParams>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<SubmittedProject>>> {
    user.ensure_matches(identity.user_id.as_deref())?;
    let submissions = state.submissions.list_by_examinee(&email).await?;
    Ok(Json(submissions))
}

/// GET /pending-submit/{email}
///
/// Submissions awaiting this creator's grading (approveStatus Pending).
pub async fn list_pending(
    State(state): State<AppState>,
    user: AuthUser,
    Query(identity): Query<IdentityParams>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<SubmittedProject>>> {
    user.ensure_matches(identity.user_id.as_deref())?;
    let submissions = state.submissions.list_pending_by_creator(&email).await?;
    Ok(Json(submissions))
}

/// PUT /pending-submit/{id}
///
/// Set marks and feedback; the submission's approveStatus always becomes
/// Approved, regardless of the request body. A miss follows the configured
/// policy, as in the project update.
pub async fn grade(
    State(state): State<AppState>,
    user: AuthUser,
    Query(identity): Query<IdentityParams>,
    Path(id): Path<String>,
    Json(input): Json<Grade>,
) -> AppResult<Json<UpdateResponse>> {
    let id = DocumentId::parse(&id)?;
    user.ensure_matches(identity.user_id.as_deref())?;

    let upsert = state.config.update_missing == MissingUpdatePolicy::Insert;
    let outcome = state.submissions.apply_grade(&id, &input, upsert).await?;

    if outcome.matched_count == 0 && outcome.upserted_id.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id: id.to_string(),
        }));
    }
    Ok(Json(UpdateResponse::from(outcome)))
}
