//! Handlers for token issuance and logout.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::auth::cookie::{build_auth_cookie, build_clear_cookie};
use crate::auth::jwt::generate_token;
use crate::error::{AppError, AppResult};
use crate::response::Ack;
use crate::state::AppState;

/// Request body for `POST /jwt`: the identity to embed in the token.
#[derive(Debug, Deserialize)]
pub struct TokenIdentity {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// POST /jwt
///
/// Sign the supplied identity and install it as the http-only token
/// cookie. Expiry is the configured token lifetime (one hour by default);
/// there is no refresh, so an expired token forces re-authentication.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(identity): Json<TokenIdentity>,
) -> AppResult<impl IntoResponse> {
    let token = generate_token(&identity.user_id, identity.email.as_deref(), &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    let max_age_secs = state.config.jwt.token_expiry_mins * 60;
    let cookie = build_auth_cookie(&token, &state.config.cookie, max_age_secs);

    tracing::debug!(user_id = %identity.user_id, "Issued auth token");
    Ok(([(SET_COOKIE, cookie)], Json(Ack::ok())))
}

/// POST /logout
///
/// Clear the token cookie immediately (zero max-age).
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = build_clear_cookie(&state.config.cookie);
    ([(SET_COOKIE, cookie)], Json(Ack::ok()))
}
