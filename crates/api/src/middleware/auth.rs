//! Cookie-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use gradeboard_core::error::CoreError;

use crate::auth::cookie::token_from_headers;
use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller extracted from the token cookie.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::debug!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// The identity always derives from the verified token claims, never from
/// anything else the caller sent.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The caller's user identifier (from the token's `userId` claim).
    pub user_id: String,
    /// The caller's email, when present in the claims.
    pub email: Option<String>,
}

impl AuthUser {
    /// Same-user gate: the caller must declare its own identity as a
    /// `userId` query value, and it must equal the token claim.
    ///
    /// A missing or mismatched declaration is Forbidden. The supplied value
    /// is only ever compared -- it never becomes the acting identity.
    pub fn ensure_matches(&self, supplied: Option<&str>) -> Result<(), AppError> {
        if supplied == Some(self.user_id.as_str()) {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::Forbidden(
                "forbidden access".into(),
            )))
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing token cookie".into()))
        })?;

        let claims = validate_token(&token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.user_id,
            email: claims.email,
        })
    }
}
