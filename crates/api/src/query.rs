//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Zero-based page number for the project listing (`?page=`).
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u64>,
}

/// The caller's self-declared identity (`?userId=`).
///
/// Protected routes require this to match the verified token claim; it is
/// never used as the identity itself.
#[derive(Debug, Deserialize)]
pub struct IdentityParams {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Filter axes for the project listing (`?difficulty=&category=`).
///
/// Each raw value is an `&`-joined list (URL-encoded by the caller).
#[derive(Debug, Deserialize)]
pub struct FilterParams {
    pub difficulty: Option<String>,
    pub category: Option<String>,
}
