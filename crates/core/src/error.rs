//! Domain error taxonomy.
//!
//! Four outcomes cover everything the gateway's operations can refuse:
//! a missing document, a malformed input, a missing or bad token, and a
//! failed same-user check. HTTP status mapping lives in the `api` crate.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
