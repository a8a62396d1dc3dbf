//! Request middleware and extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated identity from the
//!   token cookie and carries the same-user gate.
//! - [`logger::log_requests`] -- Diagnostic per-request logging.

pub mod auth;
pub mod logger;
