//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource. Every
//! handler performs exactly one store operation and maps errors via
//! [`crate::error::AppError`].

pub mod auth;
pub mod health;
pub mod project;
pub mod submission;
