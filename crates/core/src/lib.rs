//! Domain types shared across the Gradeboard workspace.
//!
//! Everything here is storage-agnostic: models carry their wire (camelCase)
//! serde names, identifiers are validated strings, and errors cover the
//! domain taxonomy only. HTTP and MongoDB concerns live in the `api` and
//! `store` crates respectively.

pub mod error;
pub mod id;
pub mod project;
pub mod submission;
