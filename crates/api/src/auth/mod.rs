//! Authentication primitives.
//!
//! - [`jwt`] -- HS256 token generation and validation.
//! - [`cookie`] -- building and parsing the `token` cookie header strings.

pub mod cookie;
pub mod jwt;
