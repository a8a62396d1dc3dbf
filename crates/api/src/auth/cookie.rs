//! Building and parsing the auth token cookie.
//!
//! The token travels in an http-only cookie named `token`. Set-Cookie
//! values are formatted by hand; Secure and SameSite vary by deployment,
//! so both come from configuration.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Name of the auth cookie.
pub const TOKEN_COOKIE: &str = "token";

/// SameSite attribute for the auth cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }

    /// Parse a configuration value (case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "strict" => Some(SameSite::Strict),
            "lax" => Some(SameSite::Lax),
            "none" => Some(SameSite::None),
            _ => Option::None,
        }
    }
}

/// Deployment-dependent cookie attributes.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    /// Add the `Secure` attribute (required for `SameSite=None`).
    pub secure: bool,
    pub same_site: SameSite,
}

/// Format the Set-Cookie value that installs the auth token.
pub fn build_auth_cookie(token: &str, config: &CookieConfig, max_age_secs: i64) -> String {
    let secure_flag = if config.secure { "; Secure" } else { "" };
    format!(
        "{TOKEN_COOKIE}={token}; Path=/; Max-Age={max_age_secs}; HttpOnly{secure_flag}; SameSite={}",
        config.same_site.as_str()
    )
}

/// Format the Set-Cookie value that clears the auth token immediately.
pub fn build_clear_cookie(config: &CookieConfig) -> String {
    build_auth_cookie("", config, 0)
}

/// Extract the auth token from a request's `Cookie` header, if present.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(COOKIE)?.to_str().ok()?;
    raw.split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix("token="))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
