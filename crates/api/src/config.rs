use crate::auth::cookie::{CookieConfig, SameSite};
use crate::auth::jwt::JwtConfig;

/// What an update does when no document matches its id.
///
/// The source system requested upserts but still reported Not-Found off the
/// matched count, so the two behaviors could disagree. Here the choice is
/// explicit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingUpdatePolicy {
    /// Plain update; a miss returns Not-Found and writes nothing.
    NotFound,
    /// True upsert; a miss inserts and the response reports the upserted id.
    Insert,
}

impl MissingUpdatePolicy {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "not-found" => Some(Self::NotFound),
            "insert" => Some(Self::Insert),
            _ => None,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the MongoDB URI and token secret have defaults
/// suitable for local development. In production, override via environment
/// variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// MongoDB connection string.
    pub mongodb_uri: String,
    /// MongoDB database name (default: `gradeboard`).
    pub mongodb_db: String,
    /// Auth cookie attributes (Secure / SameSite).
    pub cookie: CookieConfig,
    /// Behavior when an update targets a non-existent id.
    pub update_missing: MissingUpdatePolicy,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                  |
    /// |-------------------------|--------------------------|
    /// | `HOST`                  | `0.0.0.0`                |
    /// | `PORT`                  | `5000`                   |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`  |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                     |
    /// | `MONGODB_URI`           | **required**             |
    /// | `MONGODB_DB`            | `gradeboard`             |
    /// | `COOKIE_SECURE`         | `false`                  |
    /// | `COOKIE_SAME_SITE`      | `lax`                    |
    /// | `UPDATE_MISSING_POLICY` | `not-found`              |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let mongodb_uri =
            std::env::var("MONGODB_URI").expect("MONGODB_URI must be set in the environment");

        let mongodb_db = std::env::var("MONGODB_DB").unwrap_or_else(|_| "gradeboard".into());

        let cookie_secure: bool = std::env::var("COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("COOKIE_SECURE must be true or false");

        let same_site_raw = std::env::var("COOKIE_SAME_SITE").unwrap_or_else(|_| "lax".into());
        let same_site = SameSite::parse(&same_site_raw)
            .unwrap_or_else(|| panic!("Invalid COOKIE_SAME_SITE '{same_site_raw}'"));

        let policy_raw =
            std::env::var("UPDATE_MISSING_POLICY").unwrap_or_else(|_| "not-found".into());
        let update_missing = MissingUpdatePolicy::parse(&policy_raw)
            .unwrap_or_else(|| panic!("Invalid UPDATE_MISSING_POLICY '{policy_raw}'"));

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            mongodb_uri,
            mongodb_db,
            cookie: CookieConfig {
                secure: cookie_secure,
                same_site,
            },
            update_missing,
            jwt,
        }
    }
}
