use hostup_core::csrf::DEFAULT_TIME_LIMIT_SECS;

/// Server configuration loaded from environment variables.
///
/// All fields except the secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Maximum pooled database connections (default: `10`).
    pub database_max_connections: u32,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Secret used to sign CSRF tokens.
    pub secret_key: String,
    /// Lifetime of a CSRF token in seconds (default: `3600`).
    pub csrf_time_limit_secs: i64,
    /// Directory served under `/static` (default: `static`).
    pub static_dir: String,
    /// Whether cookies carry the `Secure` attribute (default: `false`).
    pub secure_cookies: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default     |
    /// |----------------------------|-------------|
    /// | `HOST`                     | `0.0.0.0`   |
    /// | `PORT`                     | `3000`      |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`        |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`        |
    /// | `SECRET_KEY`               | **required**|
    /// | `CSRF_TIME_LIMIT_SECS`     | `3600`      |
    /// | `STATIC_DIR`               | `static`    |
    /// | `SECURE_COOKIES`           | `false`     |
    ///
    /// # Panics
    ///
    /// Panics if `SECRET_KEY` is unset or empty, or if a numeric variable
    /// does not parse. Misconfiguration should fail at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let secret_key =
            std::env::var("SECRET_KEY").expect("SECRET_KEY must be set in the environment");
        assert!(!secret_key.is_empty(), "SECRET_KEY must not be empty");

        let csrf_time_limit_secs: i64 = std::env::var("CSRF_TIME_LIMIT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIME_LIMIT_SECS.to_string())
            .parse()
            .expect("CSRF_TIME_LIMIT_SECS must be a valid i64");

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());

        let secure_cookies = std::env::var("SECURE_COOKIES")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            host,
            port,
            database_max_connections,
            request_timeout_secs,
            secret_key,
            csrf_time_limit_secs,
            static_dir,
            secure_cookies,
        }
    }
}

/// Interpret a boolean-ish environment value.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
