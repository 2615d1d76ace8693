//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! All variables are optional; the defaults produce a self-contained local
//! deployment backed by a `urls.db` file next to the binary.
//!
//! - `DATABASE_URL` - SQLite database URL (default: `sqlite:urls.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `SHORT_DOMAIN` - Display prefix used in shorten responses
//!   (default: `localhost:5000`)
//! - `CODE_LENGTH` - Generated short code length (default: 7)
//! - `MAX_GENERATE_ATTEMPTS` - Collision retry cap per request (default: 10)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 5)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Display prefix for shorten responses, e.g. `localhost:5000` produces
    /// bodies of the form `localhost:5000/aZ3xQ7p`.
    pub short_domain: String,
    /// Length of generated short codes. 7 characters over the 62-symbol
    /// alphabet give ~3.5e12 possible codes.
    pub code_length: usize,
    /// How many fresh candidate codes a single shorten request may try
    /// before giving up with an internal error.
    pub max_generate_attempts: usize,
    pub log_level: String,
    pub log_format: String,
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:urls.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let short_domain =
            env::var("SHORT_DOMAIN").unwrap_or_else(|_| "localhost:5000".to_string());

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(7);

        let max_generate_attempts = env::var("MAX_GENERATE_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            database_url,
            listen_addr,
            short_domain,
            code_length,
            max_generate_attempts,
            log_level,
            log_format,
            db_max_connections,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a SQLite URL
    /// - `listen_addr` is not `host:port`
    /// - `code_length` or `max_generate_attempts` is zero
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.short_domain.is_empty() {
            anyhow::bail!("SHORT_DOMAIN must not be empty");
        }

        if self.code_length == 0 {
            anyhow::bail!("CODE_LENGTH must be at least 1");
        }

        if self.code_length > 64 {
            anyhow::bail!("CODE_LENGTH is too large (max: 64), got {}", self.code_length);
        }

        if self.max_generate_attempts == 0 {
            anyhow::bail!("MAX_GENERATE_ATTEMPTS must be at least 1");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Short domain: {}", self.short_domain);
        tracing::info!("  Code length: {}", self.code_length);
        tracing::info!("  Max generate attempts: {}", self.max_generate_attempts);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
