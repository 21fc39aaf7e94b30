//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `IMPEX_ADMIN_USERNAME` - Admin panel username
//! - `IMPEX_ADMIN_PASSWORD` - Admin panel password (min 8 chars)
//!
//! ## Optional
//! - `IMPEX_HOST` - Bind address (default: 127.0.0.1)
//! - `IMPEX_PORT` - Listen port (default: 3000)
//! - `IMPEX_DATA_DIR` - Directory holding the resource JSON files (default: data)
//! - `IMPEX_UPLOADS_DIR` - Directory for uploaded product images (default: public/uploads)
//! - `IMPEX_STATIC_DIR` - Directory with the static pages (default: crates/server/static)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_ADMIN_PASSWORD_LENGTH: usize = 8;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the per-resource JSON files
    pub data_dir: PathBuf,
    /// Directory where uploaded product images are stored
    pub uploads_dir: PathBuf,
    /// Directory with the static storefront pages
    pub static_dir: PathBuf,
    /// Admin panel username
    pub admin_username: String,
    /// Admin panel password
    pub admin_password: SecretString,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the admin password fails the length check.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("IMPEX_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("IMPEX_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("IMPEX_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("IMPEX_PORT".to_string(), e.to_string()))?;

        let data_dir = PathBuf::from(get_env_or_default("IMPEX_DATA_DIR", "data"));
        let uploads_dir = PathBuf::from(get_env_or_default("IMPEX_UPLOADS_DIR", "public/uploads"));
        let static_dir = PathBuf::from(get_env_or_default(
            "IMPEX_STATIC_DIR",
            "crates/server/static",
        ));

        let admin_username = get_required_env("IMPEX_ADMIN_USERNAME")?;
        let admin_password = SecretString::from(get_required_env("IMPEX_ADMIN_PASSWORD")?);
        validate_admin_password(&admin_password, "IMPEX_ADMIN_PASSWORD")?;

        Ok(Self {
            host,
            port,
            data_dir,
            uploads_dir,
            static_dir,
            admin_username,
            admin_password,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that the admin password meets the minimum length requirement.
fn validate_admin_password(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_ADMIN_PASSWORD_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_ADMIN_PASSWORD_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            data_dir: PathBuf::from("data"),
            uploads_dir: PathBuf::from("public/uploads"),
            static_dir: PathBuf::from("static"),
            admin_username: "admin".to_string(),
            admin_password: SecretString::from("correct-horse-battery"),
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_validate_admin_password_too_short() {
        let secret = SecretString::from("short");
        let result = validate_admin_password(&secret, "TEST_VAR");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_admin_password_valid_length() {
        let secret = SecretString::from("long-enough-password");
        assert!(validate_admin_password(&secret, "TEST_VAR").is_ok());
    }
}
