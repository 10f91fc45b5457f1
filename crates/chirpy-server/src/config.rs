use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Environment variable holding the token signing secret.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// JSON file holding the whole dataset.
    pub database_path: PathBuf,
    /// Directory served under `/app`.
    pub static_root: PathBuf,
    /// HS256 signing secret. Usually supplied through `JWT_SECRET`.
    pub jwt_secret: Option<String>,
    /// bcrypt cost factor for new password hashes.
    pub bcrypt_cost: u32,
    /// Delete the database file at startup.
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            database_path: PathBuf::from("./chirpy_database.json"),
            static_root: PathBuf::from("."),
            jwt_secret: None,
            bcrypt_cost: chirpy_crypto::PasswordHasher::DEFAULT.cost(),
            debug: false,
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> ServerResult<Self> {
        toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Take the signing secret from `JWT_SECRET` when it is set.
    pub fn with_env(mut self) -> Self {
        if let Ok(secret) = std::env::var(JWT_SECRET_ENV) {
            if !secret.is_empty() {
                self.jwt_secret = Some(secret);
            }
        }
        self
    }

    /// The signing secret, which must be present and non-empty.
    pub fn secret(&self) -> ServerResult<&str> {
        match self.jwt_secret.as_deref() {
            Some(s) if !s.is_empty() => Ok(s),
            _ => Err(ServerError::Config(format!(
                "no token secret configured; set {JWT_SECRET_ENV} or jwt_secret"
            ))),
        }
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind_addr", &self.bind_addr)
            .field("database_path", &self.database_path)
            .field("static_root", &self.static_root)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("debug", &self.debug)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(c.database_path, PathBuf::from("./chirpy_database.json"));
        assert_eq!(c.bcrypt_cost, 12);
        assert!(c.jwt_secret.is_none());
        assert!(!c.debug);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ServerConfig::from_toml_str(
            r#"
            bind_addr = "0.0.0.0:9000"
            jwt_secret = "s3cret"
            "#,
        )
        .unwrap();
        assert_eq!(c.bind_addr.port(), 9000);
        assert_eq!(c.secret().unwrap(), "s3cret");
        assert_eq!(c.static_root, PathBuf::from("."));
    }

    #[test]
    fn bad_toml_is_config_error() {
        assert!(matches!(
            ServerConfig::from_toml_str("bind_addr = 5"),
            Err(ServerError::Config(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chirpy.toml");
        std::fs::write(&path, "debug = true\nbcrypt_cost = 4\n").unwrap();
        let c = ServerConfig::load(&path).unwrap();
        assert!(c.debug);
        assert_eq!(c.bcrypt_cost, 4);
        assert!(ServerConfig::load(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn missing_or_empty_secret_is_error() {
        let mut c = ServerConfig::default();
        assert!(c.secret().is_err());
        c.jwt_secret = Some(String::new());
        assert!(c.secret().is_err());
    }

    #[test]
    fn debug_redacts_secret() {
        let c = ServerConfig {
            jwt_secret: Some("hunter2".into()),
            ..ServerConfig::default()
        };
        let debug = format!("{c:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("redacted"));
    }
}
