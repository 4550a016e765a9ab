//! # Configuration
//!
//! [`AppConfig`] is read from the JSON file named by `TYCE_CONFIG`, when set. Every field
//! has a default, so a partial file (or no file at all) is fine. `TYCE_DASHBOARD_PAGE_SIZE`
//! overrides the dashboard page size after the file is read.
//!
//! ```json
//! {
//!   "dashboardPageSize": 6,
//!   "storeProvisioned": true,
//!   "logFilter": "tyce=debug",
//!   "operator": { "id": "u1", "email": "ada@example.com", "displayName": "Ada" }
//! }
//! ```

use crate::model::{Role, User};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "TYCE_CONFIG";
pub const PAGE_SIZE_VAR: &str = "TYCE_DASHBOARD_PAGE_SIZE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Maximum number of projects on the dashboard.
    pub dashboard_page_size: usize,
    /// Channel capacity of the project collection actor.
    pub store_buffer_size: usize,
    /// When false the projects collection is never started and every store call fails.
    pub store_provisioned: bool,
    /// Filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// The account the local identity provider signs in.
    pub operator: OperatorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dashboard_page_size: 6,
            store_buffer_size: 32,
            store_provisioned: true,
            log_filter: "info".to_string(),
            operator: OperatorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperatorConfig {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub role: Role,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            id: "local-operator".to_string(),
            email: "operator@localhost".to_string(),
            display_name: None,
            role: Role::User,
        }
    }
}

impl OperatorConfig {
    pub fn to_user(&self) -> User {
        let user = User::new(self.id.as_str(), self.email.as_str()).with_role(self.role);
        match &self.display_name {
            Some(name) => user.with_display_name(name.as_str()),
            None => user,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        if let Ok(raw) = std::env::var(PAGE_SIZE_VAR) {
            config.dashboard_page_size = parse_page_size(&raw)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dashboard_page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "dashboardPageSize",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.store_buffer_size == 0 {
            return Err(ConfigError::Invalid {
                field: "storeBufferSize",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.operator.id.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "operator.id",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_page_size(raw: &str) -> Result<usize, ConfigError> {
    raw.trim().parse().map_err(|e| ConfigError::Invalid {
        field: "dashboardPageSize",
        reason: format!("{raw:?}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"storeProvisioned": false}"#).unwrap();
        assert!(!config.store_provisioned);
        assert_eq!(config.dashboard_page_size, 6);
        assert_eq!(config.operator, OperatorConfig::default());
    }

    #[test]
    fn test_operator_becomes_user() {
        let config = AppConfig::from_json(
            r#"{"operator": {"id": "u9", "email": "x@y.z", "displayName": "Xia", "role": "admin"}}"#,
        )
        .unwrap();
        let user = config.operator.to_user();
        assert_eq!(user.id.as_str(), "u9");
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.greeting_name(), "Xia");
    }

    #[test]
    fn test_zero_page_size_is_invalid() {
        let config = AppConfig {
            dashboard_page_size: 0,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "dashboardPageSize", .. })
        ));
        assert!(parse_page_size("six").is_err());
        assert_eq!(parse_page_size(" 10 ").unwrap(), 10);
    }
}
