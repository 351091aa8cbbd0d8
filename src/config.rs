/*!
 * Auth Configuration
 * Scope-related settings consumed by user provisioning
 *
 * Environment variables:
 * - RBAC_NEW_USER_DEFAULT_SCOPES: comma-separated scopes that replace the
 *   configured defaults for newly provisioned users
 */

use crate::core::errors::{ConfigError, ConfigResult};
use crate::core::serde::is_empty_scopes;
use crate::permissions::{parse_str, parse_tokens, Scopes};
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::path::Path;
use tracing::info;

/// Environment override for [`AuthConfig::new_user_default_scopes`]
pub const DEFAULT_SCOPES_ENV: &str = "RBAC_NEW_USER_DEFAULT_SCOPES";

/// Auth settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthConfig {
    /// Scopes granted to users created on first login
    #[serde(skip_serializing_if = "is_empty_scopes")]
    pub new_user_default_scopes: Scopes,
}

/// On-disk shape, scopes still unvalidated
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAuthConfig {
    new_user_default_scopes: Vec<String>,
}

impl AuthConfig {
    /// Parse a JSON document
    ///
    /// Any unknown scope rejects the whole document.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let raw: RawAuthConfig = serde_json::from_str(text)?;
        let config = Self {
            new_user_default_scopes: parse_tokens(&raw.new_user_default_scopes)?,
        };
        info!(
            default_scopes = %config.new_user_default_scopes,
            "Auth config loaded"
        );
        Ok(config)
    }

    /// Read and parse a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Apply [`DEFAULT_SCOPES_ENV`] if it is set
    ///
    /// A value that is not valid UTF-8 is an error, not an unset variable.
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        let value = match std::env::var(DEFAULT_SCOPES_ENV) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                return Err(ConfigError::NotUnicode {
                    var: DEFAULT_SCOPES_ENV.to_string(),
                })
            }
        };
        self.with_default_scopes_override(value.as_deref())
    }

    fn with_default_scopes_override(mut self, value: Option<&str>) -> ConfigResult<Self> {
        if let Some(value) = value {
            self.new_user_default_scopes = parse_str(value)?;
            info!(
                env = DEFAULT_SCOPES_ENV,
                default_scopes = %self.new_user_default_scopes,
                "Default scopes overridden from environment"
            );
        }
        Ok(self)
    }
}
