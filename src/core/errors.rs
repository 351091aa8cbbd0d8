/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scope parsing result
///
/// # Must Use
/// An unparsed scope list must never be treated as an empty grant
#[must_use = "scope parsing can fail and must be handled"]
pub type ScopeResult<T> = Result<T, ScopeError>;

/// Authorization result
#[must_use = "authorization decisions must be handled"]
pub type AuthzResult<T> = Result<T, AuthzError>;

/// Configuration loading result
#[must_use = "configuration loading can fail and must be handled"]
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while decoding scope text
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ScopeError {
    #[error("invalid scope: `{0}`")]
    #[diagnostic(
        code(scopes::invalid_scope),
        help("Scopes are case-sensitive `<resource>:<action>` names, e.g. `devices:read-update`.")
    )]
    InvalidScope(String),
}

impl ScopeError {
    /// The offending token, already trimmed
    pub fn token(&self) -> &str {
        match self {
            ScopeError::InvalidScope(token) => token,
        }
    }
}

/// Errors raised while building a bundle catalog
///
/// These only come from a malformed static table and are fatal at startup.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum CatalogError {
    #[error("scope `{name}` is defined with two different masks ({first:#x} and {second:#x})")]
    #[diagnostic(code(catalog::duplicate_name))]
    DuplicateName { name: String, first: u64, second: u64 },

    #[error("scopes `{first}` and `{second}` share the mask {mask:#x}")]
    #[diagnostic(code(catalog::duplicate_mask))]
    DuplicateMask { mask: u64, first: String, second: String },

    #[error("scope `{0}` grants no actions")]
    #[diagnostic(code(catalog::empty_bundle))]
    EmptyBundle(String),
}

/// Authorization failures for a principal
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum AuthzError {
    #[error("{principal} is missing required scopes: {missing}")]
    #[diagnostic(
        code(authz::missing_scopes),
        help("Grant the listed scopes to the user or use an account that holds them.")
    )]
    MissingScopes { principal: String, missing: String },
}

/// Configuration loading errors
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read auth config {path}: {source}")]
    #[diagnostic(code(config::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse auth config: {0}")]
    #[diagnostic(
        code(config::parse),
        help("The auth config is a JSON object, e.g. {{\"new_user_default_scopes\": [\"devices:read\"]}}.")
    )]
    Parse(#[from] serde_json::Error),

    #[error("environment variable {var} is not valid UTF-8")]
    #[diagnostic(code(config::env_not_unicode))]
    NotUnicode { var: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scope(#[from] ScopeError),
}
