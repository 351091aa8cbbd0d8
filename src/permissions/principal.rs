/*!
 * Principal
 * A user record as seen by authorization checks
 */

use super::catalog::catalog;
use super::types::{ScopeHolder, Scopes};
use crate::config::AuthConfig;
use crate::core::errors::{AuthzError, AuthzResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An authenticated user and the scopes it is allowed to exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub username: String,
    #[serde(default)]
    pub allowed_scopes: Scopes,
}

impl Principal {
    pub fn new(username: impl Into<String>, allowed_scopes: Scopes) -> Self {
        Self {
            username: username.into(),
            allowed_scopes,
        }
    }

    /// New user carrying the configured default scopes
    pub fn provision(username: impl Into<String>, config: &AuthConfig) -> Self {
        Self::new(username, config.new_user_default_scopes)
    }

    /// Add another source of authority
    pub fn grant(&mut self, scopes: Scopes) {
        self.allowed_scopes |= scopes;
    }

    /// Copy of `self` with `other`'s scopes merged in
    #[must_use]
    pub fn merged(&self, other: &impl ScopeHolder) -> Self {
        Self::new(self.username.clone(), self.allowed_scopes | other.scopes())
    }

    pub fn has(&self, required: Scopes) -> bool {
        self.allowed_scopes.has(required)
    }

    /// Require every scope in `required`
    ///
    /// On denial the error names the required bundles that are not held, or
    /// the raw missing bits when no bundle describes them.
    pub fn authorize(&self, required: Scopes) -> AuthzResult<()> {
        if self.has(required) {
            return Ok(());
        }

        let names = catalog().missing_names(self.allowed_scopes, required);
        let missing = if names.is_empty() {
            format!("{:#x}", required.bits() & !self.allowed_scopes.bits())
        } else {
            names.join(",")
        };
        debug!(
            username = %self.username,
            granted = %self.allowed_scopes,
            required = %required,
            missing = %missing,
            "Authorization denied"
        );
        Err(AuthzError::MissingScopes {
            principal: self.username.clone(),
            missing,
        })
    }
}

impl ScopeHolder for Principal {
    fn scopes(&self) -> Scopes {
        self.allowed_scopes
    }
}
