/*!
 * Scope Traits
 * Interfaces for anything that carries granted scopes
 */

use super::core::Scopes;

/// A principal (user, session, token) that carries granted scopes
pub trait ScopeHolder {
    /// Scopes granted to this holder
    fn scopes(&self) -> Scopes;

    /// Check a required scope set against the granted one
    fn has_scope(&self, required: Scopes) -> bool {
        self.scopes().has(required)
    }
}

impl ScopeHolder for Scopes {
    fn scopes(&self) -> Scopes {
        *self
    }
}
