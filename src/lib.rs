/*!
 * RBAC Scopes Library
 * Compact scope encoding for role-based access control
 */

pub mod config;
pub mod core;
pub mod permissions;

// Re-exports
pub use config::AuthConfig;
pub use crate::core::errors::*;
pub use permissions::{
    available_names, catalog, parse_str, parse_tokens, serialize, to_names, Action, Catalog,
    Principal, Resource, ScopeHolder, Scopes,
};
