/*!
 * Permissions Module
 * Scope codec for role-based access control
 *
 * Converts human-readable scope names (`devices:read-update`) into a packed
 * 64-bit set for storage and fast checks, and turns sets back into the minimal
 * sorted list of names.
 *
 * ## Usage
 * ```
 * use rbac_scopes::permissions::{self, Scopes};
 *
 * let granted = permissions::parse_str("devices:read, devices:read-update, updates:read")?;
 * assert!(granted.has(Scopes::DEVICES_READ));
 * assert_eq!(granted.to_string(), "devices:read-update,updates:read");
 * # Ok::<(), rbac_scopes::ScopeError>(())
 * ```
 */

pub mod catalog;
pub mod codec;
pub mod principal;
pub mod types;

// Re-export commonly used items
pub use catalog::{catalog, Bundle, Catalog, BUNDLES};
pub use codec::{
    available_names, has, parse_str, parse_tokens, serialize, to_names, SCOPE_SEPARATOR,
};
pub use principal::Principal;
pub use types::{Action, Resource, ScopeHolder, Scopes, LANE_BITS};
