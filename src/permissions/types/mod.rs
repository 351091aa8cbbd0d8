/*!
 * Scope Types Module
 * Core types and traits for the scope codec
 */

mod core;
mod traits;

pub use self::core::{Action, Resource, Scopes, LANE_BITS};
pub use self::traits::ScopeHolder;
