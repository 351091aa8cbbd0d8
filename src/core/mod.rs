/*!
 * Core Module
 * Error types and serde support
 */

pub mod errors;
pub mod serde;

// Re-export for convenience
pub use errors::*;
