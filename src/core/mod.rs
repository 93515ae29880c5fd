/*!
 * Core Module
 * Fundamental types and runtime configuration
 */

pub mod config;
pub mod types;

// Re-export for convenience
pub use config::ListConfig;
pub use types::*;
