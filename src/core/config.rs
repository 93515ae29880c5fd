/*!
 * List Configuration
 *
 * Construction-time settings for block lists, with environment overrides
 */

use tracing::warn;

/// Environment variable overriding the initial node capacity
pub const ENV_INITIAL_CAPACITY: &str = "BLOCKLIST_INITIAL_CAPACITY";

/// Environment variable enabling invariant verification after each mutation
pub const ENV_VERIFY_INVARIANTS: &str = "BLOCKLIST_VERIFY_INVARIANTS";

/// Block list configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Node slots reserved up front
    pub initial_capacity: usize,
    /// Walk the chain after every mutation and log violations
    pub verify_invariants: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            verify_invariants: false,
        }
    }
}

impl ListConfig {
    /// Configuration for short-lived lists (a handful of blocks)
    pub const fn small() -> Self {
        Self {
            initial_capacity: 4,
            verify_invariants: false,
        }
    }

    /// Configuration for allocator-wide free lists
    pub const fn large() -> Self {
        Self {
            initial_capacity: 4096,
            verify_invariants: false,
        }
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_verify_invariants(mut self, verify: bool) -> Self {
        self.verify_invariants = verify;
        self
    }

    /// Build a configuration from the defaults plus environment overrides
    ///
    /// Environment variables:
    /// - BLOCKLIST_INITIAL_CAPACITY: reserved node slots (default: 16)
    /// - BLOCKLIST_VERIFY_INVARIANTS: "1" or "true" to enable (default: false)
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(ENV_INITIAL_CAPACITY) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) => config.initial_capacity = capacity,
                Err(e) => warn!(
                    variable = ENV_INITIAL_CAPACITY,
                    value = %raw,
                    error = %e,
                    "Ignoring invalid initial capacity"
                ),
            }
        }

        if let Ok(raw) = std::env::var(ENV_VERIFY_INVARIANTS) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" => config.verify_invariants = true,
                "0" | "false" | "" => config.verify_invariants = false,
                other => warn!(
                    variable = ENV_VERIFY_INVARIANTS,
                    value = %other,
                    "Ignoring invalid invariant verification flag"
                ),
            }
        }

        config
    }
}
