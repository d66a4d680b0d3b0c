//! Reasoner configuration.
//!
//! - `ProverConfig`: prover-wide caching and load-time rule rewrites
//! - `CacheConfig`: lifetime of memoized state-machine rows
//! - `MachineConfig`: both of the above, handed to a state machine
//!
//! All defaults match the behavior a plain GDL reasoner is expected to have.

use serde::{Deserialize, Serialize};

/// Prover options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProverConfig {
    /// Keep answers to state-independent subgoals across queries
    /// (default: true).
    pub fixed_answer_cache: bool,

    /// Move `distinct` and `not` literals after the literals binding their
    /// variables when the description is loaded (default: true).
    pub reorder_negations: bool,

    /// Warn about predicates that depend negatively on themselves
    /// (default: true).
    pub check_stratification: bool,
}

impl Default for ProverConfig {
    fn default() -> Self {
        Self {
            fixed_answer_cache: true,
            reorder_negations: true,
            check_stratification: true,
        }
    }
}

impl ProverConfig {
    /// Enable or disable the cross-query answer cache.
    #[must_use]
    pub fn with_fixed_answer_cache(mut self, enabled: bool) -> Self {
        self.fixed_answer_cache = enabled;
        self
    }

    /// Enable or disable negation reordering.
    #[must_use]
    pub fn with_reorder_negations(mut self, enabled: bool) -> Self {
        self.reorder_negations = enabled;
        self
    }

    /// Enable or disable the stratification check.
    #[must_use]
    pub fn with_check_stratification(mut self, enabled: bool) -> Self {
        self.check_stratification = enabled;
        self
    }
}

/// Caching decorator options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Number of `prune` calls an untouched row survives beyond the first
    /// (default: 0, i.e. rows live until the next tick).
    pub ttl: u32,
}

impl CacheConfig {
    /// Set the row time-to-live.
    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Everything a prover-backed state machine is configured with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Prover options.
    pub prover: ProverConfig,
    /// Caching decorator options.
    pub cache: CacheConfig,
}

impl MachineConfig {
    /// Replace the prover options.
    #[must_use]
    pub fn with_prover(mut self, prover: ProverConfig) -> Self {
        self.prover = prover;
        self
    }

    /// Replace the cache options.
    #[must_use]
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }
}
