//! Configuration for lexical ordering

use crate::domain::value_objects::{Alphabet, UnconstrainedPlacement};
use serde::{Deserialize, Serialize};
use std::env;

/// Ordering configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingConfig {
    /// Symbols every ordering must cover
    pub alphabet: Alphabet,
    /// Where symbols without constraints go
    pub unconstrained_placement: UnconstrainedPlacement,
    /// Lowercase input symbols the alphabet only holds in lowercase
    pub fold_case: bool,
    /// Re-check totality, constraints and word order before returning
    pub verify_result: bool,
    /// Maximum words accepted in one batch
    pub max_word_count: usize,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::latin_lowercase(),
            unconstrained_placement: UnconstrainedPlacement::Trailing,
            fold_case: true,
            verify_result: false,
            max_word_count: 100_000,
        }
    }
}

impl OrderingConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FOX_ALPHABET`: Alphabet symbols (default: a-z)
    /// - `FOX_UNCONSTRAINED`: `leading` or `trailing` (default: trailing)
    /// - `FOX_FOLD_CASE`: Fold input symbols to lowercase (default: true)
    /// - `FOX_VERIFY`: Verify results before returning (default: false)
    /// - `FOX_MAX_WORDS`: Maximum batch size (default: 100000)
    ///
    /// Absent or unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            alphabet: env::var("FOX_ALPHABET")
                .ok()
                .and_then(|v| Alphabet::new(&v).ok())
                .unwrap_or(defaults.alphabet),

            unconstrained_placement: env::var("FOX_UNCONSTRAINED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.unconstrained_placement),

            fold_case: env::var("FOX_FOLD_CASE")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.fold_case),

            verify_result: env::var("FOX_VERIFY")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.verify_result),

            max_word_count: env::var("FOX_MAX_WORDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_word_count),
        }
    }
}
