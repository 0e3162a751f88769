//! # Property Tests
//!
//! Soundness, totality and completeness of the ordering service, checked
//! against an exhaustive search over a small alphabet.

pub mod generators;
pub mod oracle;
