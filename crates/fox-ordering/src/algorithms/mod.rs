//! Algorithms module for lexical ordering
//!
//! Contains:
//! - Constraint derivation by common-prefix splitting
//! - Kahn's topological sort
//! - Completion with unconstrained symbols

pub mod completion;
pub mod constraint_deriver;
pub mod kahns;

pub use completion::complete_ordering;
pub use constraint_deriver::{check_empty_suffixes, derive_constraints};
pub use kahns::kahns_topological_sort;
