//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits for reading word lists.

mod line_source;

pub use line_source::LineWordSource;
