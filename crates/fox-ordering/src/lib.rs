//! # Fox-Names: Lexical Ordering
//!
//! Finds an ordering of an alphabet under which a given word list is
//! sorted lexicographically, or reports that none exists.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (ConstraintSet, PrecedenceGraph, SymbolOrdering)
//! - **Algorithms**: Constraint derivation, Kahn's sort, completion
//! - **Ports**: Inbound (LexicalOrderingApi) and Outbound (WordSource)
//! - **Adapters**: Line-oriented word source
//! - **Application**: Service orchestration
//!
//! ## Example
//!
//! ```
//! use fox_ordering::{LexicalOrderingApi, LexicalOrderingService, Word};
//!
//! let words: Vec<Word> = ["rivest", "shimar", "adleman"]
//!     .into_iter()
//!     .map(Word::from)
//!     .collect();
//!
//! let ordering = LexicalOrderingService::new().order_words(&words).unwrap();
//! assert!(ordering.rank('r') < ordering.rank('s'));
//! assert!(ordering.rank('s') < ordering.rank('a'));
//! ```

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::LineWordSource;
pub use application::service::LexicalOrderingService;
pub use config::OrderingConfig;
pub use domain::entities::*;
pub use domain::errors::{Contradiction, InputError, OrderingError};
pub use domain::value_objects::*;
pub use ports::inbound::LexicalOrderingApi;
pub use ports::outbound::WordSource;
