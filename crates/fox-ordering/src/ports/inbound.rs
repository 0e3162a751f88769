//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{ConstraintSet, OrderingOutcome, SymbolOrdering};
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{Symbol, Word};

/// Primary lexical ordering API
pub trait LexicalOrderingApi {
    /// Find an alphabet ordering under which `words` is sorted.
    ///
    /// This is the main entry point. It:
    /// 1. Derives precedence constraints from the word list
    /// 2. Performs topological sort
    /// 3. Completes the order with unconstrained symbols
    ///
    /// A contradiction is returned as `OrderingError::Contradiction`.
    fn order_words(&self, words: &[Word]) -> Result<SymbolOrdering, OrderingError>;

    /// Like `order_words`, but folds contradictions into
    /// `OrderingOutcome::Impossible`. Other errors still propagate.
    fn solve(&self, words: &[Word]) -> Result<OrderingOutcome, OrderingError>;

    /// Derive constraints for a word list.
    ///
    /// Pure function: the same input always yields the same set.
    fn derive_constraints(&self, words: &[Word]) -> Result<ConstraintSet, OrderingError>;

    /// Order the symbols mentioned by `constraints`.
    ///
    /// Performs Kahn's topological sort.
    fn sort_constraints(&self, constraints: &ConstraintSet) -> Result<Vec<Symbol>, OrderingError>;
}
