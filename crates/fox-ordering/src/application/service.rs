//! Lexical Ordering Service
//!
//! Main service implementing LexicalOrderingApi.

use crate::algorithms::{complete_ordering, derive_constraints, kahns_topological_sort};
use crate::config::OrderingConfig;
use crate::domain::entities::{ConstraintSet, OrderingOutcome, PrecedenceGraph, SymbolOrdering};
use crate::domain::errors::{Contradiction, OrderingError};
use crate::domain::invariants::{
    invariant_is_permutation, invariant_respects_constraints, invariant_words_sorted,
};
use crate::domain::value_objects::{Symbol, Word};
use crate::ports::inbound::LexicalOrderingApi;

use tracing::{debug, info, warn};

/// Lexical Ordering Service
///
/// Orchestrates the ordering pipeline:
/// 1. Validate input
/// 2. Derive precedence constraints
/// 3. Execute Kahn's algorithm
/// 4. Complete with unconstrained symbols
/// 5. Optionally verify the result
pub struct LexicalOrderingService {
    config: OrderingConfig,
}

impl LexicalOrderingService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self {
            config: OrderingConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(config: OrderingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OrderingConfig {
        &self.config
    }

    /// Validate batch size and word symbols
    fn validate_batch(&self, words: &[Word]) -> Result<(), OrderingError> {
        if words.len() > self.config.max_word_count {
            return Err(OrderingError::BatchTooLarge {
                size: words.len(),
                max: self.config.max_word_count,
            });
        }

        for word in words {
            let alphabet = &self.config.alphabet;
            if let Some(symbol) = word.symbols().iter().find(|s| !alphabet.contains(**s)) {
                return Err(OrderingError::SymbolOutsideAlphabet {
                    symbol: *symbol,
                    word: word.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Re-check the finished ordering against everything it must satisfy
    fn verify(
        &self,
        ordering: &SymbolOrdering,
        constraints: &ConstraintSet,
        words: &[Word],
    ) -> Result<(), OrderingError> {
        if !invariant_is_permutation(ordering, &self.config.alphabet) {
            return Err(OrderingError::Internal(format!(
                "ordering '{}' is not a permutation of '{}'",
                ordering, self.config.alphabet
            )));
        }
        if !invariant_respects_constraints(ordering, constraints) {
            return Err(OrderingError::Internal(format!(
                "ordering '{}' violates a derived constraint",
                ordering
            )));
        }
        if !invariant_words_sorted(ordering, words) {
            return Err(OrderingError::Internal(format!(
                "words are not sorted under ordering '{}'",
                ordering
            )));
        }
        Ok(())
    }
}

impl Default for LexicalOrderingService {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalOrderingApi for LexicalOrderingService {
    fn order_words(&self, words: &[Word]) -> Result<SymbolOrdering, OrderingError> {
        // 1. Validate input
        self.validate_batch(words)?;

        info!(word_count = words.len(), "Ordering alphabet for word list");

        // 2. Derive constraints
        let constraints = self.derive_constraints(words)?;

        // 3. Topological sort
        let sorted = self.sort_constraints(&constraints)?;

        // 4. Complete with unconstrained symbols
        let ordering = complete_ordering(
            sorted,
            &self.config.alphabet,
            self.config.unconstrained_placement,
        )?;

        // 5. Verify
        if self.config.verify_result {
            self.verify(&ordering, &constraints, words)?;
            debug!("Ordering verified");
        }

        info!(
            constrained_symbols = constraints.symbols.len(),
            ordering = %ordering,
            "Alphabet ordering complete"
        );

        Ok(ordering)
    }

    fn solve(&self, words: &[Word]) -> Result<OrderingOutcome, OrderingError> {
        match self.order_words(words) {
            Ok(ordering) => Ok(OrderingOutcome::Ordered(ordering)),
            Err(OrderingError::Contradiction(contradiction)) => {
                match &contradiction {
                    Contradiction::PrefixAfterExtension { prefix, depth } => warn!(
                        prefix = %prefix,
                        depth,
                        "Word list has a word after a longer word sharing its prefix"
                    ),
                    Contradiction::Cycle { unresolved } => warn!(
                        unresolved = %unresolved.iter().collect::<String>(),
                        "Precedence constraints are cyclic"
                    ),
                }
                Ok(OrderingOutcome::Impossible(contradiction))
            }
            Err(e) => Err(e),
        }
    }

    fn derive_constraints(&self, words: &[Word]) -> Result<ConstraintSet, OrderingError> {
        let constraints = derive_constraints(words)?;
        debug!(
            constraint_count = constraints.len(),
            symbol_count = constraints.symbols.len(),
            "Derived precedence constraints"
        );
        Ok(constraints)
    }

    fn sort_constraints(&self, constraints: &ConstraintSet) -> Result<Vec<Symbol>, OrderingError> {
        let graph = PrecedenceGraph::from_constraints(constraints);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Built precedence graph"
        );
        kahns_topological_sort(&graph)
    }
}
