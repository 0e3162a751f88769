//! Error types for lexical ordering

use super::value_objects::Symbol;
use thiserror::Error;

/// Terminal outcome: no total order satisfies the word list.
///
/// Not a failure of the program. Callers render it as `Impossible`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Contradiction {
    /// A word appears after a longer word that extends it
    #[error("word prefix '{prefix}' appears after a longer word sharing it (depth {depth})")]
    PrefixAfterExtension { prefix: String, depth: usize },

    /// Precedence constraints form a cycle
    #[error("precedence constraints form a cycle through {}", display_symbols(.unresolved))]
    Cycle { unresolved: Vec<Symbol> },
}

fn display_symbols(symbols: &[Symbol]) -> String {
    symbols.iter().collect()
}

/// All errors that can occur while ordering an alphabet
#[derive(Debug, Error)]
pub enum OrderingError {
    /// No ordering exists
    #[error("Contradiction: {0}")]
    Contradiction(#[from] Contradiction),

    /// Alphabet definition rejected
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// Unknown placement for unconstrained symbols
    #[error("Invalid placement '{0}': expected 'leading' or 'trailing'")]
    InvalidPlacement(String),

    /// Word uses a symbol the alphabet does not define
    #[error("Symbol '{symbol}' in word '{word}' is not in the alphabet")]
    SymbolOutsideAlphabet { symbol: Symbol, word: String },

    /// Batch size exceeded limits
    #[error("Batch size exceeded: {size} > {max}")]
    BatchTooLarge { size: usize, max: usize },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OrderingError {
    /// Whether this is the expected "no ordering exists" outcome
    pub fn is_contradiction(&self) -> bool {
        matches!(self, OrderingError::Contradiction(_))
    }
}

/// Input validation errors raised by word sources
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Missing word count on the first line")]
    MissingCount,

    #[error("Invalid word count: '{line}'")]
    InvalidCount { line: String },

    #[error("Expected {expected} words, found {found}")]
    MissingWord { expected: usize, found: usize },

    #[error("Empty word on line {line}")]
    EmptyWord { line: usize },

    #[error("Invalid word on line {line}")]
    InvalidWord {
        line: usize,
        #[source]
        source: OrderingError,
    },

    #[error("Failed to read input")]
    Io(#[from] std::io::Error),
}
