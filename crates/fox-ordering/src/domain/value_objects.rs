//! Value objects for lexical ordering
//!
//! Symbols, alphabets, words and precedence pairs.

use super::errors::OrderingError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// One element of the alphabet
pub type Symbol = char;

/// Fixed finite alphabet, ordered and duplicate-free.
///
/// The order only matters for where unconstrained symbols land in the
/// completed ordering; it never influences which orderings are valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Build an alphabet from its symbols written out as a string.
    pub fn new(symbols: &str) -> Result<Self, OrderingError> {
        if symbols.is_empty() {
            return Err(OrderingError::InvalidAlphabet(
                "alphabet must contain at least one symbol".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for symbol in symbols.chars() {
            if symbol.is_whitespace() {
                return Err(OrderingError::InvalidAlphabet(format!(
                    "whitespace is not a valid symbol: {:?}",
                    symbol
                )));
            }
            if !seen.insert(symbol) {
                return Err(OrderingError::InvalidAlphabet(format!(
                    "duplicate symbol '{}'",
                    symbol
                )));
            }
        }

        Ok(Self {
            symbols: symbols.chars().collect(),
        })
    }

    /// The 26 lowercase Latin letters, `a` through `z`.
    pub fn latin_lowercase() -> Self {
        Self {
            symbols: ('a'..='z').collect(),
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Index of a symbol in declaration order
    pub fn position(&self, symbol: Symbol) -> Option<usize> {
        self.symbols.iter().position(|s| *s == symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin_lowercase()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|s| write!(f, "{}", s))
    }
}

impl FromStr for Alphabet {
    type Err = OrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = OrderingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}

/// Immutable sequence of symbols
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    symbols: Vec<Symbol>,
}

impl Word {
    /// Parse a word, rejecting symbols outside `alphabet`.
    pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Self, OrderingError> {
        if let Some(symbol) = text.chars().find(|s| !alphabet.contains(*s)) {
            return Err(OrderingError::SymbolOutsideAlphabet {
                symbol,
                word: text.to_string(),
            });
        }
        Ok(Self::from(text))
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self {
            symbols: text.chars().collect(),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|s| write!(f, "{}", s))
    }
}

/// `before` must rank strictly lower than `after`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Precedence {
    pub before: Symbol,
    pub after: Symbol,
}

impl Precedence {
    /// Returns `None` for a self-pair; `(a, a)` is never a constraint.
    pub fn new(before: Symbol, after: Symbol) -> Option<Self> {
        (before != after).then_some(Self { before, after })
    }
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} < {}", self.before, self.after)
    }
}

/// Where the unconstrained symbols go in a completed ordering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnconstrainedPlacement {
    /// Before every constrained symbol
    Leading,
    /// After every constrained symbol
    #[default]
    Trailing,
}

impl FromStr for UnconstrainedPlacement {
    type Err = OrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "leading" => Ok(Self::Leading),
            "trailing" => Ok(Self::Trailing),
            other => Err(OrderingError::InvalidPlacement(other.to_string())),
        }
    }
}
