//! Completion of a sorted constraint set into a full alphabet ordering

use crate::domain::entities::SymbolOrdering;
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{Alphabet, Symbol, UnconstrainedPlacement};
use std::collections::HashSet;

/// Extend `sorted` with every alphabet symbol it does not mention.
///
/// Unconstrained symbols keep alphabet order and go before or after the
/// sorted ones according to `placement`. They never decide a comparison
/// between input words, so either side is valid.
pub fn complete_ordering(
    sorted: Vec<Symbol>,
    alphabet: &Alphabet,
    placement: UnconstrainedPlacement,
) -> Result<SymbolOrdering, OrderingError> {
    if let Some(symbol) = sorted.iter().find(|s| !alphabet.contains(**s)) {
        return Err(OrderingError::SymbolOutsideAlphabet {
            symbol: *symbol,
            word: sorted.iter().collect(),
        });
    }

    let constrained: HashSet<Symbol> = sorted.iter().copied().collect();
    let unconstrained = alphabet
        .symbols()
        .iter()
        .copied()
        .filter(|s| !constrained.contains(s));

    let symbols: Vec<Symbol> = match placement {
        UnconstrainedPlacement::Leading => unconstrained.chain(sorted).collect(),
        UnconstrainedPlacement::Trailing => sorted.into_iter().chain(unconstrained).collect(),
    };

    Ok(SymbolOrdering::new(symbols))
}
