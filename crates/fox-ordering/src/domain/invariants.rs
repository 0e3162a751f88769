//! Domain invariants for lexical ordering

use super::entities::{ConstraintSet, SymbolOrdering};
use super::value_objects::{Alphabet, Symbol, Word};
use std::cmp::Ordering;
use std::collections::HashSet;

/// INVARIANT-1: Totality
/// The ordering is a permutation of the whole alphabet.
pub fn invariant_is_permutation(ordering: &SymbolOrdering, alphabet: &Alphabet) -> bool {
    if ordering.len() != alphabet.len() {
        return false;
    }

    let mut seen: HashSet<Symbol> = HashSet::with_capacity(ordering.len());
    ordering
        .symbols()
        .iter()
        .all(|symbol| alphabet.contains(*symbol) && seen.insert(*symbol))
}

/// INVARIANT-2: Constraint Respect
/// Every `a < b` constraint holds: `rank(a) < rank(b)`.
pub fn invariant_respects_constraints(
    ordering: &SymbolOrdering,
    constraints: &ConstraintSet,
) -> bool {
    constraints.iter().all(|p| {
        match (ordering.rank(p.before), ordering.rank(p.after)) {
            (Some(before), Some(after)) => before < after,
            _ => false,
        }
    })
}

/// INVARIANT-3: Soundness
/// Every adjacent pair of input words compares `w1 <= w2` under the ordering.
pub fn invariant_words_sorted(ordering: &SymbolOrdering, words: &[Word]) -> bool {
    words.windows(2).all(|pair| {
        matches!(
            ordering.compare_words(&pair[0], &pair[1]),
            Some(Ordering::Less | Ordering::Equal)
        )
    })
}

/// INVARIANT-4: No Self Constraints
/// No symbol is required to precede itself.
pub fn invariant_no_self_constraints(constraints: &ConstraintSet) -> bool {
    constraints.iter().all(|p| p.before != p.after)
}
