//! Constraint Deriver
//!
//! Turns an ordered word list into pairwise symbol precedences by
//! splitting on common prefixes, the same walk a lexicographic comparison
//! makes but run backwards to produce constraints instead of checking them.

use crate::domain::entities::ConstraintSet;
use crate::domain::errors::{Contradiction, OrderingError};
use crate::domain::value_objects::{Symbol, Word};
use tracing::trace;

/// Words sharing `prefix`, with the prefix stripped
struct WordGroup<'a> {
    prefix: Vec<Symbol>,
    suffixes: Vec<&'a [Symbol]>,
}

/// Derive the precedence constraints implied by `words` appearing in order.
///
/// Each group popped from the worklist:
/// 1. must list its empty suffixes before any non-empty one
/// 2. yields `(x, y)` for every adjacent pair of distinct leading symbols
/// 3. splits into maximal runs sharing a leading symbol; every run longer
///    than one word is pushed back with that symbol stripped
///
/// Cycles among the constraints are left for the topological sort.
pub fn derive_constraints(words: &[Word]) -> Result<ConstraintSet, OrderingError> {
    let mut constraints = ConstraintSet::new();
    let mut worklist = vec![WordGroup {
        prefix: Vec::new(),
        suffixes: words.iter().map(Word::symbols).collect(),
    }];

    while let Some(group) = worklist.pop() {
        trace!(
            depth = group.prefix.len(),
            group_size = group.suffixes.len(),
            "Processing word group"
        );

        if !check_empty_suffixes(&group.suffixes) {
            return Err(Contradiction::PrefixAfterExtension {
                prefix: group.prefix.iter().collect(),
                depth: group.prefix.len(),
            }
            .into());
        }

        let non_empty: Vec<&[Symbol]> = group
            .suffixes
            .into_iter()
            .filter(|suffix| !suffix.is_empty())
            .collect();

        for pair in non_empty.windows(2) {
            constraints.insert(pair[0][0], pair[1][0]);
        }

        for run in non_empty.chunk_by(|a, b| a[0] == b[0]) {
            if run.len() < 2 {
                continue;
            }
            let mut prefix = group.prefix.clone();
            prefix.push(run[0][0]);
            worklist.push(WordGroup {
                prefix,
                suffixes: run.iter().map(|suffix| &suffix[1..]).collect(),
            });
        }
    }

    Ok(constraints)
}

/// Empty words must all come before the non-empty ones.
///
/// An empty suffix after a non-empty one means a word follows a longer
/// word that extends it, which no ordering can fix.
pub fn check_empty_suffixes<S: AsRef<[Symbol]>>(group: &[S]) -> bool {
    let mut encountered_non_empty = false;
    for suffix in group {
        let suffix = suffix.as_ref();
        if encountered_non_empty && suffix.is_empty() {
            return false;
        }
        if !suffix.is_empty() {
            encountered_non_empty = true;
        }
    }
    true
}
