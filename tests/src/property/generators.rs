//! Word list strategies over a four-symbol alphabet.
//!
//! Four symbols keep the exhaustive oracle at 24 permutations per case.

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::select;

/// Alphabet every generated word is drawn from
pub const SMALL_ALPHABET: &str = "abcd";

fn small_symbols() -> Vec<char> {
    SMALL_ALPHABET.chars().collect()
}

/// A word of up to three symbols, occasionally empty
pub fn word() -> impl Strategy<Value = String> {
    vec(select(small_symbols()), 0..=3).prop_map(|symbols| symbols.into_iter().collect())
}

/// An arbitrary word list; most of these have no valid ordering
pub fn word_list() -> impl Strategy<Value = Vec<String>> {
    vec(word(), 0..8)
}

/// A hidden permutation of the alphabet and a word list sorted under it
pub fn orderable_word_list() -> impl Strategy<Value = (Vec<char>, Vec<String>)> {
    (Just(small_symbols()).prop_shuffle(), word_list()).prop_map(|(hidden, mut list)| {
        list.sort_by_key(|w| {
            w.chars()
                .map(|c| hidden.iter().position(|h| *h == c))
                .collect::<Vec<_>>()
        });
        (hidden, list)
    })
}
