//! Exhaustive reference: try every permutation of the alphabet.

/// Every permutation of `symbols`
pub fn permutations(symbols: &[char]) -> Vec<Vec<char>> {
    if symbols.len() <= 1 {
        return vec![symbols.to_vec()];
    }

    let mut out = Vec::new();
    for (i, first) in symbols.iter().enumerate() {
        let mut rest = symbols.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, *first);
            out.push(tail);
        }
    }
    out
}

/// Whether `words` are non-decreasing under `order`; a proper prefix sorts first
pub fn sorted_under(order: &[char], words: &[String]) -> bool {
    let key = |word: &String| -> Option<Vec<usize>> {
        word.chars()
            .map(|c| order.iter().position(|o| *o == c))
            .collect()
    };

    words.windows(2).all(|pair| match (key(&pair[0]), key(&pair[1])) {
        (Some(left), Some(right)) => left <= right,
        _ => false,
    })
}

/// Whether any permutation of `alphabet` sorts `words`
pub fn any_ordering_sorts(alphabet: &[char], words: &[String]) -> bool {
    permutations(alphabet)
        .iter()
        .any(|order| sorted_under(order, words))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_permutation_count() {
        assert_eq!(permutations(&['a', 'b', 'c', 'd']).len(), 24);
        assert_eq!(permutations(&[]).len(), 1);
    }

    #[test]
    fn test_sorted_under() {
        assert!(sorted_under(&['b', 'a'], &strings(&["b", "ba", "a"])));
        assert!(!sorted_under(&['a', 'b'], &strings(&["b", "a"])));
        assert!(!sorted_under(&['a', 'b'], &strings(&["ab", "a"])));
    }

    #[test]
    fn test_any_ordering_sorts() {
        assert!(any_ordering_sorts(&['a', 'b', 'c'], &strings(&["c", "b", "a"])));
        assert!(!any_ordering_sorts(&['a', 'c', 'r', 'e'], &strings(&["car", "ccr", "ae"])));
    }
}
