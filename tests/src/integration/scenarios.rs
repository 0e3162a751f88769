//! # Reference Scenarios
//!
//! Known word lists with their expected outcome, solved through the
//! public service API.

#[cfg(test)]
mod tests {
    use fox_ordering::domain::invariants::invariant_words_sorted;
    use fox_ordering::{
        Contradiction, LexicalOrderingApi, LexicalOrderingService, OrderingConfig,
        OrderingOutcome, Word,
    };

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::from(*w)).collect()
    }

    fn service() -> LexicalOrderingService {
        LexicalOrderingService::with_config(OrderingConfig {
            verify_result: true,
            ..Default::default()
        })
    }

    fn assert_orderable(list: &[&str]) {
        let list = words(list);
        let outcome = service().solve(&list).unwrap();
        let ordering = outcome
            .ordering()
            .unwrap_or_else(|| panic!("expected an ordering, got {}", outcome));

        assert_eq!(ordering.len(), 26);
        assert!(invariant_words_sorted(ordering, &list));
    }

    fn assert_impossible(list: &[&str]) -> Contradiction {
        match service().solve(&words(list)).unwrap() {
            OrderingOutcome::Impossible(reason) => reason,
            OrderingOutcome::Ordered(ordering) => panic!("expected Impossible, got {}", ordering),
        }
    }

    #[test]
    fn test_three_authors() {
        assert_orderable(&["rivest", "shimar", "adleman"]);
    }

    #[test]
    fn test_ten_handles_impossible() {
        let reason = assert_impossible(&[
            "tourist",
            "petr",
            "wjmzbmr",
            "yeputons",
            "vepifanov",
            "scottwu",
            "oooooooooooooooo",
            "subscriber",
            "rowdark",
            "tankengineer",
        ]);

        assert!(matches!(reason, Contradiction::Cycle { .. }));
    }

    #[test]
    fn test_ten_handles_orderable() {
        assert_orderable(&[
            "petr",
            "egor",
            "endagorion",
            "feferivan",
            "ilovetanyaromanova",
            "kostka",
            "dmitriyh",
            "maratsnowbear",
            "bredorjaguarturnik",
            "cgyforever",
        ]);
    }

    #[test]
    fn test_seven_handles_orderable() {
        assert_orderable(&[
            "car",
            "care",
            "careful",
            "carefully",
            "becarefuldontforgetsomething",
            "otherwiseyouwillbehacked",
            "goodluck",
        ]);
    }

    #[test]
    fn test_shorter_word_after_its_extension() {
        let reason = assert_impossible(&["abc", "ab"]);

        assert_eq!(
            reason,
            Contradiction::PrefixAfterExtension {
                prefix: "ab".to_string(),
                depth: 2,
            }
        );
    }

    #[test]
    fn test_shorter_word_after_extension_deep_in_group() {
        let reason = assert_impossible(&["x", "abcd", "abc", "y"]);

        assert!(matches!(
            reason,
            Contradiction::PrefixAfterExtension { depth: 3, .. }
        ));
    }

    #[test]
    fn test_constraints_from_different_depths_collide() {
        let reason = assert_impossible(&["car", "ccr", "ae"]);

        match reason {
            Contradiction::Cycle { unresolved } => {
                assert!(unresolved.contains(&'a'));
                assert!(unresolved.contains(&'c'));
            }
            other => panic!("expected cycle, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicates_and_single_word() {
        assert_orderable(&["same", "same", "same"]);
        assert_orderable(&["solitary"]);
    }

    #[test]
    fn test_empty_list_is_plain_alphabet() {
        let outcome = service().solve(&[]).unwrap();
        assert_eq!(outcome.to_string(), "abcdefghijklmnopqrstuvwxyz");
    }
}
