mod common;

use proptest::prelude::*;
use tokn::analyzer::matchers::{AllOf, AnyOf, NoneOf};
use tokn::analyzer::Parser;
use tokn::sequence::is_sorted_and_uniqued;
use tokn::{static_sequence, FixedCharSequence, StaticSequence};

static_sequence!(Ab = "ab");
static_sequence!(Vowels = "aeiou");
static_sequence!(Hex = "0123456789abcdef");
static_sequence!(Abba = "abba");

fn input_strategy() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'e', 'f', 'o', '0', '9', 'z']), 0..8)
}

fn any_of_agrees<S: StaticSequence>(input: &[char]) -> bool {
    let expected = input.first().map_or(false, |c| S::CHARS.contains(c));
    AnyOf::<S>::new().matches(input, 0) == expected && AnyOf::<S>::accepts(input) == expected
}

fn none_of_agrees<S: StaticSequence>(input: &[char]) -> bool {
    let expected = input.first().map_or(false, |c| !S::CHARS.contains(c));
    NoneOf::<S>::new().matches(input, 0) == expected && NoneOf::<S>::accepts(input) == expected
}

fn all_of_agrees<S: StaticSequence>(input: &[char]) -> bool {
    let expected = input.starts_with(S::CHARS);
    AllOf::<S>::new().matches(input, 0) == expected && AllOf::<S>::accepts(input) == expected
}

proptest! {
    #[test]
    fn test_any_of_is_membership_of_first_char(input in input_strategy()) {
        prop_assert!(any_of_agrees::<Ab>(&input));
        prop_assert!(any_of_agrees::<Vowels>(&input));
        prop_assert!(any_of_agrees::<Hex>(&input));
    }

    #[test]
    fn test_none_of_is_negated_membership(input in input_strategy()) {
        prop_assert!(none_of_agrees::<Ab>(&input));
        prop_assert!(none_of_agrees::<Vowels>(&input));
        prop_assert!(none_of_agrees::<Hex>(&input));
    }

    #[test]
    fn test_all_of_is_prefix_check(input in input_strategy()) {
        prop_assert!(all_of_agrees::<Ab>(&input));
        prop_assert!(all_of_agrees::<Abba>(&input));
    }

    #[test]
    fn test_any_and_none_partition_non_empty_input(input in input_strategy()) {
        let any = AnyOf::<Vowels>::new().matches(&input, 0);
        let none = NoneOf::<Vowels>::new().matches(&input, 0);
        prop_assert_eq!(any || none, !input.is_empty());
        prop_assert!(!(any && none));
    }

    #[test]
    fn test_lookahead_agrees_with_parse(input in input_strategy(), pos in 0usize..10) {
        let parser = AllOf::<Ab>::new();
        prop_assert_eq!(parser.lookahead(&input, pos).is_ok(), parser.parse(&input, pos).is_ok());
        if let Ok((after, ())) = parser.lookahead(&input, pos) {
            prop_assert_eq!(after, pos);
        }
    }

    #[test]
    fn test_sorted_set_check(chars in prop::collection::vec(any::<char>(), 0..12)) {
        let expected = chars.windows(2).all(|pair| pair[0] < pair[1]);
        prop_assert_eq!(is_sorted_and_uniqued(&chars), expected);
    }

    #[test]
    fn test_deduplicated_sets_are_valid(set in prop::collection::btree_set(any::<char>(), 0..12)) {
        let chars: Vec<char> = set.into_iter().collect();
        prop_assert!(is_sorted_and_uniqued(&chars));
    }

    #[test]
    fn test_fixed_sequence_prefix(text in "[ab]{3}", prefix in "[ab]{2}") {
        let seq = FixedCharSequence::<3>::try_new(&text).unwrap();
        let other = FixedCharSequence::<2>::try_new(&prefix).unwrap();
        prop_assert_eq!(seq.starts_with(&other), text.starts_with(prefix.as_str()));
        prop_assert!(!other.starts_with(&seq));
        prop_assert_eq!(seq.to_string(), text);
    }
}
