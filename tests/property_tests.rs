//! Property-based tests for match counting
//! Uses proptest to generate random lists and expressions and verify counting laws

use matches_counter::{count_matches, NumMatcher, ParsedExpression, Pattern};
use proptest::prelude::*;

// Small values keep collisions between list elements and patterns likely
fn value_strategy() -> impl Strategy<Value = i64> {
    -50i64..50
}

fn list_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(value_strategy(), 0..64)
}

fn pattern_strategy() -> impl Strategy<Value = Pattern> {
    prop_oneof![
        value_strategy().prop_map(Pattern::exact),
        (value_strategy(), value_strategy()).prop_map(|(from, to)| Pattern::range(from, to)),
    ]
}

prop_compose! {
    fn expression_strategy()(
        patterns in prop::collection::vec(pattern_strategy(), 1..6)
    ) -> String {
        patterns
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

proptest! {
    #[test]
    fn exact_value_counts_occurrences(values in list_strategy(), v in value_strategy()) {
        let expected = values.iter().filter(|&&x| x == v).count();
        prop_assert_eq!(count_matches(&values, &v.to_string()).unwrap(), expected);
    }

    #[test]
    fn range_counts_closed_interval(
        values in list_strategy(),
        a in value_strategy(),
        b in value_strategy(),
    ) {
        let (from, to) = (a.min(b), a.max(b));
        let expected = values.iter().filter(|&&x| from <= x && x <= to).count();
        prop_assert_eq!(count_matches(&values, &format!("{}-{}", from, to)).unwrap(), expected);
    }

    #[test]
    fn inverted_range_counts_nothing(
        values in list_strategy(),
        a in value_strategy(),
        b in value_strategy(),
    ) {
        prop_assume!(a != b);
        let (from, to) = (a.max(b), a.min(b));
        prop_assert_eq!(count_matches(&values, &format!("{}-{}", from, to)).unwrap(), 0);
    }

    #[test]
    fn union_not_sum(values in list_strategy(), expression in expression_strategy()) {
        let parsed: ParsedExpression = expression.parse().unwrap();
        let expected = values
            .iter()
            .filter(|&&x| parsed.iter().any(|p| p.num_match(x)))
            .count();
        let count = count_matches(&values, &expression).unwrap();

        prop_assert_eq!(count, expected);
        prop_assert!(count <= values.len());
    }

    #[test]
    fn duplicates_each_count(values in list_strategy(), expression in expression_strategy()) {
        let doubled: Vec<i64> = values.iter().chain(values.iter()).copied().collect();
        let single = count_matches(&values, &expression).unwrap();
        prop_assert_eq!(count_matches(&doubled, &expression).unwrap(), single * 2);
    }

    #[test]
    fn display_round_trips(expression in expression_strategy()) {
        let parsed: ParsedExpression = expression.parse().unwrap();
        prop_assert_eq!(parsed.to_string(), expression);
    }

    #[test]
    fn parsing_never_panics(expression in "[0-9, -]{0,20}") {
        let _ = count_matches(&[1, 2, 3], &expression);
    }
}
