//! Property-based tests for the pipeline laws

use proptest::prelude::*;
use transducers::prelude::*;
use transducers::testing::{parity, PullCounter};
use transducers::transducer::{compose, filter, identity, map, take};

proptest! {
    #[test]
    fn prop_pipeline_matches_iterator_adapters(
        values in prop::collection::vec(-1000i32..1000, 0..200),
        modulus in 1i32..7,
        limit in 0usize..50,
    ) {
        let (via_pipeline, via_adapters) = parity(
            values,
            |p| p.map(|x| x * 3).filter(|x| x % modulus == 0).take(limit).to_list(),
            |it| it.map(|x| x * 3).filter(|x| x % modulus == 0).take(limit).collect::<Vec<_>>(),
        );
        prop_assert_eq!(via_pipeline, via_adapters);
    }

    #[test]
    fn prop_flatten_matches_iterator_flatten(
        rows in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..10), 0..20),
        limit in 0usize..100,
    ) {
        let (via_pipeline, via_adapters) = parity(
            rows,
            |p| p.flatten().take(limit).to_list(),
            |it| it.flatten().take(limit).collect::<Vec<_>>(),
        );
        prop_assert_eq!(via_pipeline, via_adapters);
    }

    #[test]
    fn prop_sum_matches_iterator_sum(values in prop::collection::vec(-10_000i64..10_000, 0..100)) {
        let total = values.clone().transduce(|p| p.sum());
        prop_assert_eq!(total, values.iter().sum::<i64>());
    }

    #[test]
    fn prop_compose_is_associative(
        values in prop::collection::vec(any::<i16>(), 0..100),
        limit in 0usize..20,
    ) {
        let a = || map(|x: i16| i32::from(x) + 1);
        let b = || filter(|x: &i32| x % 2 == 0);
        let c = || take(limit);

        let left: Vec<i32> = drive(values.clone(), compose(compose(a(), b()), c()).apply(sink::ToList));
        let right: Vec<i32> = drive(values, compose(a(), compose(b(), c())).apply(sink::ToList));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_identity_is_neutral(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let plain: Vec<i32> = drive(values.clone(), sink::ToList);
        let left: Vec<i32> = drive(values.clone(), compose(identity(), identity()).apply(sink::ToList));
        let right: Vec<i32> = drive(values.clone(), compose(map(|x: i32| x), identity()).apply(sink::ToList));
        prop_assert_eq!(&plain, &values);
        prop_assert_eq!(&left, &values);
        prop_assert_eq!(&right, &values);
    }

    #[test]
    fn prop_take_pulls_at_most_one_past_the_limit(
        len in 0usize..300,
        limit in 0usize..100,
    ) {
        let counter = PullCounter::new();
        let out = counter.wrap(0..len).transduce(|p| p.take(limit).to_list());
        prop_assert_eq!(out.len(), limit.min(len));
        prop_assert!(counter.pulled() <= limit + 1);
        prop_assert_eq!(counter.pulled(), (limit + 1).min(len));
    }

    #[test]
    fn prop_collect_into_keeps_prefix(
        prefix in prop::collection::vec(any::<u8>(), 0..10),
        values in prop::collection::vec(any::<u8>(), 0..10),
    ) {
        let out = values.clone().transduce(|p| p.collect_into(prefix.clone()));
        let mut expected = prefix;
        expected.extend(values);
        prop_assert_eq!(out, expected);
    }
}

#[test]
fn test_empty_input_yields_sink_defaults() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(empty.clone().transduce(|p| p.to_list()), Vec::<i32>::new());
    assert_eq!(empty.clone().transduce(|p| p.sum()), 0);
    assert_eq!(empty.clone().transduce(|p| p.sum_by(|x| x * 2)), 0);
    assert_eq!(empty.clone().transduce(|p| p.to_sequence()).len(), 0);
    assert_eq!(
        empty.transduce(|p| p.fold(|| "seed".to_string(), |acc: String, x: i32| acc + &x.to_string())),
        "seed"
    );
}

#[test]
fn test_take_counters_never_leak_between_runs() {
    let build = |p: Pipeline<char>| p.take(1).to_list();
    let first = "ab".chars().transduce(build);
    let second = "cd".chars().transduce(build);
    assert_eq!(first, vec!['a']);
    assert_eq!(second, vec!['c']);
}
