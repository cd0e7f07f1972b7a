//! Terminal operations: find_index, group_by, top_k, materialize.

mod test_data_gen;

use std::cell::Cell;

use pullseq::prelude::*;
use test_data_gen::{ids, scored, tie_fixture, Probe, Scored};

#[test]
fn test_find_index_first_match() {
    let seq = Collection::from(vec![3, 7, 2, 9]);
    assert_eq!(seq.find_index(|x| *x > 5), Some(1));
    assert_eq!(Collection::from(vec![1, 2, 3]).find_index(|x| *x > 5), None);
    assert_eq!(Collection::<i32>::from(vec![]).find_index(|_| true), None);
}

#[test]
fn test_find_index_stops_at_match() {
    let (probe, pulls) = Probe::new(vec![3, 7, 2, 9]);
    assert_eq!(probe.find_index(|x| *x > 5), Some(1));
    assert_eq!(pulls.get(), 2);
}

#[test]
fn test_find_index_on_unbounded_source() {
    let first_big_square = count_from(0).map(|x| x * x).find_index(|sq| *sq > 1000);
    assert_eq!(first_big_square, Some(32));
}

#[test]
fn test_try_find_index_propagates_error() {
    let (probe, pulls) = Probe::new(vec!["1", "2", "x", "4"]);
    let result = try_find_index(probe, |s| s.parse::<i32>().map(|n| n > 3));
    assert!(result.is_err());
    assert_eq!(pulls.get(), 3);

    let ok = try_find_index(Collection::from(vec!["1", "5"]).cursor(), |s| {
        s.parse::<i32>().map(|n| n > 3)
    });
    assert_eq!(ok, Ok(Some(1)));
}

#[test]
fn test_group_by_preserves_first_occurrence_and_pull_order() {
    let words = Collection::from(vec!["apple", "bob", "avocado", "cat", "banana"]);
    let groups = words.group_by(|w| w.chars().next());

    let keys: Vec<_> = groups.keys().copied().collect();
    assert_eq!(keys, vec![Some('a'), Some('b'), Some('c')]);
    assert_eq!(groups.get(&Some('a')), Some(&["apple", "avocado"][..]));
    assert_eq!(groups.get(&Some('b')), Some(&["bob", "banana"][..]));
    assert_eq!(groups.get(&Some('z')), None);
    assert_eq!(groups.total_values(), 5);
}

#[test]
fn test_group_by_records_by_category() {
    let groups = tie_fixture().group_by(|s| s.category);
    let summary: Vec<(&str, Vec<&str>)> = groups
        .iter()
        .map(|(k, v)| (*k, ids(v)))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("mid", vec!["five"]),
            ("high", vec!["a", "b"]),
            ("low", vec!["one"]),
        ]
    );
}

#[test]
fn test_group_by_empty_source() {
    let groups = Collection::<i32>::from(vec![]).group_by(|x| x % 2);
    assert!(groups.is_empty());
}

#[test]
fn test_group_by_key_runs_once_per_element() {
    let calls = Cell::new(0);
    let groups = Collection::from(vec![1, 2, 3, 4]).cursor().group_by(|x| {
        calls.set(calls.get() + 1);
        x % 2 == 0
    });
    assert_eq!(calls.get(), 4);
    assert_eq!(groups.len(), 2);
}

#[test]
fn test_try_group_by_propagates_error() {
    // The prelude's `Result` is the one-parameter crate alias.
    let result: std::result::Result<_, String> =
        try_group_by(Collection::from(vec![1, -2, 3]).cursor(), |x| {
            if *x < 0 {
                Err(format!("negative: {x}"))
            } else {
                Ok(x % 2)
            }
        });
    assert_eq!(result.unwrap_err(), "negative: -2");
}

#[test]
fn test_top_k_ties_keep_arrival_order() {
    let top = tie_fixture().top_k(|s| s.score, 2);
    assert_eq!(ids(&top), vec!["a", "b"]);
}

#[test]
fn test_top_k_descending_and_short_input() {
    let seq = Collection::from(vec![4, 1, 7, 3, 9, 2]);
    assert_eq!(seq.top_k(|x| *x, 3), vec![9, 7, 4]);
    assert_eq!(seq.top_k(|x| *x, 100), vec![9, 7, 4, 3, 2, 1]);
    assert_eq!(Collection::<i32>::from(vec![]).top_k(|x| *x, 3), Vec::<i32>::new());
}

#[test]
fn test_top_k_later_equal_score_does_not_displace() {
    let items = Collection::from(vec![
        scored("first", 9, "x"),
        scored("second", 8, "x"),
        scored("late", 8, "x"),
    ]);
    let top = items.top_k(|s| s.score, 2);
    assert_eq!(ids(&top), vec!["first", "second"]);
}

#[test]
fn test_top_k_scores_each_element_once() {
    let calls = Cell::new(0);
    let seq = Collection::from((0..50).collect::<Vec<i32>>());
    let top = seq.top_k(
        |x| {
            calls.set(calls.get() + 1);
            -(x - 25).abs()
        },
        3,
    );
    assert_eq!(calls.get(), 50);
    assert_eq!(top, vec![25, 24, 26]);
}

#[test]
fn test_top_k_accumulator_rejects_below_threshold() {
    let mut top: TopK<i64, &str> = TopK::new(2);
    assert!(top.offer(5, "five"));
    assert!(top.offer(9, "nine"));
    assert_eq!(top.threshold(), Some(&5));
    assert!(!top.offer(1, "one"));
    assert!(!top.offer(5, "another five"));
    assert!(top.offer(7, "seven"));
    assert_eq!(top.into_scored(), vec![(9, "nine"), (7, "seven")]);
}

#[test]
fn test_top_k_float_scores() {
    let temps = Collection::from(vec![12.5_f64, -3.0, 30.25, 18.0]);
    assert_eq!(temps.top_k(|t| *t, 2), vec![30.25, 18.0]);
}

#[test]
fn test_try_top_k_stops_at_first_error() {
    let (probe, pulls) = Probe::new(vec!["3", "oops", "5"]);
    let result = try_top_k(probe, |s| s.parse::<i32>(), 2);
    assert!(result.is_err());
    assert_eq!(pulls.get(), 2);
}

#[test]
fn test_materialize_is_idempotent_on_sequences() {
    let seq = Collection::from(vec![scored("x", 1, "c"), scored("y", 2, "c")])
        .filter(|s: &Scored| s.score > 0);
    let first = seq.materialize();
    let second = seq.materialize();
    assert_eq!(first, second);
    assert_eq!(ids(&first), vec!["x", "y"]);
}

#[test]
#[should_panic(expected = "materialize would drain an unbounded cursor")]
fn test_materialize_unbounded_panics() {
    let _ = count_from(0).materialize();
}

#[test]
#[should_panic(expected = "group_by would drain an unbounded cursor")]
fn test_group_by_unbounded_through_adapters_panics() {
    let _ = count_from(0).map(|x| x * 2).filter(|x| x % 3 == 0).group_by(|x| x % 2);
}

#[test]
#[should_panic(expected = "top_k would drain an unbounded cursor")]
fn test_top_k_unbounded_panics() {
    let _ = count_from(0).top_k(|x| *x, 3);
}

#[test]
#[should_panic(expected = "top_k requires k >= 1")]
fn test_top_k_zero_panics() {
    let _ = Collection::from(vec![1, 2, 3]).top_k(|x| *x, 0);
}

#[test]
fn test_bounded_unbounded_source_drains() {
    let evens = count_from(0).filter(|x| x % 2 == 0).take(5);
    assert_eq!(evens.materialize(), vec![0, 2, 4, 6, 8]);
    assert_eq!(evens.top_k(|x| *x, 2), vec![8, 6]);
    assert_eq!(evens.group_by(|x| x % 4).len(), 2);
}

#[test]
fn test_partition_serializes_in_key_order() {
    let groups = Collection::from(vec![("z", 1), ("a", 2), ("z", 3)]).group_by(|(k, _)| *k);
    let values: Vec<Vec<i32>> = groups.iter().map(|(_, v)| v.iter().map(|p| p.1).collect()).collect();
    assert_eq!(values, vec![vec![1, 3], vec![2]]);

    let json = serde_json::to_string(&groups).unwrap();
    assert_eq!(json, r#"{"z":[["z",1],["z",3]],"a":[["a",2]]}"#);
}
