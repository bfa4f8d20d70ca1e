//! Integration tests for seqext Core.

use seqext_core::prelude::*;

#[test]
fn test_pipeline_over_infinite_range() {
    let squares = range(1, None)
        .filter(|n| n % 2 == 1)
        .map(|n| n * n)
        .take_while(|n| *n < 100)
        .to_vec();
    assert_eq!(squares, vec![1, 9, 25, 49, 81]);
}

#[test]
fn test_range_properties() {
    assert_eq!(range(0, 4).to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(range(4, 4).count(), 0);
    assert_eq!(range(-3, None).take(3).to_vec(), vec![-3, -2, -1]);
}

#[test]
fn test_once_and_empty() {
    assert_eq!(once("only").exact(), Ok("only"));
    assert_eq!(empty::<u8>().chain(once(1)).chain(empty()).to_vec(), vec![1]);
}

#[test]
fn test_group_then_flatten_restores_input() {
    let input = vec![1, 1, 2, 3, 3, 3, 1];
    let regrouped = input
        .clone()
        .into_seq()
        .group(|a, b| a == b)
        .flat_map(|group| group)
        .to_vec();
    assert_eq!(regrouped, input);
}

#[test]
fn test_run_length_encoding() {
    let encoded = "aaabccdddd"
        .chars()
        .into_seq()
        .group(|a, b| a == b)
        .map(|run| format!("{}{}", run.len(), run[0]))
        .join("");
    assert_eq!(encoded, "3a1b2c4d");
}

#[test]
fn test_moving_average_with_windows() {
    let averages = vec![2.0, 4.0, 6.0, 8.0]
        .into_seq()
        .windows(2)
        .map(|w| w.iter().sum::<f64>() / 2.0)
        .to_vec();
    assert_eq!(averages, vec![3.0, 5.0, 7.0]);
}

#[test]
fn test_chunks_cover_input_exactly() {
    let chunks = range(0, 10).chunks(4).to_vec();
    assert_eq!(chunks.len(), 3);
    assert!(chunks[..2].iter().all(|c| c.len() == 4));
    assert_eq!(chunks.into_iter().flatten().collect::<Vec<_>>(), range(0, 10).to_vec());
}

#[test]
fn test_chunks_zero_is_reported() {
    let err = range(0, 3).try_chunks(0).err();
    assert_eq!(err, Some(Error::ZeroSize { combinator: "chunk" }));
    assert_eq!(
        err.map(|e| e.to_string()).as_deref(),
        Some("chunk size must be greater than 0")
    );
}

#[test]
fn test_cycle_with_zip_labels_round_robin() {
    let assignments = vec!["a", "b", "c", "d", "e"]
        .into_seq()
        .zip(vec!["worker-1", "worker-2"].into_seq().cycle())
        .to_vec();
    assert_eq!(
        assignments,
        vec![
            ("a", "worker-1"),
            ("b", "worker-2"),
            ("c", "worker-1"),
            ("d", "worker-2"),
            ("e", "worker-1"),
        ]
    );
}

#[test]
fn test_zip_stops_at_shorter_side() {
    assert_eq!(range(0, None).zip(vec!['x', 'y']).count(), 2);
    assert_eq!(range(0, 2).zip(range(0, None)).count(), 2);
}

#[test]
fn test_product_of_ranges() {
    let grid = range(0, 2).product(range(0, 3).to_vec()).to_vec();
    assert_eq!(grid.len(), 6);
    assert_eq!(grid[0], (0, 0));
    assert_eq!(grid[5], (1, 2));
}

#[test]
fn test_intersperse_and_join_agree() {
    let spaced: String = vec!["a", "b", "c"].into_seq().intersperse("-").collect();
    assert_eq!(spaced, vec!["a", "b", "c"].into_seq().join("-"));
}

#[test]
fn test_drop_then_take_slices() {
    assert_eq!(range(0, None).drop(5).take(3).to_vec(), vec![5, 6, 7]);
    assert_eq!(range(0, 10).drop_while(|n| *n < 7).to_vec(), vec![7, 8, 9]);
}

#[test]
fn test_map_while_parses_prefix() {
    let parsed = vec!["1", "2", "x", "4"]
        .into_seq()
        .map_while(|s| s.parse::<u32>().ok())
        .to_vec();
    assert_eq!(parsed, vec![1, 2]);
}

#[test]
fn test_from_fn_fibonacci() {
    let mut state = (0u64, 1u64);
    let fib = from_fn(move || {
        let next = state.0;
        state = (state.1, state.0 + state.1);
        Some(next)
    });
    assert_eq!(fib.take(10).to_vec(), vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
}

#[test]
fn test_terminal_on_exhausted_sequence() {
    let mut seq = range(0, 3).map(|n| n * 2);
    assert_eq!(seq.by_ref().to_vec(), vec![0, 2, 4]);
    assert_eq!(seq.by_ref().count(), 0);
    assert_eq!(seq.find(|_| true), None);
    assert!(seq.every(|_| false));
    assert!(!seq.some(|_| true));
    assert_eq!(seq.next(), None);
}

#[test]
fn test_early_exit_leaves_remainder() {
    let mut seq = range(0, 10);
    assert_eq!(seq.find(|n| *n == 3), Some(3));
    assert_eq!(seq.find_map(|n| (n > 5).then_some(n * 100)), Some(600));
    assert_eq!(seq.to_vec(), vec![7, 8, 9]);
}

#[test]
fn test_chain_all_builds_sequence_of_ranges() {
    let flat = empty::<i64>()
        .chain_all(vec![range(0, 2), range(10, 12), range(20, 20)])
        .to_vec();
    assert_eq!(flat, vec![0, 1, 10, 11]);
}

#[test]
fn test_reduce_builds_histogram() {
    let histogram = vec![3, 1, 3, 2, 3]
        .into_seq()
        .reduce([0usize; 4], |mut counts, n| {
            counts[n] += 1;
            counts
        });
    assert_eq!(histogram, [0, 1, 1, 3]);
}

#[test]
fn test_debug_helpers_are_transparent() {
    assert_eq!(debug(range(0, 3).debug("range").to_vec()), vec![0, 1, 2]);
}

#[test]
fn test_seq_new_and_into_seq_are_equivalent() {
    assert_eq!(Seq::new([1, 2, 3]).to_vec(), [1, 2, 3].into_seq().to_vec());
}
