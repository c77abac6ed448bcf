use lomsort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_demo_array() {
    let mut input = vec![8, 7, 6, 1, 0, 9, 2];
    quicksort(&mut input);
    assert_eq!(input, vec![0, 1, 2, 6, 7, 8, 9]);
}

#[test]
fn test_empty() {
    let mut input: Vec<i32> = vec![];
    quicksort(&mut input);
    assert!(input.is_empty());
}

#[test]
fn test_single() {
    let mut input = vec![5];
    quicksort(&mut input);
    assert_eq!(input, vec![5]);
}

#[test]
fn test_duplicates_with_smaller_pivot() {
    let mut input = vec![2, 2, 2, 1];
    quicksort(&mut input);
    assert_eq!(input, vec![1, 2, 2, 2]);
}

#[test]
fn test_already_sorted_unchanged() {
    let mut input = vec![1, 2, 3, 4, 5];
    quicksort(&mut input);
    assert_eq!(input, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_edge_cases() {
    // 1. All equal
    let mut input = vec![7u8; 50];
    let expected = input.clone();
    quicksort(&mut input);
    assert_eq!(input, expected);

    // 2. Reversed
    let mut input: Vec<i32> = (0..50).rev().collect();
    quicksort(&mut input);
    assert_eq!(input, (0..50).collect::<Vec<_>>());

    // 3. Two elements, both orders
    let mut input = vec![2, 1];
    quicksort(&mut input);
    assert_eq!(input, vec![1, 2]);
    let mut input = vec![1, 2];
    quicksort(&mut input);
    assert_eq!(input, vec![1, 2]);

    // 4. Extremes
    let mut input = vec![i64::MAX, 0, i64::MIN, -1, i64::MAX];
    quicksort(&mut input);
    assert_eq!(input, vec![i64::MIN, -1, 0, i64::MAX, i64::MAX]);
}

#[test]
fn test_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut input: Vec<i32> = (0..500).map(|_| rng.random_range(-100..100)).collect();

    quicksort(&mut input);
    let once = input.clone();
    quicksort(&mut input);

    assert_eq!(input, once);
}

#[test]
fn test_strings() {
    let mut input = vec![
        "banana".to_string(),
        "apple".to_string(),
        "cherry".to_string(),
        "date".to_string(),
    ];
    quicksort(&mut input);
    assert_eq!(input, vec!["apple", "banana", "cherry", "date"]);
}

#[test]
fn test_slice_subrange() {
    let mut input = vec![9, 8, 3, 1, 2, 0, -1];
    quicksort(&mut input[2..5]);
    assert_eq!(input, vec![9, 8, 1, 2, 3, 0, -1]);
}

#[test]
fn test_custom_ord_type() {
    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
    struct Version {
        major: u16,
        minor: u16,
    }

    let v = |major, minor| Version { major, minor };
    let mut input = vec![v(1, 2), v(0, 9), v(1, 0), v(0, 9)];
    quicksort(&mut input);
    assert_eq!(input, vec![v(0, 9), v(0, 9), v(1, 0), v(1, 2)]);
}

#[test]
fn test_fuzz_random() {
    let mut rng = rand::rng();

    for _ in 0..10_000 {
        let count = rng.random_range(0..40);
        // Narrow value range so duplicates are common.
        let mut input: Vec<i32> = (0..count).map(|_| rng.random_range(-10..10)).collect();

        let mut expected = input.clone();
        expected.sort();

        quicksort(&mut input);
        assert_eq!(input, expected);
        assert_eq!(input.len(), count);
    }
}

#[test]
fn test_fuzz_random_large() {
    let mut rng = rand::rng();

    for _ in 0..100 {
        let count = rng.random_range(100..2000);
        let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

        let mut expected = input.clone();
        expected.sort();

        quicksort(&mut input);
        assert!(is_sorted(&input));
        assert_eq!(input, expected);
    }
}

#[test]
fn test_fuzz_byte_vectors() {
    let mut rng = StdRng::seed_from_u64(42);

    let mut input: Vec<Vec<u8>> = (0..1000)
        .map(|_| {
            let len = rng.random_range(0..4);
            let mut row = vec![0u8; len];
            rng.fill(&mut row[..]);
            row
        })
        .collect();

    let mut expected = input.clone();
    expected.sort();

    quicksort(&mut input);
    assert_eq!(input, expected);
}
