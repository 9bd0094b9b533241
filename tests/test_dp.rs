use anyhow::Result;
use classic_algo::algo::dp::*;
use classic_algo::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Returns true if `sub` is a subsequence of `seq`.
fn is_subsequence<T: PartialEq>(sub: &[T], seq: &[T]) -> bool {
    let mut iter = seq.iter();
    sub.iter().all(|x| iter.any(|y| x == y))
}

#[test]
fn test_lcs() {
    assert_eq!(lcs(b"ABCDGH", b"AEDFHR"), 3);
    assert_eq!(lcs(b"AGGTAB", b"GXTXAYB"), 4);
    assert_eq!(lcs::<u8>(b"", b"ABC"), 0);
    assert_eq!(lcs(b"ABC", b"ABC"), 3);
    assert_eq!(lcs_sequence(b"ABCDGH", b"AEDFHR"), b"ADH");
}

#[test]
fn test_lcs_random() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..200 {
        let a: Vec<u8> = (0..rng.random_range(0..30)).map(|_| rng.random_range(0..4)).collect();
        let b: Vec<u8> = (0..rng.random_range(0..30)).map(|_| rng.random_range(0..4)).collect();
        let common = lcs_sequence(&a, &b);
        assert_eq!(common.len(), lcs(&a, &b));
        assert_eq!(lcs(&a, &b), lcs(&b, &a));
        assert!(is_subsequence(&common, &a));
        assert!(is_subsequence(&common, &b));
    }
}

#[test]
fn test_knapsack() -> Result<()> {
    assert_eq!(knapsack(&[2, 3, 4, 5], &[3, 4, 5, 6], 10)?, 13);
    assert_eq!(knapsack(&[1, 3, 4, 5], &[1, 4, 5, 7], 7)?, 9);
    assert_eq!(knapsack(&[2, 3], &[3, 4], 0)?, 0);
    assert_eq!(knapsack(&[], &[], 10)?, 0);
    assert_eq!(knapsack(&[0, 1], &[5, 1], 0)?, 5);
    assert_eq!(
        knapsack(&[1, 2], &[1], 3),
        Err(Error::LengthMismatch { left: 2, right: 1 })
    );

    let solution = knapsack_items(&[2, 3, 4, 5], &[3, 4, 5, 6], 10)?;
    assert_eq!(solution.value, 13);
    assert_eq!(solution.items, [0, 1, 3]);
    Ok(())
}

/// Exhaustive 0/1 knapsack over all subsets.
fn brute_force_knapsack(weights: &[usize], values: &[u64], capacity: usize) -> u64 {
    (0_u32..1 << weights.len())
        .filter_map(|mask| {
            let chosen = (0..weights.len()).filter(|&i| mask & (1 << i) != 0);
            let weight: usize = chosen.clone().map(|i| weights[i]).sum();
            (weight <= capacity).then(|| chosen.map(|i| values[i]).sum())
        })
        .max()
        .unwrap_or(0)
}

#[test]
fn test_knapsack_brute_force() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..300 {
        let n = rng.random_range(0..=10);
        let weights: Vec<usize> = (0..n).map(|_| rng.random_range(0..15)).collect();
        let values: Vec<u64> = (0..n).map(|_| rng.random_range(0..100)).collect();
        let capacity = rng.random_range(0..40);

        let expected = brute_force_knapsack(&weights, &values, capacity);
        assert_eq!(knapsack(&weights, &values, capacity)?, expected);

        let solution = knapsack_items(&weights, &values, capacity)?;
        assert_eq!(solution.value, expected);
        assert!(solution.items.is_sorted());
        assert_eq!(solution.items.iter().map(|&i| values[i]).sum::<u64>(), expected);
        assert!(solution.items.iter().map(|&i| weights[i]).sum::<usize>() <= capacity);
    }
    Ok(())
}

#[test]
fn test_coin_change() {
    assert_eq!(coin_change(&[1, 2, 5], 11), Some(3));
    assert_eq!(coin_change(&[2], 3), None);
    assert_eq!(coin_change(&[1], 0), Some(0));
    assert_eq!(coin_change(&[], 0), Some(0));
    assert_eq!(coin_change(&[], 1), None);
    assert_eq!(coin_change(&[0, 3], 6), Some(2));
    // Greedy would take 4 + 1 + 1
    assert_eq!(coin_change(&[1, 3, 4], 6), Some(2));
    assert_eq!(coin_change_coins(&[1, 3, 4], 6), Some(vec![3, 3]));
    assert_eq!(coin_change_coins(&[1, 2, 5], 11), Some(vec![5, 5, 1]));
    assert_eq!(coin_change_coins(&[2], 3), None);
}

#[test]
fn test_coin_change_random() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let coins: Vec<usize> = (0..rng.random_range(1..5))
            .map(|_| rng.random_range(1..20))
            .collect();
        let amount = rng.random_range(0..100);
        let count = coin_change(&coins, amount);
        let change = coin_change_coins(&coins, amount);
        assert_eq!(count, change.as_ref().map(Vec::len));
        if let Some(change) = change {
            assert_eq!(change.iter().sum::<usize>(), amount);
            assert!(change.iter().all(|c| coins.contains(c)));
            assert!(change.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}

#[test]
fn test_repeatable() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let a: Vec<u8> = (0..rng.random_range(0..30)).map(|_| rng.random_range(0..4)).collect();
        let b: Vec<u8> = (0..rng.random_range(0..30)).map(|_| rng.random_range(0..4)).collect();
        assert_eq!(lcs(&a, &b), lcs(&a, &b));
        assert_eq!(lcs_sequence(&a, &b), lcs_sequence(&a, &b));

        let n = rng.random_range(0..10);
        let weights: Vec<usize> = (0..n).map(|_| rng.random_range(0..10)).collect();
        let values: Vec<u64> = (0..n).map(|_| rng.random_range(0..50)).collect();
        let capacity = rng.random_range(0..30);
        assert_eq!(
            knapsack_items(&weights, &values, capacity)?,
            knapsack_items(&weights, &values, capacity)?
        );

        let coins: Vec<usize> = (0..rng.random_range(1..5))
            .map(|_| rng.random_range(1..20))
            .collect();
        let amount = rng.random_range(0..100);
        assert_eq!(coin_change_coins(&coins, amount), coin_change_coins(&coins, amount));
    }
    Ok(())
}
