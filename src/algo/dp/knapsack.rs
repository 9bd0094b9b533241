use crate::{Error, Result};

/// An optimal choice of items for the 0/1 knapsack problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackSolution {
    /// The total value of the chosen items.
    pub value: u64,
    /// The indices of the chosen items, in increasing order.
    pub items: Vec<usize>,
}

/// Fills the knapsack table: `dp[i][w]` is the best value using the first
/// `i` items within capacity `w`.
fn knapsack_table(weights: &[usize], values: &[u64], capacity: usize) -> Result<Vec<Vec<u64>>> {
    if weights.len() != values.len() {
        return Err(Error::LengthMismatch {
            left: weights.len(),
            right: values.len(),
        });
    }

    let n = weights.len();
    let mut dp = vec![vec![0u64; capacity + 1]; n + 1];
    for i in 1..=n {
        let (weight, value) = (weights[i - 1], values[i - 1]);
        for w in 0..=capacity {
            dp[i][w] = if weight <= w {
                let with_item = dp[i - 1][w - weight]
                    .checked_add(value)
                    .ok_or(Error::Overflow {
                        operation: "knapsack",
                        input: value,
                        max: u64::MAX - dp[i - 1][w - weight],
                    })?;
                dp[i - 1][w].max(with_item)
            } else {
                dp[i - 1][w]
            };
        }
    }
    Ok(dp)
}

/// Solves the 0/1 knapsack problem, returning the maximum total value of a
/// subset of items whose total weight does not exceed `capacity`.
///
/// Item `i` has weight `weights[i]` and value `values[i]`, and can be used at
/// most once. A zero capacity admits only zero-weight items. Runs in time
/// and space O(n · capacity).
///
/// # Errors
///
/// [`Error::LengthMismatch`] if `weights` and `values` have different
/// lengths, and [`Error::Overflow`] if the total value of a subset that fits
/// in the knapsack does not fit a `u64`.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::dp::knapsack;
///
/// assert_eq!(knapsack(&[2, 3, 4, 5], &[3, 4, 5, 6], 10), Ok(13));
/// ```
pub fn knapsack(weights: &[usize], values: &[u64], capacity: usize) -> Result<u64> {
    Ok(knapsack_table(weights, values, capacity)?[weights.len()][capacity])
}

/// Solves the 0/1 knapsack problem, returning also the chosen items.
///
/// See [`knapsack`]. Among optimal subsets, the one returned is determined
/// by backtracking from the last item, which is excluded whenever excluding
/// it preserves the optimum.
pub fn knapsack_items(
    weights: &[usize],
    values: &[u64],
    capacity: usize,
) -> Result<KnapsackSolution> {
    let dp = knapsack_table(weights, values, capacity)?;
    let mut items = Vec::new();
    let mut w = capacity;

    for i in (1..=weights.len()).rev() {
        if dp[i][w] != dp[i - 1][w] {
            items.push(i - 1);
            w -= weights[i - 1];
        }
    }

    items.reverse();
    Ok(KnapsackSolution {
        value: dp[weights.len()][capacity],
        items,
    })
}
