/// Fills the coin-change table: `dp[i]` is the minimum number of coins
/// summing to `i`, or `None` if `i` is unreachable.
fn coin_table(coins: &[usize], amount: usize) -> Vec<Option<usize>> {
    let mut dp = vec![None; amount + 1];
    dp[0] = Some(0);
    for &coin in coins.iter().filter(|&&coin| coin > 0) {
        for i in coin..=amount {
            if let Some(count) = dp[i - coin] {
                if dp[i].is_none_or(|best| count + 1 < best) {
                    dp[i] = Some(count + 1);
                }
            }
        }
    }
    dp
}

/// Returns the minimum number of coins summing to `amount`, or [`None`] if
/// no combination of the given denominations (each available in unlimited
/// supply) does.
///
/// An amount of zero needs zero coins; zero-valued coins are ignored. Runs
/// in time O(amount · |coins|) and space O(amount).
///
/// # Examples
///
/// ```
/// use classic_algo::algo::dp::coin_change;
///
/// assert_eq!(coin_change(&[1, 2, 5], 11), Some(3));
/// assert_eq!(coin_change(&[2], 3), None);
/// ```
pub fn coin_change(coins: &[usize], amount: usize) -> Option<usize> {
    coin_table(coins, amount)[amount]
}

/// Returns a minimum multiset of coins summing to `amount` in
/// non-increasing order, or [`None`] if `amount` is unreachable.
pub fn coin_change_coins(coins: &[usize], amount: usize) -> Option<Vec<usize>> {
    let dp = coin_table(coins, amount);
    let count = dp[amount]?;
    let mut result = Vec::with_capacity(count);
    let mut remaining = amount;

    while remaining > 0 {
        // Some coin always leads to an optimal subproblem
        let coin = coins
            .iter()
            .copied()
            .filter(|&coin| coin > 0 && coin <= remaining)
            .filter(|&coin| dp[remaining - coin].map(|c| c + 1) == dp[remaining])
            .max()?;
        result.push(coin);
        remaining -= coin;
    }

    result.sort_unstable_by(|a, b| b.cmp(a));
    Some(result)
}
