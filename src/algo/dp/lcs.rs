/// Fills the LCS table: `dp[i][j]` is the length of a longest common
/// subsequence of `a[..i]` and `b[..j]`.
fn lcs_table<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Vec<usize>> {
    let mut dp = vec![vec![0; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp
}

/// Returns the length of a longest common subsequence of `a` and `b`.
///
/// Runs in time and space O(|a| · |b|).
///
/// # Examples
///
/// ```
/// use classic_algo::algo::dp::lcs;
///
/// assert_eq!(lcs(b"ABCDGH", b"AEDFHR"), 3);
/// ```
pub fn lcs<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    lcs_table(a, b)[a.len()][b.len()]
}

/// Returns a longest common subsequence of `a` and `b`.
///
/// When several subsequences have maximum length, ties are broken by
/// preferring to drop the last element of `a` while backtracking through
/// the table.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::dp::lcs_sequence;
///
/// assert_eq!(lcs_sequence(b"ABCDGH", b"AEDFHR"), b"ADH");
/// ```
pub fn lcs_sequence<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let dp = lcs_table(a, b);
    let mut result = Vec::with_capacity(dp[a.len()][b.len()]);
    let (mut i, mut j) = (a.len(), b.len());

    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            result.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] >= dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    result.reverse();
    result
}
