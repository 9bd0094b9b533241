use crate::{Error, Result};

/// The largest index whose Fibonacci number fits a `u64`.
pub const MAX_FIBONACCI_INPUT: u32 = 93;

fn check_input(n: u32) -> Result<()> {
    if n > MAX_FIBONACCI_INPUT {
        return Err(Error::Overflow {
            operation: "fibonacci",
            input: n as u64,
            max: MAX_FIBONACCI_INPUT as u64,
        });
    }
    Ok(())
}

/// Computes the `n`-th Fibonacci number with the naive double recursion.
///
/// F(0) = 0, F(1) = 1, F(n) = F(n - 1) + F(n - 2). The running time is
/// exponential in `n`; use [`fibonacci_memo`] for anything but small inputs.
///
/// # Errors
///
/// [`Error::Overflow`] if `n` is larger than [`MAX_FIBONACCI_INPUT`].
pub fn fibonacci(n: u32) -> Result<u64> {
    check_input(n)?;
    Ok(fib_rec(n))
}

fn fib_rec(n: u32) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    fib_rec(n - 1) + fib_rec(n - 2)
}

/// A cache of Fibonacci numbers.
///
/// The cache is owned by the caller: it can be reused across calls to
/// [`fibonacci_memo`] to amortize work, or [reset](FibonacciCache::reset)
/// to start from scratch. Nothing is shared between distinct caches.
#[derive(Debug, Clone, Default)]
pub struct FibonacciCache {
    /// `values[i]` is F(i), when computed.
    values: Vec<Option<u64>>,
}

impl FibonacciCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value of F(`n`), if any.
    pub fn get(&self, n: u32) -> Option<u64> {
        self.values.get(n as usize).copied().flatten()
    }

    /// Returns the number of cached values.
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Returns true if no value is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empties the cache.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    fn insert(&mut self, n: u32, value: u64) {
        let n = n as usize;
        if self.values.len() <= n {
            self.values.resize(n + 1, None);
        }
        self.values[n] = Some(value);
    }
}

/// Computes the `n`-th Fibonacci number with memoized recursion.
///
/// Every value in `cache` is computed at most once, so the running time is
/// linear in `n` for an empty cache and constant for a cached value. The
/// result is always equal to that of [`fibonacci`].
///
/// # Errors
///
/// [`Error::Overflow`] if `n` is larger than [`MAX_FIBONACCI_INPUT`].
///
/// # Examples
///
/// ```
/// use classic_algo::algo::recursion::*;
///
/// let mut cache = FibonacciCache::new();
/// assert_eq!(fibonacci_memo(10, &mut cache), Ok(55));
/// assert_eq!(cache.get(9), Some(34));
/// ```
pub fn fibonacci_memo(n: u32, cache: &mut FibonacciCache) -> Result<u64> {
    check_input(n)?;
    Ok(fib_memo_rec(n, cache))
}

fn fib_memo_rec(n: u32, cache: &mut FibonacciCache) -> u64 {
    if let Some(value) = cache.get(n) {
        return value;
    }
    if n <= 1 {
        return n as u64;
    }
    let value = fib_memo_rec(n - 1, cache) + fib_memo_rec(n - 2, cache);
    cache.insert(n, value);
    value
}
