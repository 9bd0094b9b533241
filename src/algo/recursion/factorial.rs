use crate::{Error, Result};

/// The largest input whose factorial fits a `u64`.
pub const MAX_FACTORIAL_INPUT: u64 = 20;

/// Computes `n!`.
///
/// Inputs `n <= 1` (except negative ones) yield 1.
///
/// # Errors
///
/// [`Error::NegativeInput`] if `n` is negative, [`Error::Overflow`] if `n`
/// is larger than [`MAX_FACTORIAL_INPUT`].
///
/// # Examples
///
/// ```
/// use classic_algo::algo::recursion::factorial;
///
/// assert_eq!(factorial(5), Ok(120));
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<u64> {
    let n = u64::try_from(n).map_err(|_| Error::NegativeInput(n))?;
    if n > MAX_FACTORIAL_INPUT {
        return Err(Error::Overflow {
            operation: "factorial",
            input: n,
            max: MAX_FACTORIAL_INPUT,
        });
    }
    // The recursion n! = n * (n - 1)! unrolled from the base case
    Ok((2..=n).product())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
    }

    #[test]
    fn test_limits() {
        assert_eq!(factorial(20), Ok(2_432_902_008_176_640_000));
        assert!(matches!(factorial(21), Err(Error::Overflow { input: 21, .. })));
        assert_eq!(factorial(-3), Err(Error::NegativeInput(-3)));
        assert_eq!(factorial(i64::MIN), Err(Error::NegativeInput(i64::MIN)));
    }

    #[test]
    fn test_recurrence() {
        for n in 1..=MAX_FACTORIAL_INPUT as i64 {
            assert_eq!(factorial(n), factorial(n - 1).map(|f| f * n as u64));
        }
    }
}
