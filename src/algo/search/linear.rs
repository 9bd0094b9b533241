/// Returns the index of the first element equal to `target`, scanning from
/// left to right.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::search::linear_search;
///
/// assert_eq!(linear_search(&[64, 34, 25, 12, 22, 11, 90], &22), Some(4));
/// assert_eq!(linear_search(&[64, 34, 25], &7), None);
/// ```
pub fn linear_search<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    linear_search_by(seq, |elem| elem == target)
}

/// Returns the index of the first element satisfying `pred`.
pub fn linear_search_by<T, P: FnMut(&T) -> bool>(seq: &[T], mut pred: P) -> Option<usize> {
    for (i, elem) in seq.iter().enumerate() {
        if pred(elem) {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_first_match() {
        assert_eq!(linear_search(&[3, 1, 3, 1], &1), Some(1));
        assert_eq!(linear_search(&[3, 1, 3, 1], &3), Some(0));
    }

    #[test]
    fn test_empty() {
        assert_eq!(linear_search::<i32>(&[], &0), None);
    }

    #[test]
    fn test_by() {
        assert_eq!(linear_search_by(&["ab", "cde", "f"], |s| s.len() > 2), Some(1));
        assert_eq!(linear_search_by(&["ab", "cde", "f"], |s| s.is_empty()), None);
    }
}
