use std::cmp::Ordering;

/// Iterative binary search.
///
/// The search keeps an inclusive interval `[left, right]` of candidate
/// positions, probes `mid = ⌊(left + right) / 2⌋` and narrows the interval
/// until either the probe matches or the interval becomes empty.
///
/// `seq` must be sorted in ascending order; otherwise, the returned value is
/// unspecified. When `target` appears several times, the index returned is
/// the first probe that hits one of its occurrences, not necessarily the
/// leftmost one.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::search::binary_search;
///
/// let seq = [11, 12, 22, 25, 34, 64, 90];
/// assert_eq!(binary_search(&seq, &34), Some(4));
/// assert_eq!(binary_search(&seq, &35), None);
/// ```
pub fn binary_search<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    binary_search_by(seq, |elem| elem.cmp(target))
}

/// Iterative binary search with a comparator.
///
/// The comparator returns the ordering of an element with respect to the
/// target, that is, [`Less`](Ordering::Less) if the element precedes the
/// target. See [`binary_search`] for the details of the search.
pub fn binary_search_by<T, F: FnMut(&T) -> Ordering>(seq: &[T], mut cmp: F) -> Option<usize> {
    let mut left = 0;
    // Inclusive upper bound; an empty sequence has no candidates
    let mut right = seq.len().checked_sub(1)?;

    while left <= right {
        let mid = left + (right - left) / 2;
        match cmp(&seq[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => {
                // right would become negative: the interval is empty
                if mid == 0 {
                    return None;
                }
                right = mid - 1;
            }
        }
    }

    None
}

/// Recursive binary search.
///
/// Same contract as [`binary_search`], and always returns the same index.
/// The recursion is a tail call on the narrowed interval, so its depth is
/// at most ⌈log₂(n + 1)⌉.
pub fn recursive_binary_search<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    recursive_binary_search_by(seq, |elem| elem.cmp(target))
}

/// Recursive binary search with a comparator.
///
/// See [`binary_search_by`] for the meaning of the comparator.
pub fn recursive_binary_search_by<T, F: FnMut(&T) -> Ordering>(
    seq: &[T],
    mut cmp: F,
) -> Option<usize> {
    let right = seq.len().checked_sub(1)?;
    search_interval(seq, &mut cmp, 0, right)
}

fn search_interval<T, F: FnMut(&T) -> Ordering>(
    seq: &[T],
    cmp: &mut F,
    left: usize,
    right: usize,
) -> Option<usize> {
    if left > right {
        return None;
    }

    let mid = left + (right - left) / 2;
    match cmp(&seq[mid]) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search_interval(seq, cmp, mid + 1, right),
        Ordering::Greater => search_interval(seq, cmp, left, mid.checked_sub(1)?),
    }
}
