use std::cmp::Ordering;

/// Inputs shorter than this are sorted sequentially by [`par_merge_sort`].
pub const PAR_MERGE_SORT_THRESHOLD: usize = 4096;

/// Sorts a slice with merge sort, returning a new vector.
///
/// The slice is split at `len / 2`, the halves are sorted recursively and
/// then merged by repeatedly taking the smaller head; on ties the head of
/// the left half is taken, so the sort is stable. The recursion depth is
/// ⌈log₂ n⌉.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::sort::merge_sort;
///
/// assert_eq!(merge_sort(&[3, 1, 2]), vec![1, 2, 3]);
/// ```
pub fn merge_sort<T: Clone + Ord>(seq: &[T]) -> Vec<T> {
    merge_sort_by(seq, T::cmp)
}

/// Sorts a slice with merge sort using a comparator, returning a new vector.
pub fn merge_sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(seq: &[T], mut cmp: F) -> Vec<T> {
    sort_rec(seq, &mut cmp)
}

fn sort_rec<T: Clone, F: FnMut(&T, &T) -> Ordering>(seq: &[T], cmp: &mut F) -> Vec<T> {
    if seq.len() <= 1 {
        return seq.to_vec();
    }
    let (left, right) = seq.split_at(seq.len() / 2);
    let left = sort_rec(left, cmp);
    let right = sort_rec(right, cmp);
    merge(left, right, cmp)
}

/// Merges two sorted vectors, preferring `left` on ties.
fn merge<T, F: FnMut(&T, &T) -> Ordering>(left: Vec<T>, right: Vec<T>, cmp: &mut F) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if cmp(l, r) != Ordering::Greater {
            result.extend(left.next());
        } else {
            result.extend(right.next());
        }
    }

    result.extend(left);
    result.extend(right);
    result
}

/// Sorts a slice with a parallel merge sort, returning a new vector.
///
/// The algorithm is the same as that of [`merge_sort`], and so is the
/// output, stability included; halves longer than
/// [`PAR_MERGE_SORT_THRESHOLD`] are sorted concurrently on the current
/// [`rayon`] thread pool.
pub fn par_merge_sort<T: Clone + Ord + Send + Sync>(seq: &[T]) -> Vec<T> {
    par_merge_sort_by(seq, T::cmp)
}

/// Sorts a slice with a parallel merge sort using a comparator.
pub fn par_merge_sort_by<T, F>(seq: &[T], cmp: F) -> Vec<T>
where
    T: Clone + Send + Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    if seq.len() > PAR_MERGE_SORT_THRESHOLD {
        log::debug!(
            "Sorting {} elements on {} threads",
            seq.len(),
            rayon::current_num_threads()
        );
    }
    par_sort_rec(seq, &cmp)
}

fn par_sort_rec<T, F>(seq: &[T], cmp: &F) -> Vec<T>
where
    T: Clone + Send + Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    if seq.len() <= PAR_MERGE_SORT_THRESHOLD {
        return sort_rec(seq, &mut |a: &T, b: &T| cmp(a, b));
    }
    let (left, right) = seq.split_at(seq.len() / 2);
    let (left, right) = rayon::join(|| par_sort_rec(left, cmp), || par_sort_rec(right, cmp));
    merge(left, right, &mut |a: &T, b: &T| cmp(a, b))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_merge_prefers_left() {
        let left = vec![(1, 'l'), (2, 'l')];
        let right = vec![(1, 'r'), (3, 'r')];
        let merged = merge(left, right, &mut |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        assert_eq!(merged, vec![(1, 'l'), (1, 'r'), (2, 'l'), (3, 'r')]);
    }

    #[test]
    fn test_reference_input() {
        assert_eq!(
            merge_sort(&[64, 34, 25, 12, 22, 11, 90]),
            vec![11, 12, 22, 25, 34, 64, 90]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        // Large enough to fork several times
        let seq: Vec<u64> = (0..5 * PAR_MERGE_SORT_THRESHOLD as u64)
            .map(|i| (i * 2_654_435_761) % 1009)
            .collect();
        assert_eq!(par_merge_sort(&seq), merge_sort(&seq));
    }
}
