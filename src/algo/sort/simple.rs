use std::cmp::Ordering;

/// Sorts a slice in place with bubble sort.
///
/// Each pass bubbles the largest remaining element to the end of the
/// unsorted prefix. The sort stops as soon as a pass performs no swap, so a
/// sorted input of length `n` costs exactly `n - 1` comparisons.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::sort::bubble_sort;
///
/// let mut v = [64, 34, 25, 12, 22, 11, 90];
/// bubble_sort(&mut v);
/// assert_eq!(v, [11, 12, 22, 25, 34, 64, 90]);
/// ```
pub fn bubble_sort<T: Ord>(seq: &mut [T]) {
    bubble_sort_by(seq, T::cmp)
}

/// Sorts a slice in place with bubble sort, using a comparator.
pub fn bubble_sort_by<T, F: FnMut(&T, &T) -> Ordering>(seq: &mut [T], mut cmp: F) {
    let n = seq.len();
    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if cmp(&seq[j], &seq[j + 1]) == Ordering::Greater {
                seq.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Sorts a slice in place with selection sort.
///
/// At step `i` the minimum of `seq[i..]` is swapped into position `i`. The
/// swap can move an element past its equals, so the sort is not stable.
pub fn selection_sort<T: Ord>(seq: &mut [T]) {
    selection_sort_by(seq, T::cmp)
}

/// Sorts a slice in place with selection sort, using a comparator.
pub fn selection_sort_by<T, F: FnMut(&T, &T) -> Ordering>(seq: &mut [T], mut cmp: F) {
    let n = seq.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if cmp(&seq[j], &seq[min]) == Ordering::Less {
                min = j;
            }
        }
        seq.swap(i, min);
    }
}

/// Sorts a slice in place with insertion sort.
///
/// Each element is moved left past all strictly greater elements of the
/// sorted prefix, so the sort is stable and runs in linear time on sorted
/// input.
pub fn insertion_sort<T: Ord>(seq: &mut [T]) {
    insertion_sort_by(seq, T::cmp)
}

/// Sorts a slice in place with insertion sort, using a comparator.
pub fn insertion_sort_by<T, F: FnMut(&T, &T) -> Ordering>(seq: &mut [T], mut cmp: F) {
    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 && cmp(&seq[j - 1], &seq[j]) == Ordering::Greater {
            seq.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const UNSORTED: [i32; 7] = [64, 34, 25, 12, 22, 11, 90];
    const SORTED: [i32; 7] = [11, 12, 22, 25, 34, 64, 90];

    #[test]
    fn test_reference_input() {
        let mut v = UNSORTED;
        bubble_sort(&mut v);
        assert_eq!(v, SORTED);

        let mut v = UNSORTED;
        selection_sort(&mut v);
        assert_eq!(v, SORTED);

        let mut v = UNSORTED;
        insertion_sort(&mut v);
        assert_eq!(v, SORTED);
    }

    #[test]
    fn test_bubble_early_exit() {
        let mut v: Vec<u32> = (0..100).collect();
        let mut comparisons = 0;
        bubble_sort_by(&mut v, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });
        assert_eq!(comparisons, 99);

        // One misplaced element at the end needs one extra pass per position
        let mut v = vec![1, 2, 3, 4, 0];
        let mut passes_cost = 0;
        bubble_sort_by(&mut v, |a, b| {
            passes_cost += 1;
            a.cmp(b)
        });
        assert_eq!(v, [0, 1, 2, 3, 4]);
        assert_eq!(passes_cost, 4 + 3 + 2 + 1);
    }

    #[test]
    fn test_descending() {
        let mut v = UNSORTED;
        insertion_sort_by(&mut v, |a, b| b.cmp(a));
        let mut expected = SORTED;
        expected.reverse();
        assert_eq!(v, expected);
    }

    #[test]
    fn test_trivial_inputs() {
        let mut empty: [u8; 0] = [];
        bubble_sort(&mut empty);
        selection_sort(&mut empty);
        insertion_sort(&mut empty);

        let mut single = [7];
        bubble_sort(&mut single);
        selection_sort(&mut single);
        insertion_sort(&mut single);
        assert_eq!(single, [7]);
    }
}
