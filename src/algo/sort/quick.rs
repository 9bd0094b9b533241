use std::cmp::Ordering;

/// The rule used by [`quick_sort_with`] to choose the pivot of a segment.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub enum PivotRule {
    /// The element at position `len / 2`.
    #[default]
    Middle,
    /// The median of the first, middle and last elements.
    MedianOfThree,
}

/// Sorts a slice with quick sort, returning a new vector.
///
/// Uses [`PivotRule::Middle`]. Each segment is split by a three-way
/// partition into the elements strictly smaller than, equal to, and
/// strictly greater than the pivot, each part keeping the relative order of
/// the input, so the sort is stable.
///
/// The expected running time is O(n log n), but it degrades to O(n²) when
/// the pivot is repeatedly an extreme element of its segment; such inputs
/// can be built for any fixed pivot rule. Pending segments live on an
/// explicit stack, so the degradation never overflows the call stack.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::sort::quick_sort;
///
/// assert_eq!(quick_sort(&[3, 6, 8, 10, 1, 2, 1]), vec![1, 1, 2, 3, 6, 8, 10]);
/// ```
pub fn quick_sort<T: Clone + Ord>(seq: &[T]) -> Vec<T> {
    quick_sort_by(seq, PivotRule::Middle, T::cmp)
}

/// Sorts a slice with quick sort using the given pivot rule.
pub fn quick_sort_with<T: Clone + Ord>(seq: &[T], rule: PivotRule) -> Vec<T> {
    quick_sort_by(seq, rule, T::cmp)
}

/// Sorts a slice with quick sort using the given pivot rule and comparator.
pub fn quick_sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(
    seq: &[T],
    rule: PivotRule,
    mut cmp: F,
) -> Vec<T> {
    // A segment is either still to be sorted or already in final order.
    // Segments are pushed in reverse, so that the leftmost is popped first.
    enum Task<T> {
        Sort(Vec<T>),
        Emit(Vec<T>),
    }

    let mut result = Vec::with_capacity(seq.len());
    let mut stack = vec![Task::Sort(seq.to_vec())];

    while let Some(task) = stack.pop() {
        match task {
            Task::Emit(segment) => result.extend(segment),
            Task::Sort(segment) if segment.len() <= 1 => result.extend(segment),
            Task::Sort(segment) => {
                let pivot = segment[pivot_index(&segment, rule, &mut cmp)].clone();
                let mut less = Vec::new();
                let mut equal = Vec::new();
                let mut greater = Vec::new();
                for elem in segment {
                    match cmp(&elem, &pivot) {
                        Ordering::Less => less.push(elem),
                        Ordering::Equal => equal.push(elem),
                        Ordering::Greater => greater.push(elem),
                    }
                }
                stack.push(Task::Sort(greater));
                stack.push(Task::Emit(equal));
                stack.push(Task::Sort(less));
            }
        }
    }

    result
}

fn pivot_index<T, F: FnMut(&T, &T) -> Ordering>(
    segment: &[T],
    rule: PivotRule,
    cmp: &mut F,
) -> usize {
    let mid = segment.len() / 2;
    match rule {
        PivotRule::Middle => mid,
        PivotRule::MedianOfThree => {
            let last = segment.len() - 1;
            let (a, b, c) = (&segment[0], &segment[mid], &segment[last]);
            let ab = cmp(a, b) != Ordering::Greater;
            let bc = cmp(b, c) != Ordering::Greater;
            let ac = cmp(a, c) != Ordering::Greater;
            if ab == bc {
                // a <= b <= c or c <= b <= a
                mid
            } else if ab == ac {
                // a and b are the extremes
                last
            } else {
                0
            }
        }
    }
}
