use crate::{Error, Result};

/// Selects a maximum set of pairwise compatible activities.
///
/// Activity `i` occupies the interval `[starts[i], finishes[i])`; two
/// activities are compatible if one starts no earlier than the other
/// finishes. Activities must be sorted by finish time: the greedy choice
/// picks the first activity and then every activity starting no earlier
/// than the finish of the last one picked. Indices are returned in
/// increasing order.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if `starts` and `finishes` have different
/// lengths; [`Error::UnsortedActivities`] if `finishes` is not sorted (see
/// [`activity_selection_unsorted`] for arbitrary input).
///
/// # Examples
///
/// ```
/// use classic_algo::algo::greedy::activity_selection;
///
/// let starts = [1, 3, 0, 5, 8, 5];
/// let finishes = [2, 4, 6, 7, 9, 9];
/// assert_eq!(activity_selection(&starts, &finishes), Ok(vec![0, 1, 3, 4]));
/// ```
pub fn activity_selection<T: Ord>(starts: &[T], finishes: &[T]) -> Result<Vec<usize>> {
    check_lengths(starts, finishes)?;
    if let Some(pos) = finishes.windows(2).position(|w| w[0] > w[1]) {
        return Err(Error::UnsortedActivities { index: pos + 1 });
    }
    Ok(select((0..starts.len()).collect(), starts, finishes))
}

/// Selects a maximum set of pairwise compatible activities in any order.
///
/// Activities are first sorted by finish time (stably, so ties keep their
/// input order) and then selected as in [`activity_selection`]. The
/// returned indices refer to the input and are listed in order of finish
/// time.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if `starts` and `finishes` have different
/// lengths.
pub fn activity_selection_unsorted<T: Ord>(starts: &[T], finishes: &[T]) -> Result<Vec<usize>> {
    check_lengths(starts, finishes)?;
    let mut order: Vec<usize> = (0..starts.len()).collect();
    order.sort_by(|&a, &b| finishes[a].cmp(&finishes[b]));
    Ok(select(order, starts, finishes))
}

fn check_lengths<T>(starts: &[T], finishes: &[T]) -> Result<()> {
    if starts.len() != finishes.len() {
        return Err(Error::LengthMismatch {
            left: starts.len(),
            right: finishes.len(),
        });
    }
    Ok(())
}

/// Greedy selection over activities listed by non-decreasing finish time.
fn select<T: Ord>(order: Vec<usize>, starts: &[T], finishes: &[T]) -> Vec<usize> {
    let mut selected: Vec<usize> = Vec::with_capacity(order.len());
    for i in order {
        match selected.last() {
            Some(&last) if starts[i] < finishes[last] => {}
            _ => selected.push(i),
        }
    }
    selected
}
