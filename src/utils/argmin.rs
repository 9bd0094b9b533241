/// Returns the index of the minimum value in a slice, or `None` if the slice
/// is empty.
///
/// In case of ties, the lowest index is returned.
///
/// # Examples
///
/// ```
/// use classic_algo::utils::math::argmin;
///
/// assert_eq!(argmin(&[4, 1, 3, 1]), Some(1));
/// assert_eq!(argmin::<u8>(&[]), None);
/// ```
pub fn argmin<T: PartialOrd>(slice: &[T]) -> Option<usize> {
    filtered_argmin(slice, |_| true)
}

/// Returns the index of the minimum value in a slice among the indices
/// accepted by a filter, or `None` if no index is accepted.
///
/// In case of ties, the lowest index is returned.
///
/// # Examples
///
/// ```
/// use classic_algo::utils::math::filtered_argmin;
///
/// let v = [4, 1, 3, 1, 2];
/// assert_eq!(filtered_argmin(&v, |i| i != 1), Some(3));
/// assert_eq!(filtered_argmin(&v, |i| i % 2 == 0), Some(4));
/// assert_eq!(filtered_argmin(&v, |_| false), None);
/// ```
pub fn filtered_argmin<T: PartialOrd, F: Fn(usize) -> bool>(
    slice: &[T],
    filter: F,
) -> Option<usize> {
    let mut argmin: Option<usize> = None;

    for (i, value) in slice.iter().enumerate() {
        if !filter(i) {
            continue;
        }
        if argmin.is_none_or(|min| *value < slice[min]) {
            argmin = Some(i);
        }
    }

    argmin
}
