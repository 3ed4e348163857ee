//! Quicksort with Lomuto partitioning and a fixed last element pivot.
//!
//! Both entry points leave their input untouched and return a freshly allocated sorted copy. An
//! absent input (`None`) yields an absent output.

mod quicksort;

/// Returns a copy of `input` sorted in ascending (non-decreasing) order, or `None` if `input` is
/// `None`.
///
/// This sort is unstable (i.e., may reorder equal elements) and *O*(*n*^2) worst-case, which is
/// hit by already sorted and reverse sorted inputs. The average case is *O*(*n* \* log(*n*)).
///
/// # Current implementation
///
/// Recursive quicksort that always picks the last element of a sub-slice as pivot and partitions
/// with the Lomuto scheme, moving elements equal to the pivot to the left side.
///
/// # Examples
///
/// ```
/// let v = [64, 34, 25, 12, 22, 11, 90];
/// assert_eq!(
///     lomuto_quicksort::sort_ascending(Some(&v[..])),
///     Some(vec![11, 12, 22, 25, 34, 64, 90])
/// );
/// assert_eq!(lomuto_quicksort::sort_ascending::<i32>(None), None);
/// ```
pub fn sort_ascending<T>(input: Option<&[T]>) -> Option<Vec<T>>
where
    T: Ord + Clone,
{
    let mut v = input?.to_vec();
    quicksort::quicksort(&mut v);
    Some(v)
}

/// Returns a copy of `input` sorted in descending (non-increasing) order, or `None` if `input` is
/// `None`.
///
/// Sorts ascending and then reverses the result in place, see [`sort_ascending`].
pub fn sort_descending<T>(input: Option<&[T]>) -> Option<Vec<T>>
where
    T: Ord + Clone,
{
    let mut v = sort_ascending(input);
    reverse(v.as_deref_mut());
    v
}

/// Reverses `v` in place by swapping from both ends toward the center.
///
/// Does nothing for `None`, empty and single element slices.
pub fn reverse<T>(v: Option<&mut [T]>) {
    let Some(v) = v else {
        return;
    };

    if v.len() < 2 {
        return;
    }

    let mut left = 0;
    let mut right = v.len() - 1;

    while left < right {
        v.swap(left, right);
        left += 1;
        right -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_none() {
        reverse::<i32>(None);
    }

    #[test]
    fn reverse_even_odd() {
        let mut v = [1, 2, 3, 4];
        reverse(Some(&mut v[..]));
        assert_eq!(v, [4, 3, 2, 1]);

        let mut v = [1, 2, 3, 4, 5];
        reverse(Some(&mut v[..]));
        assert_eq!(v, [5, 4, 3, 2, 1]);

        let mut v = [9];
        reverse(Some(&mut v[..]));
        assert_eq!(v, [9]);

        let mut v: [i32; 0] = [];
        reverse(Some(&mut v[..]));
    }

    #[test]
    fn absent() {
        assert_eq!(sort_ascending::<i32>(None), None);
        assert_eq!(sort_descending::<i32>(None), None);
    }

    #[test]
    fn sample_cases() {
        assert_eq!(
            sort_ascending(Some(&[10, 20, 30, 41][..])),
            Some(vec![10, 20, 30, 41])
        );
        assert_eq!(
            sort_descending(Some(&[10, 20, 30, 41][..])),
            Some(vec![41, 30, 20, 10])
        );

        let v = [64, 34, 25, 12, 22, 11, 90];
        assert_eq!(
            sort_ascending(Some(&v[..])),
            Some(vec![11, 12, 22, 25, 34, 64, 90])
        );
        assert_eq!(
            sort_descending(Some(&v[..])),
            Some(vec![90, 64, 34, 25, 22, 12, 11])
        );

        assert_eq!(
            sort_ascending(Some(&[5, 4, 3, 2, 1][..])),
            Some(vec![1, 2, 3, 4, 5])
        );
        assert_eq!(
            sort_ascending(Some(&[3, 1, 4, 1, 5, 9, 2, 6, 5][..])),
            Some(vec![1, 1, 2, 3, 4, 5, 5, 6, 9])
        );

        assert_eq!(sort_ascending(Some(&[42][..])), Some(vec![42]));
        assert_eq!(sort_descending(Some(&[42][..])), Some(vec![42]));

        let empty: [i32; 0] = [];
        assert_eq!(sort_ascending(Some(&empty[..])), Some(vec![]));
        assert_eq!(sort_descending(Some(&empty[..])), Some(vec![]));
    }

    #[test]
    fn input_untouched() {
        let v = vec![3, 1, 2];
        let asc = sort_ascending(Some(v.as_slice()));
        let desc = sort_descending(Some(v.as_slice()));

        assert_eq!(v, [3, 1, 2]);
        assert_eq!(asc, Some(vec![1, 2, 3]));
        assert_eq!(desc, Some(vec![3, 2, 1]));
    }
}
