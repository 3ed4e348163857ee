/// Sorts `v` in ascending order.
///
/// The pivot is always the last element of the current sub-slice, which makes already sorted and
/// reverse sorted inputs `O(N^2)`. Only the shorter side of each partition is recursed into, the
/// longer side is handled by the loop, so the stack depth stays within `O(log(N))` even for those
/// inputs.
pub(crate) fn quicksort<T: Ord>(mut v: &mut [T]) {
    loop {
        if v.len() < 2 {
            return;
        }

        let pivot_pos = partition(v);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(pivot_pos);
        let right = &mut right[1..];

        // The two sides are disjoint, the order in which they are sorted does not affect the
        // result.
        if left.len() < right.len() {
            quicksort(left);
            v = right;
        } else {
            quicksort(right);
            v = left;
        }
    }
}

/// Lomuto partition around the last element of `v`.
///
/// When the call returns all elements that compare `<=` to the pivot are on the left side of the
/// returned index, followed by the pivot itself at that index, followed by the elements that
/// compare greater than the pivot.
///
/// Returns the final position of the pivot. Returns 0 for an empty slice.
pub(crate) fn partition<T: Ord>(v: &mut [T]) -> usize {
    let len = v.len();

    if len == 0 {
        return 0;
    }

    let (v_without_pivot, pivot) = v.split_at_mut(len - 1);
    let pivot = &pivot[0];

    let num_le = partition_lomuto(v_without_pivot, pivot);

    // Place the pivot between the two partitions.
    v.swap(num_le, len - 1);

    num_le
}

fn partition_lomuto<T: Ord>(v: &mut [T], pivot: &T) -> usize {
    let mut boundary = 0;

    for j in 0..v.len() {
        // Equal elements go left.
        if v[j] <= *pivot {
            v.swap(boundary, j);
            boundary += 1;
        }
    }

    boundary
}
