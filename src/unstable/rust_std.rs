sort_impl!("rust_std_unstable");

#[inline]
pub fn sort_ascending<T: Ord + Clone>(input: Option<&[T]>) -> Option<Vec<T>> {
    let mut v = input?.to_vec();
    v.sort_unstable();
    Some(v)
}

#[inline]
pub fn sort_descending<T: Ord + Clone>(input: Option<&[T]>) -> Option<Vec<T>> {
    let mut v = sort_ascending(input)?;
    v.reverse();
    Some(v)
}
