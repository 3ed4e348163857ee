sort_impl!("rust_lomuto_quicksort_unstable");

pub fn sort_ascending<T: Ord + Clone>(input: Option<&[T]>) -> Option<Vec<T>> {
    lomuto_quicksort::sort_ascending(input)
}

pub fn sort_descending<T: Ord + Clone>(input: Option<&[T]>) -> Option<Vec<T>> {
    lomuto_quicksort::sort_descending(input)
}
