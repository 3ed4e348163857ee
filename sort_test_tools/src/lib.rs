pub trait Sort {
    fn name() -> String;

    fn sort_ascending<T>(input: Option<&[T]>) -> Option<Vec<T>>
    where
        T: Ord + Clone;

    fn sort_descending<T>(input: Option<&[T]>) -> Option<Vec<T>>
    where
        T: Ord + Clone;
}

pub mod patterns;

// Used by `instantiate_sort_tests!` to build typed test names.
#[doc(hidden)]
pub use paste;
