/// Generates a `SortImpl` type that exposes the module's `sort_ascending` and `sort_descending`
/// through the shared [`sort_test_tools::Sort`] interface.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort_ascending<T>(input: Option<&[T]>) -> Option<Vec<T>>
            where
                T: Ord + Clone,
            {
                sort_ascending(input)
            }

            #[inline]
            fn sort_descending<T>(input: Option<&[T]>) -> Option<Vec<T>>
            where
                T: Ord + Clone,
            {
                sort_descending(input)
            }
        }
    };
}

pub mod demo;
pub mod unstable;
