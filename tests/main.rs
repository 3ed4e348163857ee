use sort_test_tools::instantiate_sort_tests;

type TestSort = quicksort_rs::unstable::rust_lomuto_quicksort::SortImpl;
// type TestSort = quicksort_rs::unstable::rust_std::SortImpl;

instantiate_sort_tests!(TestSort);
