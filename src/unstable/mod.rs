pub mod rust_lomuto_quicksort;

// Reference implementation for tests and benchmarks.
pub mod rust_std;
