pub(crate) mod binary_insertion_sort;
pub(crate) mod common;
