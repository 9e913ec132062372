//! Binary insertion sort with cost instrumentation.
//!
//! The sort reports every comparison, shift and array access to a
//! [`CounterSink`] supplied by the caller, so benchmark runs can check the
//! measured counts against the expected `O(n log n)` comparisons and
//! `O(n^2)` shifts.

mod algorithms;
mod counters;

pub use algorithms::common::{comparison_bound, is_sorted_non_decreasing, locate};
pub use counters::{CounterSink, CounterSnapshot, Counters, NoopCounters};

/// Sorts `data` in place if present. `None` is a no-op and reports nothing.
pub fn sort<C: CounterSink + ?Sized>(data: Option<&mut [i32]>, counters: &mut C) {
    if let Some(data) = data {
        binary_insertion_sort(data, counters);
    }
}

pub fn binary_insertion_sort<C: CounterSink + ?Sized>(data: &mut [i32], counters: &mut C) {
    algorithms::binary_insertion_sort::sort(data, counters);
}
