use crate::CounterSink;

use super::common;

/// Insertion sort that places each key with a lower-bound binary search.
///
/// Comparisons stay within `O(n log n)` for every input, while the number of
/// shifts is still quadratic in the worst case: zero for ascending input and
/// `n * (n - 1) / 2` for strictly descending input.
pub fn sort<C: CounterSink + ?Sized>(data: &mut [i32], counters: &mut C) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let key = data[i];
        counters.add_array_accesses(1);

        let pos = common::locate(data, key, 0, i, counters);

        // Right to left so nothing is overwritten before it is moved.
        let mut j = i;
        while j > pos {
            data[j] = data[j - 1];
            counters.add_shift();
            j -= 1;
        }

        data[pos] = key;
        counters.add_array_accesses(1);
    }
}
