use crate::CounterSink;

/// Lower-bound search over the sorted range `data[low..high]`.
///
/// Returns the first index whose value is `>= key`, or `high` if there is
/// none, so a key equal to existing elements lands in front of them. Reports
/// one comparison per probe.
#[inline]
pub fn locate<C: CounterSink + ?Sized>(
    data: &[i32],
    key: i32,
    mut low: usize,
    mut high: usize,
    counters: &mut C,
) -> usize {
    debug_assert!(low <= high && high <= data.len());
    debug_assert!(is_sorted_non_decreasing(&data[low..high]));

    let mut probes = 0_u64;
    while low < high {
        let mid = low + ((high - low) >> 1);
        probes += 1;
        if data[mid] < key {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    counters.add_comparisons(probes);
    low
}

#[inline]
pub fn is_sorted_non_decreasing(data: &[i32]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}

#[inline]
pub fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}

#[inline]
pub fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        floor_log2(n - 1) + 1
    }
}

/// Upper bound on the comparisons a full sort of `len` elements may report:
/// each insertion probes at most `ceil(log2(len + 1))` times.
#[inline]
pub fn comparison_bound(len: usize) -> u64 {
    (len as u64) * ceil_log2(len + 1) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Counters;

    fn locate_counted(data: &[i32], key: i32, low: usize, high: usize) -> (usize, u64) {
        let mut counters = Counters::new();
        let pos = locate(data, key, low, high, &mut counters);
        (pos, counters.snapshot().comparisons)
    }

    #[test]
    fn empty_range_costs_nothing() {
        assert_eq!(locate_counted(&[], 5, 0, 0), (0, 0));
        assert_eq!(locate_counted(&[1, 2, 3], 0, 2, 2), (2, 0));
    }

    #[test]
    fn lower_bound_positions() {
        let data = [1, 3, 3, 3, 7, 9];
        assert_eq!(locate_counted(&data, 0, 0, 6).0, 0);
        assert_eq!(locate_counted(&data, 3, 0, 6).0, 1);
        assert_eq!(locate_counted(&data, 4, 0, 6).0, 4);
        assert_eq!(locate_counted(&data, 9, 0, 6).0, 5);
        assert_eq!(locate_counted(&data, 10, 0, 6).0, 6);
        // Only the subrange is searched.
        assert_eq!(locate_counted(&data, 0, 2, 5).0, 2);
        assert_eq!(locate_counted(&data, 8, 2, 5).0, 5);
    }

    #[test]
    fn equal_keys_probe_down_to_the_first_match() {
        // An upper-bound search would stop at index 4 after two probes.
        assert_eq!(locate_counted(&[2, 2, 2, 2], 2, 0, 4), (0, 3));
        assert_eq!(locate_counted(&[1, 2, 2, 2, 3], 2, 0, 5), (1, 3));
    }

    #[test]
    fn probes_within_ceil_log2() {
        let data: Vec<i32> = (0..100).map(|x| x * 2).collect();
        for len in 0..=data.len() {
            for key in [-1, 0, 51, 99, 100, 250] {
                let (_, probes) = locate_counted(&data, key, 0, len);
                assert!(probes as usize <= ceil_log2(len + 1), "len={len} key={key}");
            }
        }
    }

    #[test]
    fn log2_helpers() {
        assert_eq!(floor_log2(0), 0);
        assert_eq!(floor_log2(1), 0);
        assert_eq!(floor_log2(8), 3);
        assert_eq!(floor_log2(9), 3);
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(8), 3);
        assert_eq!(ceil_log2(9), 4);
        assert_eq!(comparison_bound(0), 0);
        assert_eq!(comparison_bound(10), 40);
    }
}
