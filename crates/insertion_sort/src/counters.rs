/// Receives cost increments from the instrumented algorithms.
///
/// Every method is a pure increment, so the totals observed after a run do not
/// depend on the order in which the locator and the sort driver report.
pub trait CounterSink {
    fn add_comparisons(&mut self, count: u64);

    /// One element moved one slot to the right: a read plus a write.
    fn add_shift(&mut self);

    fn add_array_accesses(&mut self, count: u64);
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct CounterSnapshot {
    pub comparisons: u64,
    pub shifts: u64,
    pub array_accesses: u64,
}

/// Caller-owned accumulator for a single sort run.
///
/// Call [`Counters::reset`] between independent runs (or create a fresh
/// instance) and read the totals with [`Counters::snapshot`] once the sort
/// has returned.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    comparisons: u64,
    shifts: u64,
    array_accesses: u64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            comparisons: self.comparisons,
            shifts: self.shifts,
            array_accesses: self.array_accesses,
        }
    }
}

impl CounterSink for Counters {
    #[inline]
    fn add_comparisons(&mut self, count: u64) {
        self.comparisons += count;
    }

    #[inline]
    fn add_shift(&mut self) {
        self.shifts += 1;
        self.array_accesses += 2;
    }

    #[inline]
    fn add_array_accesses(&mut self, count: u64) {
        self.array_accesses += count;
    }
}

/// Discards every increment; used to time the algorithm without bookkeeping.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopCounters;

impl CounterSink for NoopCounters {
    #[inline(always)]
    fn add_comparisons(&mut self, _count: u64) {}

    #[inline(always)]
    fn add_shift(&mut self) {}

    #[inline(always)]
    fn add_array_accesses(&mut self, _count: u64) {}
}
