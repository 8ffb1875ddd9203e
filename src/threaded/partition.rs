//! Static row partitioning for the thread-pool strategy.

use std::num::NonZeroUsize;
use std::thread;

/// Contiguous row range `[start, start + count)` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub count: usize,
}

impl RowRange {
    pub fn end(&self) -> usize {
        self.start + self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Split `rows` into exactly `parts` contiguous ranges.
///
/// Each range gets `rows / parts` rows and the first `rows % parts` get one
/// extra, in increasing row order. The ranges tile `[0, rows)` with no gaps
/// or overlaps. When `rows < parts` the trailing ranges are empty.
///
/// ```
/// use matbench::threaded::partition::partition_rows;
/// use std::num::NonZeroUsize;
///
/// let ranges = partition_rows(10, NonZeroUsize::new(4).unwrap());
/// let counts: Vec<_> = ranges.iter().map(|r| r.count).collect();
/// assert_eq!(counts, vec![3, 3, 2, 2]);
/// ```
pub fn partition_rows(rows: usize, parts: NonZeroUsize) -> Vec<RowRange> {
    let parts = parts.get();
    let chunk = rows / parts;
    let remainder = rows % parts;

    let mut start = 0;
    (0..parts)
        .map(|t| {
            let count = chunk + usize::from(t < remainder);
            let range = RowRange { start, count };
            start += count;
            range
        })
        .collect()
}

/// Degree of parallelism reported by the platform, or 1 if it can't say.
pub fn available_parallelism() -> NonZeroUsize {
    thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}
