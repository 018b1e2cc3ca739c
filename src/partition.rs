use std::num::NonZeroUsize;
use std::thread;

/// Half-open range of image rows `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowRange {
    pub start: u32,
    pub end: u32,
}

impl RowRange {
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Count of rows in the range.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Splits rows `[0, height)` into `parts` contiguous ranges.
///
/// Sizes of ranges differ by at most one row: the remainder of
/// `height / parts` is distributed over the first ranges.
/// If `parts > height`, the trailing ranges are empty.
/// Zero `parts` is treated as one.
pub fn split_rows(height: u32, parts: usize) -> Vec<RowRange> {
    let parts = parts.max(1);
    let rows_per_part = height as usize / parts;
    let extra = height as usize % parts;
    let mut ranges = Vec::with_capacity(parts);
    let mut current_row = 0;
    for i in 0..parts {
        let size = rows_per_part + usize::from(i < extra);
        let end = current_row + size as u32;
        ranges.push(RowRange::new(current_row, end));
        current_row = end;
    }
    ranges
}

/// Policy that defines how many row ranges an image is split on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerCount {
    /// Fixed count of workers.
    Fixed(NonZeroUsize),
    /// One worker for each unit returned by
    /// [std::thread::available_parallelism] (one if it is unknown).
    Available,
}

impl WorkerCount {
    /// Default count of workers used by [WorkerCount::default].
    pub const DEFAULT_FIXED: NonZeroUsize = match NonZeroUsize::new(4) {
        Some(v) => v,
        None => unreachable!(),
    };

    /// Creates fixed policy. Zero is treated as one worker.
    pub fn fixed(count: usize) -> Self {
        Self::Fixed(NonZeroUsize::new(count).unwrap_or(NonZeroUsize::MIN))
    }

    /// Returns count of workers for the policy.
    pub fn count(&self) -> usize {
        match self {
            Self::Fixed(count) => count.get(),
            Self::Available => thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}

impl Default for WorkerCount {
    fn default() -> Self {
        Self::Fixed(Self::DEFAULT_FIXED)
    }
}
