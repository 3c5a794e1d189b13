mod naive;
mod node;
mod segment_tree;
mod util;

use std::ops::RangeInclusive;

pub use naive::NaiveMinMax;
pub use node::MinMax;
pub use segment_tree::SegmentTree;

/// Point-update / range min-max interface.
///
/// - Indices are 0-based; query ranges are inclusive: `[lo, hi]`.
/// - An out-of-bounds index or an empty / out-of-bounds range is reported
///   as `false` / `None` and leaves the structure untouched.
pub trait DynamicMinMax: Sized {
    fn new(values: &[i64]) -> Self;
    fn len(&self) -> usize;
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set the value at `index`.
    ///
    /// Returns `false` if `index` is out of bounds.
    fn set(&mut self, index: usize, value: i64) -> bool;

    fn min_max(&self, range: RangeInclusive<usize>) -> Option<MinMax>;

    /// `max - min` over `range`.
    #[inline(always)]
    fn spread(&self, range: RangeInclusive<usize>) -> Option<u64> {
        self.min_max(range).map(MinMax::spread)
    }
}
