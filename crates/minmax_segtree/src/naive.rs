use std::ops::RangeInclusive;

use crate::DynamicMinMax;
use crate::node::MinMax;
use crate::util::is_valid_index;
use crate::util::is_valid_range;

/// Plain array with linear-time range scans.
#[derive(Clone, Debug)]
pub struct NaiveMinMax {
    values: Vec<i64>,
}

impl NaiveMinMax {
    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

impl DynamicMinMax for NaiveMinMax {
    fn new(values: &[i64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn set(&mut self, index: usize, value: i64) -> bool {
        if !is_valid_index(self.values.len(), index) {
            return false;
        }
        self.values[index] = value;
        true
    }

    fn min_max(&self, range: RangeInclusive<usize>) -> Option<MinMax> {
        let (lo, hi) = (*range.start(), *range.end());
        if !is_valid_range(self.values.len(), lo, hi) {
            return None;
        }
        Some(self.values[lo..=hi].iter().copied().collect())
    }
}
