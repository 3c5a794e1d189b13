use std::ops::RangeInclusive;

use crate::DynamicMinMax;
use crate::node::MinMax;
use crate::util::is_valid_index;
use crate::util::is_valid_range;

const ROOT: usize = 1;

/// Recursive segment tree over `[0, len)` with a heap layout: the root is
/// node 1 and node `k` has children `2k` and `2k + 1`.
///
/// All indices and ranges are 0-based; ranges are inclusive on both ends.
#[derive(Clone, Debug)]
pub struct SegmentTree {
    len: usize,
    tree: Vec<MinMax>,
}

impl SegmentTree {
    pub fn new(values: &[i64]) -> Self {
        let mut seg = Self {
            len: 0,
            tree: Vec::new(),
        };
        seg.build(values);
        seg
    }

    /// Discards the current contents and rebuilds over `values`.
    ///
    /// The node buffer is reused when it is already large enough.
    pub fn build(&mut self, values: &[i64]) {
        let n = values.len();
        self.len = n;
        self.tree.clear();
        if n == 0 {
            return;
        }
        self.tree.resize(4 * n, MinMax::default());
        self.build_rec(values, ROOT, 0, n - 1);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Aggregate of the whole array, or `None` if it is empty.
    pub fn all(&self) -> Option<MinMax> {
        (!self.is_empty()).then(|| self.tree[ROOT])
    }

    /// Current value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get(&self, index: usize) -> i64 {
        self.query_min_max(index..=index).max
    }

    /// Sets the value at `index` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn update(&mut self, index: usize, value: i64) {
        assert!(
            is_valid_index(self.len, index),
            "index {index} out of bounds for length {}",
            self.len
        );
        self.update_rec(ROOT, 0, self.len - 1, index, value);
    }

    /// `max - min` over `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty or reaches past the end.
    pub fn query(&self, range: RangeInclusive<usize>) -> u64 {
        self.query_min_max(range).spread()
    }

    /// # Panics
    ///
    /// Panics if `range` is empty or reaches past the end.
    pub fn query_min_max(&self, range: RangeInclusive<usize>) -> MinMax {
        let (lo, hi) = (*range.start(), *range.end());
        assert!(
            is_valid_range(self.len, lo, hi),
            "invalid range {lo}..={hi} for length {}",
            self.len
        );
        self.query_rec(ROOT, 0, self.len - 1, lo, hi)
    }

    fn build_rec(&mut self, values: &[i64], node: usize, s: usize, e: usize) -> MinMax {
        debug_assert!(s <= e && e < values.len());
        if s == e {
            self.tree[node] = MinMax::leaf(values[s]);
            return self.tree[node];
        }

        let mid = (s + e) / 2;
        let l = self.build_rec(values, 2 * node, s, mid);
        let r = self.build_rec(values, 2 * node + 1, mid + 1, e);
        self.tree[node] = l.combine(r);
        self.tree[node]
    }

    fn update_rec(
        &mut self,
        node: usize,
        ts: usize,
        te: usize,
        index: usize,
        value: i64,
    ) -> MinMax {
        if index < ts || te < index {
            return self.tree[node];
        }
        if ts == te {
            self.tree[node] = MinMax::leaf(value);
            return self.tree[node];
        }

        let mid = (ts + te) / 2;
        let l = self.update_rec(2 * node, ts, mid, index, value);
        let r = self.update_rec(2 * node + 1, mid + 1, te, index, value);
        self.tree[node] = l.combine(r);
        self.tree[node]
    }

    fn query_rec(&self, node: usize, ts: usize, te: usize, qs: usize, qe: usize) -> MinMax {
        if qs <= ts && te <= qe {
            return self.tree[node];
        }
        if te < qs || qe < ts {
            return MinMax::IDENTITY;
        }

        let mid = (ts + te) / 2;
        let l = self.query_rec(2 * node, ts, mid, qs, qe);
        let r = self.query_rec(2 * node + 1, mid + 1, te, qs, qe);
        l.combine(r)
    }
}

impl DynamicMinMax for SegmentTree {
    fn new(values: &[i64]) -> Self {
        SegmentTree::new(values)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn set(&mut self, index: usize, value: i64) -> bool {
        if !is_valid_index(self.len, index) {
            return false;
        }
        self.update_rec(ROOT, 0, self.len - 1, index, value);
        true
    }

    fn min_max(&self, range: RangeInclusive<usize>) -> Option<MinMax> {
        let (lo, hi) = (*range.start(), *range.end());
        if !is_valid_range(self.len, lo, hi) {
            return None;
        }
        Some(self.query_rec(ROOT, 0, self.len - 1, lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::SegmentTree;
    use crate::node::MinMax;

    #[test]
    fn build_writes_every_reachable_node() {
        for n in 1..=33 {
            let values: Vec<i64> = (0..n as i64).map(|i| i * 7 % 11 - 5).collect();
            let seg = SegmentTree::new(&values);

            let mut stack = vec![(1_usize, 0_usize, n - 1)];
            while let Some((node, s, e)) = stack.pop() {
                let expected: MinMax = values[s..=e].iter().copied().collect();
                assert_eq!(seg.tree[node], expected, "n={n} node={node} [{s}, {e}]");
                if s < e {
                    let mid = (s + e) / 2;
                    stack.push((2 * node, s, mid));
                    stack.push((2 * node + 1, mid + 1, e));
                }
            }
        }
    }

    #[test]
    fn repeated_update_is_idempotent() {
        let values = [8, -2, 6, 0, 3, 3, -9];
        let mut once = SegmentTree::new(&values);
        let mut twice = once.clone();

        once.update(4, 17);
        twice.update(4, 17);
        twice.update(4, 17);
        assert_eq!(once.tree, twice.tree);
    }

    #[test]
    fn update_touches_only_one_path() {
        let values = [5, 1, 4, 1, 3, 9, 2, 6];
        let mut seg = SegmentTree::new(&values);
        let before = seg.tree.clone();
        seg.update(5, -100);

        // [0, 7] -> [4, 7] -> [4, 5] -> [5, 5]
        let path = [1, 3, 6, 13];
        let changed: Vec<usize> = before
            .iter()
            .zip(&seg.tree)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(node, _)| node)
            .collect();
        assert_eq!(changed, path);
        assert_eq!(seg.tree[13], MinMax::leaf(-100));
        assert_eq!(seg.get(5), -100);
    }

    #[test]
    fn rebuild_discards_previous_case() {
        let mut seg = SegmentTree::new(&[1, 2, 3, 4, 5, 6]);
        seg.update(0, 1_000);
        seg.build(&[-4, -8]);

        assert_eq!(seg.len(), 2);
        assert_eq!(seg.all(), Some(MinMax { max: -4, min: -8 }));
        assert_eq!(seg.query(0..=1), 4);

        seg.build(&[]);
        assert!(seg.is_empty());
        assert_eq!(seg.all(), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn update_past_end_panics() {
        let mut seg = SegmentTree::new(&[1, 2, 3]);
        seg.update(3, 0);
    }

    #[test]
    #[should_panic(expected = "invalid range")]
    #[allow(clippy::reversed_empty_ranges)]
    fn reversed_range_panics() {
        let seg = SegmentTree::new(&[1, 2, 3]);
        seg.query(2..=1);
    }

    #[test]
    #[should_panic(expected = "invalid range")]
    fn query_on_empty_panics() {
        let seg = SegmentTree::new(&[]);
        seg.query(0..=0);
    }
}
