/// Aggregate stored in every tree node: the maximum and minimum of the
/// values in the node's range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinMax {
    pub max: i64,
    pub min: i64,
}

impl MinMax {
    /// Neutral element of [`MinMax::combine`]. Returned for ranges that
    /// contain no values.
    pub const IDENTITY: Self = Self {
        max: i64::MIN,
        min: i64::MAX,
    };

    #[inline(always)]
    pub const fn leaf(value: i64) -> Self {
        Self {
            max: value,
            min: value,
        }
    }

    #[inline(always)]
    pub fn combine(self, other: Self) -> Self {
        Self {
            max: self.max.max(other.max),
            min: self.min.min(other.min),
        }
    }

    /// `max - min`, or 0 for the identity.
    #[inline(always)]
    pub fn spread(self) -> u64 {
        if self.is_identity() {
            return 0;
        }
        self.max.abs_diff(self.min)
    }

    #[inline(always)]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

impl Default for MinMax {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl FromIterator<i64> for MinMax {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::IDENTITY, |acc, v| acc.combine(Self::leaf(v)))
    }
}
