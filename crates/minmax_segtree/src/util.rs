#[inline(always)]
pub(crate) fn is_valid_index(len: usize, index: usize) -> bool {
    index < len
}

/// Inclusive range `[lo, hi]` is non-empty and inside `[0, len)`.
#[inline(always)]
pub(crate) fn is_valid_range(len: usize, lo: usize, hi: usize) -> bool {
    lo <= hi && hi < len
}
