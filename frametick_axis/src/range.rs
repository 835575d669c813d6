// Copyright 2026 the FrameTick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inclusive frame ranges.

/// The inclusive `[start, end]` frame interval an axis represents.
///
/// `end < start` is a valid but degenerate state: such a range has
/// `len() <= 0` and suppresses rendering downstream instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisRange {
    /// First frame (inclusive).
    pub start: i64,
    /// Last frame (inclusive).
    pub end: i64,
}

impl AxisRange {
    /// Creates a range over `[start, end]`.
    #[must_use]
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Number of frames in the range: `end - start + 1`.
    ///
    /// Non-positive when the range is inverted.
    #[must_use]
    pub const fn len(&self) -> i64 {
        self.end - self.start + 1
    }

    /// Whether the range contains no frames (inverted bounds).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() <= 0
    }

    /// Character count of the widest label either bound can produce.
    ///
    /// Drives widest-plausible-label sizing: every rendered frame number in
    /// the range is at most this many characters wide in decimal.
    #[must_use]
    pub fn label_len(&self) -> usize {
        decimal_width(self.start).max(decimal_width(self.end))
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::new(0, 180)
    }
}

/// Character count of `v` rendered in decimal, including a leading `-`.
#[must_use]
pub fn decimal_width(v: i64) -> usize {
    let mut n = v.unsigned_abs();
    let mut width = usize::from(v < 0) + 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn len_counts_inclusive_bounds() {
        assert_eq!(AxisRange::new(0, 180).len(), 181);
        assert_eq!(AxisRange::new(50, 50).len(), 1);
        assert_eq!(AxisRange::new(-10, 10).len(), 21);
    }

    #[test]
    fn inverted_range_is_empty_without_panicking() {
        let r = AxisRange::new(10, 0);
        assert!(r.len() <= 0);
        assert!(r.is_empty());
    }

    #[test]
    fn decimal_width_matches_formatted_length() {
        for v in [0, 7, 10, 99, 100, 180, 1234, -1, -10, -180, i64::MAX, i64::MIN] {
            assert_eq!(
                decimal_width(v),
                std::format!("{v}").len(),
                "width mismatch for {v}"
            );
        }
    }

    #[test]
    fn label_len_takes_the_wider_bound() {
        assert_eq!(AxisRange::new(0, 180).label_len(), 3);
        assert_eq!(AxisRange::new(-100, 5).label_len(), 4);
        assert_eq!(AxisRange::new(9, 9).label_len(), 1);
    }
}
