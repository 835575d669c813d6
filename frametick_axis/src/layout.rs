// Copyright 2026 the FrameTick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick layout: which frame labels land where.
//!
//! The tick grid is anchored to multiples of the interval, not to the range
//! start, so labels stay put as the range scrolls: the first candidate is the
//! largest interval multiple at or below `range.start`, which may precede the
//! range itself. Candidates whose label would clip at either surface edge are
//! dropped, never truncated.

use crate::range::AxisRange;

/// A positioned tick label candidate.
///
/// Ephemeral: recomputed on every render pass, never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    /// Frame number at this tick.
    pub value: i64,
    /// Horizontal center of the label, in surface coordinates.
    pub center: f64,
    /// Rendered width of the label.
    pub label_width: f64,
}

impl TickMark {
    /// Left edge of the label bounding box.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.center - 0.5 * self.label_width
    }

    /// Right edge of the label bounding box.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.center + 0.5 * self.label_width
    }
}

/// Lays out the ticks for one render pass.
///
/// `label_width_of` returns the rendered width of a frame number's label;
/// the axis passes a text-measurer closure here.
///
/// The returned iterator is lazy, finite, and restartable: call this again
/// with the same inputs and an identical sequence is produced. Degenerate
/// inputs (`interval <= 0`, empty range, non-positive surface width) yield
/// an empty sequence rather than panicking.
pub fn tick_marks<F>(
    interval: i64,
    range: AxisRange,
    surface_width: f64,
    label_width_of: F,
) -> TickMarks<F>
where
    F: Fn(i64) -> f64,
{
    let next_value = if interval > 0 && !range.is_empty() {
        // Largest multiple of `interval` at or below the range start
        // (div_euclid keeps the floor semantics for negative starts).
        interval * range.start.div_euclid(interval)
    } else {
        // Sentinel at the exclusive upper bound: the iterator is born done.
        range.end
    };
    TickMarks {
        interval,
        range,
        surface_width,
        label_width_of,
        next_value,
    }
}

/// Iterator over the visible [`TickMark`]s of a render pass.
///
/// Created by [`tick_marks`]. No state persists between passes.
pub struct TickMarks<F> {
    interval: i64,
    range: AxisRange,
    surface_width: f64,
    label_width_of: F,
    next_value: i64,
}

impl<F> core::fmt::Debug for TickMarks<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TickMarks")
            .field("interval", &self.interval)
            .field("range", &self.range)
            .field("surface_width", &self.surface_width)
            .field("next_value", &self.next_value)
            .finish_non_exhaustive()
    }
}

impl<F> Iterator for TickMarks<F>
where
    F: Fn(i64) -> f64,
{
    type Item = TickMark;

    fn next(&mut self) -> Option<TickMark> {
        // Ticks run up to, but not including, the range end.
        while self.next_value < self.range.end {
            let value = self.next_value;
            self.next_value += self.interval;

            let center =
                (value - self.range.start) as f64 / self.range.len() as f64 * self.surface_width;
            let mark = TickMark {
                value,
                center,
                label_width: (self.label_width_of)(value),
            };
            // Emit only labels that lie strictly inside the surface.
            if mark.left() > 0.0 && mark.right() < self.surface_width {
                return Some(mark);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    // 6 px per label regardless of the frame number.
    fn flat_width(_v: i64) -> f64 {
        6.0
    }

    fn values(interval: i64, range: AxisRange, width: f64) -> Vec<i64> {
        tick_marks(interval, range, width, flat_width)
            .map(|m| m.value)
            .collect()
    }

    #[test]
    fn documented_scenario_emits_interior_multiples_of_ten() {
        let got = values(10, AxisRange::new(0, 180), 800.0);
        // 0 clips at the left edge; 180 is the exclusive upper bound.
        let want: Vec<i64> = (1..18).map(|i| i * 10).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn grid_is_anchored_to_interval_multiples() {
        let got = values(10, AxisRange::new(55, 175), 600.0);
        assert!(got.iter().all(|v| v % 10 == 0), "off-grid tick in {got:?}");
        // The candidate walk starts at 50 (below the range start); 50 itself
        // maps left of the surface and is clipped.
        assert_eq!(got.first(), Some(&60));
    }

    #[test]
    fn negative_starts_floor_toward_negative_infinity() {
        let marks: Vec<TickMark> = tick_marks(10, AxisRange::new(-25, 95), 500.0, flat_width).collect();
        assert!(marks.iter().all(|m| m.value % 10 == 0));
        // -30 <= -25 is the anchor; everything emitted stays on that grid.
        assert_eq!(marks.first().map(|m| m.value), Some(-20));
    }

    #[test]
    fn all_emitted_labels_lie_strictly_inside_the_surface() {
        let width = 300.0;
        for mark in tick_marks(20, AxisRange::new(0, 500), width, |v| {
            6.0 * crate::range::decimal_width(v) as f64
        }) {
            assert!(mark.left() > 0.0, "label clips left: {mark:?}");
            assert!(mark.right() < width, "label clips right: {mark:?}");
        }
    }

    #[test]
    fn emitted_label_boxes_never_overlap() {
        let marks: Vec<TickMark> = tick_marks(10, AxisRange::new(0, 180), 800.0, |v| {
            6.0 * crate::range::decimal_width(v) as f64
        })
        .collect();
        assert!(marks.len() > 2, "scenario should emit several ticks");
        for pair in marks.windows(2) {
            assert!(
                pair[0].right() <= pair[1].left(),
                "labels overlap: {pair:?}"
            );
        }
    }

    #[test]
    fn layout_is_idempotent() {
        let range = AxisRange::new(30, 400);
        let a: Vec<TickMark> = tick_marks(50, range, 640.0, flat_width).collect();
        let b: Vec<TickMark> = tick_marks(50, range, 640.0, flat_width).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn widening_the_surface_never_drops_ticks() {
        let range = AxisRange::new(0, 180);
        let mut prev = 0;
        for width in [100.0, 200.0, 400.0, 800.0, 1600.0] {
            let count = tick_marks(10, range, width, flat_width).count();
            assert!(
                count >= prev,
                "tick count fell from {prev} to {count} at width {width}"
            );
            prev = count;
        }
    }

    #[test]
    fn degenerate_inputs_yield_an_empty_sequence() {
        assert_eq!(values(0, AxisRange::new(0, 100), 800.0), Vec::<i64>::new());
        assert_eq!(values(-5, AxisRange::new(0, 100), 800.0), Vec::<i64>::new());
        assert_eq!(values(10, AxisRange::new(100, 0), 800.0), Vec::<i64>::new());
        assert_eq!(values(10, AxisRange::new(0, 100), 0.0), Vec::<i64>::new());
    }

    #[test]
    fn single_frame_range_emits_nothing() {
        // start == end: the exclusive upper bound leaves no room for ticks.
        assert_eq!(values(1, AxisRange::new(50, 50), 800.0), Vec::<i64>::new());
    }
}
