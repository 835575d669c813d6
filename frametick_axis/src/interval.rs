// Copyright 2026 the FrameTick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Nice" tick-interval selection.
//!
//! Given how many frames an axis spans and how many labels fit across it,
//! pick the spacing between labeled ticks. The interval is always `1`, `2`,
//! or `5` times a power of ten, and it is snapped *upward* from the raw
//! requirement: the chosen interval is never smaller than
//! `range_len / capacity`, so no more labels are attempted than fit.

/// Chooses the major tick interval.
///
/// `range_len` is the number of frames on the axis, `available_width` the
/// surface width in pixels, and `label_width` the pixel width reserved per
/// label (measured widest label times the spacing scale).
///
/// Returns `None` when no interval can satisfy the capacity constraint:
/// - the range is empty or inverted (`range_len <= 0`),
/// - the surface has no width,
/// - the reserved label width is zero or negative (an unbounded number of
///   zero-width labels would "fit"; treated as no fit instead), or
/// - fewer than one label fits (`available_width / label_width < 1`).
///
/// Pure and deterministic; identical inputs always yield identical output.
#[must_use]
pub fn select_interval(range_len: i64, available_width: f64, label_width: f64) -> Option<i64> {
    if range_len <= 0 || available_width <= 0.0 || label_width <= 0.0 {
        return None;
    }
    let capacity = available_width / label_width;
    if capacity < 1.0 {
        return None;
    }

    let mut step = range_len as f64 / capacity;
    // More room than frames: label every frame. The decomposition below only
    // normalizes downward (dividing while >= 10), so sub-unit steps are
    // resolved here to the smallest positive integer interval rather than
    // being snapped up to 2.
    if step < 1.0 {
        return Some(1);
    }

    // Decompose step = d * 10^power with 1 <= d < 10, then snap d up to the
    // nearest of {2, 5, 10}.
    let mut power = 0_u32;
    while step >= 10.0 {
        step /= 10.0;
        power += 1;
    }
    let interval = if step <= 2.0 {
        2 * 10_i64.pow(power)
    } else if step <= 5.0 {
        5 * 10_i64.pow(power)
    } else {
        10_i64.pow(power + 1)
    };
    Some(interval)
}
