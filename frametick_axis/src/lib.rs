// Copyright 2026 the FrameTick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A timeline frame-number axis.
//!
//! The axis labels an inclusive frame range across a horizontal surface with
//! evenly spaced, human-friendly tick numbers. The crate is split along the
//! render pipeline:
//! - **Interval selection** ([`select_interval`]) picks a 1/2/5 × 10^n step
//!   that guarantees the labels fit the surface without overlapping.
//! - **Layout** ([`tick_marks`]) walks the interval grid and keeps the ticks
//!   whose labels lie fully inside the surface.
//! - **The widget** ([`FrameAxis`]) holds the mutable attributes (range,
//!   font, paint, spacing scale, surface size), keeps the chosen interval in
//!   sync with them, and emits [`RenderCommand`]s for the host to replay.
//!
//! Text shaping stays downstream: everything is measured through the
//! `frametick_text::TextMeasurer` the widget is constructed with. All edge
//! cases (inverted ranges, zero-sized surfaces, zero-width labels) degrade
//! to "draw nothing"; nothing in this crate panics on user input.

#![no_std]

extern crate alloc;

mod axis;
mod interval;
mod layout;
mod range;
mod render;

pub use axis::FrameAxis;
pub use interval::select_interval;
pub use layout::{TickMark, TickMarks, tick_marks};
pub use range::{AxisRange, decimal_width};
pub use render::RenderCommand;
