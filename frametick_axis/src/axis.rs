// Copyright 2026 the FrameTick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame-number axis widget.
//!
//! [`FrameAxis`] is a thin stateful adapter over the pure pieces: it owns the
//! current range, font, paint, spacing scale, and surface size, re-runs
//! interval selection whenever a layout-relevant attribute changes, and turns
//! the resulting tick layout into [`RenderCommand`]s on demand. The host's
//! own change detection decides *when* to redraw; this type only guarantees
//! the stored `major_tick` is in sync with the attributes at all times.

extern crate alloc;

use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec::Vec;

use frametick_text::{FontSpec, TextMeasurer};
use kurbo::{Point, Size};
use peniko::Brush;
use peniko::color::palette::css;

use crate::interval::select_interval;
use crate::layout::tick_marks;
use crate::range::AxisRange;
use crate::render::RenderCommand;

/// A horizontal timeline axis labeling frame numbers at a "nice" interval.
///
/// Defaults match a fresh timeline: frames `0..=180`, a 12 px sans-serif
/// font, white labels, unit spacing scale, and a zero-sized surface (which
/// reports no fitting interval until the host supplies real dimensions).
pub struct FrameAxis {
    range: AxisRange,
    font: FontSpec,
    text_fill: Brush,
    tick_spacing_scale: f64,
    surface: Size,
    measurer: Arc<dyn TextMeasurer>,
    major_tick: Option<i64>,
    preferred_height: f64,
}

impl core::fmt::Debug for FrameAxis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameAxis")
            .field("range", &self.range)
            .field("font", &self.font)
            .field("text_fill", &self.text_fill)
            .field("tick_spacing_scale", &self.tick_spacing_scale)
            .field("surface", &self.surface)
            .field("measurer", &"dyn TextMeasurer")
            .field("major_tick", &self.major_tick)
            .field("preferred_height", &self.preferred_height)
            .finish()
    }
}

impl FrameAxis {
    /// Creates an axis with default attributes, measuring text through
    /// `measurer` for the lifetime of the widget.
    #[must_use]
    pub fn new(measurer: Arc<dyn TextMeasurer>) -> Self {
        let mut axis = Self {
            range: AxisRange::default(),
            font: FontSpec::default(),
            text_fill: css::WHITE.into(),
            tick_spacing_scale: 1.0,
            surface: Size::ZERO,
            measurer,
            major_tick: None,
            preferred_height: 0.0,
        };
        axis.remeasure_height();
        axis.refit();
        axis
    }

    /// First frame of the axis (inclusive).
    #[must_use]
    pub fn start_frame(&self) -> i64 {
        self.range.start
    }

    /// Last frame of the axis (inclusive).
    #[must_use]
    pub fn end_frame(&self) -> i64 {
        self.range.end
    }

    /// The current frame range.
    #[must_use]
    pub fn range(&self) -> AxisRange {
        self.range
    }

    /// The label font.
    #[must_use]
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// The label fill paint.
    #[must_use]
    pub fn text_fill(&self) -> &Brush {
        &self.text_fill
    }

    /// Multiplier on the reserved horizontal gap per label.
    #[must_use]
    pub fn tick_spacing_scale(&self) -> f64 {
        self.tick_spacing_scale
    }

    /// The drawing-surface size the host last supplied.
    #[must_use]
    pub fn surface(&self) -> Size {
        self.surface
    }

    /// The interval between labeled ticks chosen by the last layout pass,
    /// or `None` when no interval fits the surface.
    ///
    /// Read-mostly: only the layout step writes it.
    #[must_use]
    pub fn major_tick(&self) -> Option<i64> {
        self.major_tick
    }

    /// Preferred widget height: the rendered height of a single digit glyph
    /// in the current font.
    #[must_use]
    pub fn preferred_height(&self) -> f64 {
        self.preferred_height
    }

    /// Sets the first frame and re-runs interval selection.
    pub fn set_start_frame(&mut self, start_frame: i64) {
        self.range.start = start_frame;
        self.refit();
    }

    /// Sets the last frame and re-runs interval selection.
    pub fn set_end_frame(&mut self, end_frame: i64) {
        self.range.end = end_frame;
        self.refit();
    }

    /// Sets the label font; label metrics and the preferred height change
    /// with it, so interval selection re-runs.
    pub fn set_font(&mut self, font: FontSpec) {
        self.font = font;
        self.remeasure_height();
        self.refit();
    }

    /// Sets the label fill paint.
    ///
    /// Color affects only drawing, so the stored interval and preferred
    /// height are left untouched.
    pub fn set_text_fill(&mut self, fill: impl Into<Brush>) {
        self.text_fill = fill.into();
    }

    /// Sets the spacing scale (clamped to be non-negative) and re-runs
    /// interval selection.
    ///
    /// A scale of zero collapses the reserved label width to zero, which
    /// reads as "no fit" rather than unbounded capacity.
    pub fn set_tick_spacing_scale(&mut self, scale: f64) {
        self.tick_spacing_scale = scale.max(0.0);
        self.refit();
    }

    /// Sets the drawing-surface size and re-runs interval selection.
    pub fn set_surface(&mut self, surface: Size) {
        self.surface = surface;
        self.refit();
    }

    /// Produces the draw calls for one render pass.
    ///
    /// The first command always clears the surface. Labels follow only when
    /// an interval fits; each is positioned at its computed left edge and
    /// baselined at its measured line height.
    #[must_use]
    pub fn render_commands(&self) -> Vec<RenderCommand> {
        let mut out = Vec::new();
        out.push(RenderCommand::Clear { size: self.surface });
        let Some(interval) = self.major_tick else {
            return out;
        };

        let label_width_of =
            |v: i64| self.measurer.measure(&v.to_string(), &self.font).advance_width;
        for mark in tick_marks(interval, self.range, self.surface.width, label_width_of) {
            let text = mark.value.to_string();
            let metrics = self.measurer.measure(&text, &self.font);
            out.push(RenderCommand::Label {
                pos: Point::new(mark.left(), metrics.line_height()),
                text,
                font: self.font.clone(),
                fill: self.text_fill.clone(),
            });
        }
        out
    }

    /// Pixel width reserved per label: the widest plausible label (as many
    /// `8`s as the wider range bound has characters) measured in the current
    /// font, times the spacing scale.
    fn reserved_label_width(&self) -> f64 {
        let sample = "8".repeat(self.range.label_len());
        self.measurer.measure(&sample, &self.font).advance_width * self.tick_spacing_scale
    }

    fn refit(&mut self) {
        self.major_tick = select_interval(
            self.range.len(),
            self.surface.width,
            self.reserved_label_width(),
        );
    }

    fn remeasure_height(&mut self) {
        self.preferred_height = self.measurer.measure("8", &self.font).line_height();
    }
}
