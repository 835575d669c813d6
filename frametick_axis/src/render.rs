// Copyright 2026 the FrameTick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw-call output of a render pass.
//!
//! The axis does not talk to a canvas directly; it emits a short list of
//! commands the host replays against whatever surface it owns. A pass always
//! begins by clearing the surface, so a pass that fits no labels is exactly
//! `[Clear]`.

extern crate alloc;

use alloc::string::String;

use frametick_text::FontSpec;
use kurbo::{Point, Size};
use peniko::Brush;

/// One drawing-surface operation.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    /// Clear the whole surface. Always the first command of a pass.
    Clear {
        /// Current surface extent.
        size: Size,
    },
    /// Draw one frame-number label.
    Label {
        /// Label position: `x` is the left edge, `y` the text baseline.
        pos: Point,
        /// The frame number in decimal.
        text: String,
        /// Font to draw with.
        font: FontSpec,
        /// Fill paint.
        fill: Brush,
    },
}
