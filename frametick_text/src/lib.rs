// Copyright 2026 the FrameTick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for frame-axis layout.
//!
//! The axis has to know how wide a frame-number label renders before it can
//! decide how many labels fit. Shaping and glyph layout stay downstream in
//! whatever renders the axis; this crate only defines the small measurement
//! interface the layout code calls through.
//!
//! The crate is intentionally:
//! - dependency-free,
//! - `no_std`-friendly (it uses `alloc` only for owned font family names), and
//! - renderer-agnostic (a shaping engine, a web canvas, or a fixed-advance
//!   heuristic can all sit behind the same trait).

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal single-line text measurement interface.
///
/// The axis calls this in two places: to size the widest plausible label
/// (which bounds how many ticks fit) and to position each emitted label.
/// `text` is treated as a single line; frame-number labels never wrap.
pub trait TextMeasurer {
    /// Measures `text` rendered with `font`.
    fn measure(&self, text: &str, font: &FontSpec) -> TextMetrics;
}

/// The font inputs relevant to measurement and label drawing.
///
/// The axis treats this as an opaque handle: it is forwarded to the measurer
/// and copied into render commands, never interpreted.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Font size in the axis's coordinate system (typically pixels).
    pub size: f64,
    /// Preferred font family.
    pub family: FontFamily,
    /// Font weight (`400` normal, `700` bold).
    pub weight: FontWeight,
    /// Normal, italic, or oblique.
    pub style: FontStyle,
}

impl FontSpec {
    /// Creates a sans-serif, normal-weight font of the given size.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self {
            size,
            family: FontFamily::SansSerif,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Upright glyphs.
    Normal,
    /// Italic glyphs.
    Italic,
    /// Slanted upright glyphs.
    Oblique,
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// Advance width of the whole line.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Extra line spacing beyond ascent + descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A tiny heuristic measurer suitable for demos and tests.
///
/// Assumes ~0.6 em advance per glyph with an 0.8/0.2 em ascent/descent
/// split. Frame-number labels are all digits, so the uniform-advance
/// assumption is much less wrong here than it would be for prose.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> TextMetrics {
        TextMetrics {
            advance_width: 0.6 * font.size * text.chars().count() as f64,
            ascent: 0.8 * font.size,
            descent: 0.2 * font.size,
            leading: 0.0,
        }
    }
}
