// Copyright 2026 the FrameTick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-axis demo: drives the widget through a few timelines and dumps
//! each render pass as SVG on stdout.

mod svg;

use std::sync::Arc;

use frametick_axis::FrameAxis;
use frametick_text::{FontSpec, HeuristicTextMeasurer};
use kurbo::Size;
use peniko::color::palette::css;

fn main() {
    let mut axis = FrameAxis::new(Arc::new(HeuristicTextMeasurer));
    axis.set_surface(Size::new(800.0, 20.0));

    section("default timeline (0..=180 @ 800 px)", &axis);

    axis.set_start_frame(55);
    axis.set_end_frame(175);
    section("scrolled range (55..=175): grid stays on multiples", &axis);

    axis.set_start_frame(0);
    axis.set_end_frame(5000);
    axis.set_font(FontSpec::new(14.0));
    axis.set_text_fill(css::ORANGE);
    section("long timeline (0..=5000), 14 px amber labels", &axis);

    axis.set_surface(Size::new(24.0, 20.0));
    section("surface too narrow: cleared, no labels", &axis);

    axis.set_surface(Size::new(800.0, 20.0));
    axis.set_start_frame(5001);
    section("inverted range: cleared, no labels", &axis);
}

fn section(title: &str, axis: &FrameAxis) {
    println!(
        "<!-- {title}; range = {:?}, major_tick = {:?} -->",
        axis.range(),
        axis.major_tick()
    );
    print!("{}", svg::render_pass_to_svg(&axis.render_commands()));
    println!();
}
