// Copyright 2026 the FrameTick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of axis render commands.

use frametick_axis::RenderCommand;
use peniko::Brush;

/// Replays one render pass into an SVG fragment.
///
/// `Clear` becomes a dark background rect sized to the surface; each label
/// becomes a `<text>` element at its left edge and baseline. Labels are
/// decimal frame numbers, so no XML escaping is needed.
pub(crate) fn render_pass_to_svg(commands: &[RenderCommand]) -> String {
    let mut out = String::new();
    for command in commands {
        match command {
            RenderCommand::Clear { size } => {
                out.push_str(&format!(
                    r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
                    size.width, size.height, size.width, size.height
                ));
                out.push('\n');
                out.push_str(&format!(
                    r##"  <rect x="0" y="0" width="{}" height="{}" fill="#1e1e1e"/>"##,
                    size.width, size.height
                ));
                out.push('\n');
            }
            RenderCommand::Label {
                pos,
                text,
                font,
                fill,
            } => {
                out.push_str(&format!(
                    r#"  <text x="{}" y="{}" font-size="{}" font-family="{}" fill="{}">{}</text>"#,
                    pos.x,
                    pos.y,
                    font.size,
                    font.family.as_css_family(),
                    css_paint(fill),
                    text
                ));
                out.push('\n');
            }
        }
    }
    out.push_str("</svg>\n");
    out
}

fn css_paint(brush: &Brush) -> String {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            format!("rgb({} {} {} / {})", rgba.r, rgba.g, rgba.b, f32::from(rgba.a) / 255.0)
        }
        _ => String::from("black"),
    }
}
