// Copyright 2026 the PieGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `piegraph_demo`.

use kurbo::Rect;
use peniko::color::Srgb;
use peniko::{Brush, Color, Gradient, GradientKind};
use piegraph::RenderOp;

/// Renders the ops into a standalone SVG document.
///
/// Ops are painted in `z_index` order (stable within a z level, so emission
/// order breaks ties). Solid fills become plain `fill` attributes; the
/// priority overlay's radial gradient becomes a `<radialGradient>` def.
pub(crate) fn render(view_box: Rect, ops: &[RenderOp]) -> String {
    let mut order: Vec<usize> = (0..ops.len()).collect();
    order.sort_by_key(|&i| (ops[i].z_index(), i));

    let mut defs = String::new();
    let mut body = String::new();
    let mut gradient_count = 0_usize;

    for &i in &order {
        match &ops[i] {
            RenderOp::FillPath { path, brush, .. } => {
                let d = path.to_svg();
                body.push_str(&format!(r#"<path d="{d}""#));
                match brush {
                    Brush::Gradient(gradient) => {
                        let id = format!("grad{gradient_count}");
                        gradient_count += 1;
                        write_radial_gradient_def(&mut defs, &id, gradient);
                        body.push_str(&format!(r##" fill="url(#{id})""##));
                    }
                    Brush::Solid(color) => write_color_attr(&mut body, "fill", *color),
                    _ => body.push_str(r#" fill="none""#),
                }
                body.push_str("/>\n");
            }
            RenderOp::GlyphArc { run, .. } => {
                let font_size = run.rendered_font_size();
                for placement in &run.glyphs {
                    let pos = run.glyph_position(placement);
                    body.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle""#,
                        pos.x, pos.y, font_size
                    ));
                    body.push_str(&format!(
                        r#" transform="rotate({} {} {})""#,
                        placement.rotation.to_degrees(),
                        pos.x,
                        pos.y
                    ));
                    write_color_attr(&mut body, "fill", run.fill);
                    body.push('>');
                    push_escaped(&mut body, placement.glyph);
                    body.push_str("</text>\n");
                }
            }
        }
    }

    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    ));
    out.push('\n');
    if !defs.is_empty() {
        out.push_str("<defs>\n");
        out.push_str(&defs);
        out.push_str("</defs>\n");
    }
    out.push_str(&body);
    out.push_str("</svg>\n");
    out
}

fn write_radial_gradient_def(out: &mut String, id: &str, gradient: &Gradient) {
    let GradientKind::Radial(peniko::RadialGradientPosition {
        start_radius,
        end_center,
        end_radius,
        ..
    }) = gradient.kind
    else {
        return;
    };
    // The chart only emits concentric two-point radials; fr covers the inner
    // start radius.
    out.push_str(&format!(
        r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{}" cy="{}" fr="{}" r="{}">"#,
        end_center.x, end_center.y, start_radius, end_radius
    ));
    out.push('\n');
    for stop in gradient.stops.iter() {
        let rgba = stop.color.to_alpha_color::<Srgb>().to_rgba8();
        out.push_str(&format!(
            r##"<stop offset="{}" stop-color="#{:02x}{:02x}{:02x}" stop-opacity="{}"/>"##,
            stop.offset,
            rgba.r,
            rgba.g,
            rgba.b,
            f64::from(rgba.a) / 255.0
        ));
        out.push('\n');
    }
    out.push_str("</radialGradient>\n");
}

fn write_color_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    out.push_str(&format!(
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    ));
    if rgba.a != 255 {
        out.push_str(&format!(
            r#" {name}-opacity="{}""#,
            f64::from(rgba.a) / 255.0
        ));
    }
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&apos;"),
        _ => out.push(c),
    }
}
