//! SVG rendering of a treemap layout.
//!
//! Produces a standalone SVG document: one filled `<rect>` per layout
//! rectangle, with optional text labels and values placed at an [`Anchor`].
//!
//! ```
//! use squarify::layout::{compute_layout, LayoutConfig, Rect};
//! use squarify::render::svg::{render_svg, Decorations, SvgOptions};
//!
//! let region = Rect::new(0.0, 0.0, 300.0, 200.0);
//! let rects = compute_layout(&[6.0, 3.0, 1.0], region, &LayoutConfig::default()).unwrap();
//! let svg = render_svg(&rects, &region, &Decorations::default(), &SvgOptions::default());
//! assert!(svg.starts_with("<svg"));
//! ```

use std::fmt::Write as _;

use compact_str::CompactString;

use super::anchor::Anchor;
use super::colors::{self, Color};
use crate::layout::Rect;

/// Per-rectangle extras, parallel to the layout output. Empty means "none";
/// shorter lists leave the trailing rectangles undecorated.
#[derive(Debug, Clone, Default)]
pub struct Decorations {
    pub colors: Vec<Color>,
    pub labels: Vec<CompactString>,
    pub values: Vec<CompactString>,
}

/// Rendering options.
#[derive(Debug, Clone, Copy)]
pub struct SvgOptions {
    /// Where labels and values sit inside each rectangle
    pub anchor: Anchor,
    /// Font size in layout units
    pub font_size: f64,
    /// Inset from the anchored edges for non-centered anchors
    pub margin: f64,
    /// Outline color, `None` draws no outline
    pub stroke: Option<Color>,
    /// Fill behind the whole region
    pub background: Color,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            anchor: Anchor::Center,
            font_size: 12.0,
            margin: 4.0,
            stroke: Some(Color::WHITE),
            background: Color::new(0.08, 0.09, 0.11),
        }
    }
}

/// Render `rects` (laid out inside `region`) as a complete SVG document.
pub fn render_svg(
    rects: &[Rect],
    region: &Rect,
    decorations: &Decorations,
    options: &SvgOptions,
) -> String {
    let mut svg = String::with_capacity(256 + rects.len() * 160);

    // Writing into a String never fails.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="{x} {y} {w} {h}">"#,
        x = num(region.x),
        y = num(region.y),
        w = num(region.dx),
        h = num(region.dy),
    );
    let _ = writeln!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        num(region.x),
        num(region.y),
        num(region.dx),
        num(region.dy),
        options.background
    );

    let fallback = colors::palette(rects.len());
    let stroke = match options.stroke {
        Some(c) => format!(r#" stroke="{c}" stroke-width="0.5""#),
        None => String::new(),
    };

    for (i, rect) in rects.iter().enumerate() {
        let label = decorations.labels.get(i);
        let value = decorations.values.get(i);
        let fill = decorations.colors.get(i).copied().unwrap_or_else(|| match label {
            Some(l) if decorations.colors.is_empty() => colors::label_color(l),
            _ => fallback[i],
        });

        let _ = writeln!(
            svg,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
            num(rect.x),
            num(rect.y),
            num(rect.dx),
            num(rect.dy),
            fill,
            stroke
        );

        let text_fill = colors::text_color_for(fill);
        let (ax, ay) = options.anchor.position(rect, options.margin);

        match (label, value) {
            // Stack label over value around a centered anchor line.
            (Some(l), Some(v)) if options.anchor.is_vertically_centered() => {
                write_text(&mut svg, l, ax, ay, options, "text-after-edge", text_fill);
                write_text(&mut svg, v, ax, ay, options, "hanging", text_fill);
            }
            (Some(l), Some(v)) => {
                let joined = format!("{l} ({v})");
                write_text(&mut svg, &joined, ax, ay, options, options.anchor.baseline(), text_fill);
            }
            (Some(t), None) | (None, Some(t)) => {
                write_text(&mut svg, t, ax, ay, options, options.anchor.baseline(), text_fill);
            }
            (None, None) => {}
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_text(
    svg: &mut String,
    text: &str,
    x: f64,
    y: f64,
    options: &SvgOptions,
    baseline: &str,
    fill: Color,
) {
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="{}" dominant-baseline="{}" fill="{}">{}</text>"#,
        num(x),
        num(y),
        num(options.font_size),
        options.anchor.text_anchor(),
        baseline,
        fill,
        escape(text)
    );
}

/// Compact coordinate: at most three decimals, no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
