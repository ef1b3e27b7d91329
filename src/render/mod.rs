//! Presentation on top of the layout: label anchors, fill and text colors,
//! and SVG output. Nothing in [`crate::layout`] depends on this module.

pub mod anchor;
pub mod colors;
pub mod svg;

pub use anchor::Anchor;
pub use colors::Color;
pub use svg::{render_svg, Decorations, SvgOptions};
