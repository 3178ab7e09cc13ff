//! Adapter helpers between the backend-free layout types and the plotters crate.
//!
//! Usage example (inside a drawing function):
//! ```ignore
//!     use plotters::prelude::*;
//!     use crate::viz_plotters_adapter::{fill_style, edge_style, text_style};
//!
//!     // For each placed shape:
//!     chart.draw_series(std::iter::once(Polygon::new(outline.clone(), fill_style(shape.fill))))?;
//!     chart.draw_series(std::iter::once(PathElement::new(outline, edge_style(shape.edge))))?;
//!
//!     // For each placed text:
//!     let style = text_style(text.font_px, &color, text.h_align, text.v_align);
//!     chart.draw_series(std::iter::once(Text::new(text.text.clone(), text.position, style)))?;
//! ```

use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::style::Rgba;
use crate::viz::types::{HAlign, VAlign};

/// Stroke width of shape outlines in pixels.
pub const EDGE_WIDTH: u32 = 2;

pub fn rgba_color(color: Rgba) -> RGBAColor {
    let (r, g, b) = color.to_rgb8();
    RGBAColor(r, g, b, color.a.clamp(0.0, 1.0))
}

/// Filled style for shape interiors; the alpha channel carries the transparency.
pub fn fill_style(color: Rgba) -> ShapeStyle {
    rgba_color(color).filled()
}

/// Outline style for shape edges.
pub fn edge_style(color: Rgba) -> ShapeStyle {
    rgba_color(color).stroke_width(EDGE_WIDTH)
}

pub fn hpos(align: HAlign) -> HPos {
    match align {
        HAlign::Left => HPos::Left,
        HAlign::Center => HPos::Center,
        HAlign::Right => HPos::Right,
    }
}

pub fn vpos(align: VAlign) -> VPos {
    match align {
        VAlign::Top => VPos::Top,
        VAlign::Center => VPos::Center,
        VAlign::Bottom => VPos::Bottom,
    }
}

/// Sans-serif text style anchored so that `(h, v)` sits on the text position.
pub fn text_style<'a>(font_px: u32, color: &'a RGBAColor, h: HAlign, v: VAlign) -> TextStyle<'a> {
    TextStyle::from((FontFamily::SansSerif, font_px))
        .color(color)
        .pos(Pos::new(hpos(h), vpos(v)))
}
