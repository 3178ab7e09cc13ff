//! Boxed legend: a framed list of color patches and set names drawn in pixel
//! coordinates on top of the diagram.

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontFamily;

use super::text::{estimate_text_width_px, truncate_to_width};
use super::types::{HAlign, LegendLoc, MAX_FONTSIZE, VAlign};
use crate::error::{Result, VennError};
use crate::style::{Rgba, less_transparent_color};
use crate::viz_plotters_adapter::{edge_style, fill_style};

// Layout constants (pixels)
const OUTER_MARGIN: i32 = 10;
const PAD: i32 = 8;
const PATCH_TO_TEXT_GAP: i32 = 8;
const ROW_GAP: i32 = 6;

/// Pixel rectangle of the legend box and the top of its first row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

/// Sizes beyond what `layout` accepts are clamped before any pixel math.
fn clamp_font(font_px: u32) -> u32 {
    font_px.min(MAX_FONTSIZE + 2)
}

fn max_text_px(surface_w: i32, font_px: u32) -> u32 {
    let patch = font_px as i32;
    ((surface_w / 2) - 2 * PAD - patch - PATCH_TO_TEXT_GAP).max(40) as u32
}

/// Where the box goes for `loc` on a `(w, h)` surface.
pub fn legend_box(dim: (u32, u32), loc: LegendLoc, labels: &[String], font_px: u32) -> LegendBox {
    let font_px = clamp_font(font_px);
    let (w, h) = (dim.0 as i32, dim.1 as i32);
    let patch = font_px as i32;
    let cap = max_text_px(w, font_px);
    let text_w = labels
        .iter()
        .map(|l| estimate_text_width_px(&truncate_to_width(l, font_px, cap), font_px) as i32)
        .max()
        .unwrap_or(0);
    let n = labels.len() as i32;
    let box_w = 2 * PAD + patch + PATCH_TO_TEXT_GAP + text_w;
    let box_h = 2 * PAD + n * patch + (n - 1).max(0) * ROW_GAP;

    let (h_align, v_align) = loc.alignment();
    let x0 = match h_align {
        HAlign::Left => OUTER_MARGIN,
        HAlign::Center => (w - box_w) / 2,
        HAlign::Right => w - OUTER_MARGIN - box_w,
    };
    let y0 = match v_align {
        VAlign::Top => OUTER_MARGIN,
        VAlign::Center => (h - box_h) / 2,
        VAlign::Bottom => h - OUTER_MARGIN - box_h,
    };
    LegendBox {
        x0,
        y0,
        x1: x0 + box_w,
        y1: y0 + box_h,
    }
}

/// Draw the legend box with one `(name, color)` row per set.
pub fn draw_boxed_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    loc: LegendLoc,
    entries: &[(String, Rgba)],
    font_px: u32,
) -> Result<()> {
    let draw_err = |e: DrawingAreaErrorKind<DB::ErrorType>| VennError::Draw(format!("{:?}", e));
    let font_px = clamp_font(font_px);

    let dim = area.dim_in_pixel();
    let labels: Vec<String> = entries.iter().map(|(name, _)| name.clone()).collect();
    let b = legend_box(dim, loc, &labels, font_px);

    area.draw(&Rectangle::new(
        [(b.x0, b.y0), (b.x1, b.y1)],
        WHITE.mix(0.85).filled(),
    ))
    .map_err(draw_err)?;
    area.draw(&Rectangle::new([(b.x0, b.y0), (b.x1, b.y1)], BLACK.stroke_width(1)))
        .map_err(draw_err)?;

    let patch = font_px as i32;
    let cap = max_text_px(dim.0 as i32, font_px);
    let label_style = TextStyle::from((FontFamily::SansSerif, font_px))
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    for (i, (name, color)) in entries.iter().enumerate() {
        let top = b.y0 + PAD + i as i32 * (patch + ROW_GAP);
        let x = b.x0 + PAD;
        let corners = [(x, top), (x + patch, top + patch)];
        area.draw(&Rectangle::new(corners, fill_style(*color)))
            .map_err(draw_err)?;
        area.draw(&Rectangle::new(
            corners,
            edge_style(less_transparent_color(*color)),
        ))
        .map_err(draw_err)?;
        area.draw(&Text::new(
            truncate_to_width(name, font_px, cap),
            (x + patch + PATCH_TO_TEXT_GAP, top + patch / 2),
            label_style.clone(),
        ))
        .map_err(draw_err)?;
    }
    Ok(())
}
