//! Backend-free layout: everything `draw` needs, resolved up front.
//!
//! A [`VennLayout`] is plain data and fully deterministic for a given input,
//! so it can be inspected in tests without rasterizing anything.

use crate::error::{Result, VennError};
use crate::models::{PetalLabels, SetCount};
use crate::style::{Rgba, generate_colors, less_transparent_color};
use log::debug;

use super::geometry::{ShapeSpec, geometry};
use super::types::{HAlign, LegendLoc, MAX_FONTSIZE, VAlign, VennOptions};

/// One set's shape with its resolved colors.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedShape {
    pub shape: ShapeSpec,
    pub fill: Rgba,
    pub edge: Rgba,
}

/// A piece of text at a unit-square position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub position: (f64, f64),
    pub font_px: u32,
    pub color: Rgba,
    pub h_align: HAlign,
    pub v_align: VAlign,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LegendLayout {
    /// Set names written next to their shapes.
    Direct(Vec<PlacedText>),
    /// A framed box with one color patch and name per set.
    Boxed {
        loc: LegendLoc,
        entries: Vec<(String, Rgba)>,
        font_px: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct VennLayout {
    pub count: SetCount,
    pub shapes: Vec<PlacedShape>,
    pub petals: Vec<PlacedText>,
    pub legend: LegendLayout,
}

/// Resolve shapes, colors, petal texts and the legend for `labels`.
///
/// `names` must have one entry per set. Every petal code must have an anchor
/// in the geometry table, otherwise [`VennError::UnplacedPetal`].
pub fn layout(labels: &PetalLabels, names: &[String], opts: &VennOptions) -> Result<VennLayout> {
    let count = labels.count();
    if names.len() != count.get() {
        return Err(VennError::SizeMismatch {
            what: "set names",
            got: names.len(),
            expected: count.get(),
        });
    }
    if !(1..=MAX_FONTSIZE).contains(&opts.fontsize) {
        return Err(VennError::InvalidFontSize {
            got: opts.fontsize,
            max: MAX_FONTSIZE,
        });
    }
    let geo = geometry(count);
    let colors = generate_colors(&opts.palette, count.get(), opts.alpha)?;

    let shapes = geo
        .shapes
        .iter()
        .zip(&colors)
        .map(|(shape, &fill)| PlacedShape {
            shape: *shape,
            fill,
            edge: less_transparent_color(fill),
        })
        .collect();

    let petals = labels
        .iter()
        .map(|(code, text)| {
            let position = geo
                .petal_anchor(code.as_str())
                .ok_or_else(|| VennError::UnplacedPetal(code.to_string()))?;
            Ok(PlacedText {
                text: text.to_string(),
                position,
                font_px: opts.fontsize,
                color: Rgba::BLACK,
                h_align: HAlign::Center,
                v_align: VAlign::Center,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let legend = match opts.legend_loc {
        Some(loc) => LegendLayout::Boxed {
            loc,
            entries: names.iter().cloned().zip(colors.iter().copied()).collect(),
            font_px: opts.fontsize,
        },
        None => LegendLayout::Direct(
            names
                .iter()
                .zip(geo.legend_anchors)
                .zip(&colors)
                .map(|((name, anchor), color)| PlacedText {
                    text: name.clone(),
                    position: anchor.position,
                    font_px: opts.fontsize.saturating_add(2),
                    color: if opts.legend_use_petal_color {
                        color.with_alpha(1.0)
                    } else {
                        Rgba::BLACK
                    },
                    h_align: anchor.h_align,
                    v_align: anchor.v_align,
                })
                .collect(),
        ),
    };

    debug!(
        "laid out {} sets: {} petal labels, {} legend",
        count,
        petals.len(),
        if opts.legend_loc.is_some() { "boxed" } else { "direct" }
    );
    Ok(VennLayout {
        count,
        shapes,
        petals,
        legend,
    })
}
