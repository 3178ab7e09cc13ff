//! Venn rendering: lay out a diagram and draw it to **SVG** or **PNG**.
//!
//! - Ellipses for 2..=5 sets, triangles for 6 sets
//! - Petal labels at fixed anchors of the classic layout tables
//! - Set names next to their shapes, or a boxed legend at a named location
//! - The drawing area is always passed in by the caller
//!
//! [`layout`] is pure and returns inspectable data; [`draw`] puts a layout on a
//! plotters drawing area; [`venn`] chains both; [`plot_venn`] writes a file.

pub mod colormap;
pub mod geometry;
pub mod layout;
pub mod legend;
pub mod text;
pub mod types;
pub mod util;

pub use geometry::{Geometry, LegendAnchor, ShapeSpec, geometry};
pub use layout::{LegendLayout, PlacedShape, PlacedText, VennLayout, layout};
pub use types::{DEFAULT_ALPHA, DEFAULT_FONTSIZE, DEFAULT_SIZE, HAlign, LegendLoc, VAlign, VennOptions};

use crate::error::{Result, VennError};
use crate::input::Dataset;
use crate::viz_plotters_adapter::{edge_style, fill_style, rgba_color, text_style};
use anyhow::Context;
use log::{debug, info};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::hash::Hash;
use std::path::Path;

use legend::draw_boxed_legend;
use util::ensure_fonts_registered;

/// Blank border around the unit square, in pixels.
const MARGIN: u32 = 16;

/// Draw a finished layout onto `area`.
///
/// The unit square fills the area minus a small margin. A failure leaves
/// whatever was already drawn on the surface.
pub fn draw<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, layout: &VennLayout) -> Result<()> {
    let draw_err = |e: plotters::drawing::DrawingAreaErrorKind<DB::ErrorType>| {
        VennError::Draw(format!("{:?}", e))
    };

    let mut chart = ChartBuilder::on(area)
        .margin(MARGIN)
        .build_cartesian_2d(0f64..1f64, 0f64..1f64)
        .map_err(draw_err)?;

    // ----------------------------
    // 1) Shapes: translucent fill, then a stronger outline
    // ----------------------------
    for placed in &layout.shapes {
        let outline = placed.shape.outline();
        let mut closed = outline.clone();
        if let Some(first) = outline.first() {
            closed.push(*first);
        }
        chart
            .draw_series(std::iter::once(Polygon::new(outline, fill_style(placed.fill))))
            .map_err(draw_err)?;
        chart
            .draw_series(std::iter::once(PathElement::new(closed, edge_style(placed.edge))))
            .map_err(draw_err)?;
    }

    // ----------------------------
    // 2) Petal labels and direct set names
    // ----------------------------
    let direct: &[PlacedText] = match &layout.legend {
        LegendLayout::Direct(texts) => texts,
        LegendLayout::Boxed { .. } => &[],
    };
    for placed in layout.petals.iter().chain(direct) {
        let color = rgba_color(placed.color);
        let style = text_style(placed.font_px, &color, placed.h_align, placed.v_align);
        chart
            .draw_series(std::iter::once(Text::new(
                placed.text.clone(),
                placed.position,
                style,
            )))
            .map_err(draw_err)?;
    }

    // ----------------------------
    // 3) Boxed legend, in pixel coordinates of the whole area
    // ----------------------------
    if let LegendLayout::Boxed {
        loc,
        entries,
        font_px,
    } = &layout.legend
    {
        draw_boxed_legend(area, *loc, entries, *font_px)?;
    }

    debug!(
        "drew {} shapes and {} petal labels",
        layout.shapes.len(),
        layout.petals.len()
    );
    Ok(())
}

/// Classify, label, lay out and draw `dataset` on `area`; returns the layout.
pub fn venn<DB, T>(
    area: &DrawingArea<DB, Shift>,
    dataset: &Dataset<T>,
    opts: &VennOptions,
) -> Result<VennLayout>
where
    DB: DrawingBackend,
    T: Eq + Hash,
{
    let labels = dataset.petal_labels(&opts.fmt)?;
    let names = dataset.names();
    let layout = layout(&labels, &names, opts)?;
    draw(area, &layout)?;
    Ok(layout)
}

/// Render `dataset` to `out_path`: `.svg` selects SVG, anything else a bitmap
/// format inferred from the extension (`.png`, `.jpg`, ...).
pub fn plot_venn<T, P>(
    dataset: &Dataset<T>,
    out_path: P,
    width: u32,
    height: u32,
    opts: &VennOptions,
) -> anyhow::Result<VennLayout>
where
    T: Eq + Hash,
    P: AsRef<Path>,
{
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let is_svg = out_path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    let layout = if is_svg {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        render_on(&root, dataset, opts)?
    } else {
        ensure_fonts_registered().context("cannot draw bitmap text")?;
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        render_on(&root, dataset, opts)?
    };
    info!(
        "wrote {}-set Venn diagram to {}",
        layout.count,
        out_path.display()
    );
    Ok(layout)
}

fn render_on<DB, T>(
    root: &DrawingArea<DB, Shift>,
    dataset: &Dataset<T>,
    opts: &VennOptions,
) -> anyhow::Result<VennLayout>
where
    DB: DrawingBackend,
    T: Eq + Hash,
{
    root.fill(&WHITE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let layout = venn(root, dataset, opts)?;
    root.present()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
        .context("failed to write the output image")?;
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SetCollection;

    fn sets() -> SetCollection<u32> {
        SetCollection::new()
            .with_set("A", [1, 2, 3, 4])
            .unwrap()
            .with_set("B", [3, 4, 5, 6])
            .unwrap()
            .with_set("C", [4, 6, 7, 8])
            .unwrap()
    }

    #[test]
    fn venn_draws_into_an_svg_buffer() {
        let mut buf = String::new();
        let layout = {
            let root = SVGBackend::with_string(&mut buf, (900, 700)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            let layout = venn(&root, &Dataset::from(sets()), &VennOptions::default()).unwrap();
            root.present().unwrap();
            layout
        };
        assert_eq!(layout.petals.len(), 7);
        assert!(buf.contains("<polygon") || buf.contains("<path"));
        // seven petal labels plus three set names
        assert_eq!(buf.matches("<text").count(), 10);
    }

    #[test]
    fn boxed_legend_is_drawn_as_rectangles() {
        let mut buf = String::new();
        {
            let root = SVGBackend::with_string(&mut buf, (900, 700)).into_drawing_area();
            let opts = VennOptions {
                legend_loc: Some(LegendLoc::UpperLeft),
                ..VennOptions::default()
            };
            venn(&root, &Dataset::from(sets()), &opts).unwrap();
            root.present().unwrap();
        }
        assert!(buf.contains("<rect"));
    }
}
