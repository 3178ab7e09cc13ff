//! Public types and constants for the visualization module.

use crate::error::VennError;
use crate::petal::DEFAULT_FMT;
use crate::style::Palette;
use std::str::FromStr;

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Placement of a boxed legend inside the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendLoc {
    /// Same as `UpperRight`; the diagram has no data-driven free space to search.
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    Right,
    CenterLeft,
    CenterRight,
    LowerCenter,
    UpperCenter,
    Center,
}

impl LegendLoc {
    /// Which corner/edge of the surface the box is attached to.
    pub fn alignment(self) -> (HAlign, VAlign) {
        match self {
            LegendLoc::Best | LegendLoc::UpperRight => (HAlign::Right, VAlign::Top),
            LegendLoc::UpperLeft => (HAlign::Left, VAlign::Top),
            LegendLoc::LowerLeft => (HAlign::Left, VAlign::Bottom),
            LegendLoc::LowerRight => (HAlign::Right, VAlign::Bottom),
            LegendLoc::Right | LegendLoc::CenterRight => (HAlign::Right, VAlign::Center),
            LegendLoc::CenterLeft => (HAlign::Left, VAlign::Center),
            LegendLoc::LowerCenter => (HAlign::Center, VAlign::Bottom),
            LegendLoc::UpperCenter => (HAlign::Center, VAlign::Top),
            LegendLoc::Center => (HAlign::Center, VAlign::Center),
        }
    }
}

impl FromStr for LegendLoc {
    type Err = VennError;

    /// Accepts `"upper right"`, `"upper-right"` and `"upper_right"` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match key.as_str() {
            "best" => Ok(LegendLoc::Best),
            "upper right" => Ok(LegendLoc::UpperRight),
            "upper left" => Ok(LegendLoc::UpperLeft),
            "lower left" => Ok(LegendLoc::LowerLeft),
            "lower right" => Ok(LegendLoc::LowerRight),
            "right" => Ok(LegendLoc::Right),
            "center left" => Ok(LegendLoc::CenterLeft),
            "center right" => Ok(LegendLoc::CenterRight),
            "lower center" => Ok(LegendLoc::LowerCenter),
            "upper center" => Ok(LegendLoc::UpperCenter),
            "center" => Ok(LegendLoc::Center),
            _ => Err(VennError::UnknownLegendLoc(s.to_string())),
        }
    }
}

pub const DEFAULT_ALPHA: f64 = 0.4;
pub const DEFAULT_FONTSIZE: u32 = 14;
/// Largest accepted `fontsize`; keeps pixel arithmetic well inside `i32`.
pub const MAX_FONTSIZE: u32 = 512;
/// Default surface size in pixels (width, height).
pub const DEFAULT_SIZE: (u32, u32) = (900, 700);

/// Styling knobs for [`venn`](super::venn).
#[derive(Debug, Clone, PartialEq)]
pub struct VennOptions {
    /// Petal label template, used only when labels are computed from raw sets.
    pub fmt: String,
    pub palette: Palette,
    /// Uniform alpha for explicit colors and colormap samples.
    pub alpha: f64,
    /// Petal text size in pixels (1..=`MAX_FONTSIZE`); set names use `fontsize + 2`.
    pub fontsize: u32,
    /// Color set names like their shape (fully opaque) instead of black.
    pub legend_use_petal_color: bool,
    /// Draw a boxed legend at this location instead of names next to the shapes.
    pub legend_loc: Option<LegendLoc>,
}

impl Default for VennOptions {
    fn default() -> Self {
        Self {
            fmt: DEFAULT_FMT.to_string(),
            palette: Palette::Default,
            alpha: DEFAULT_ALPHA,
            fontsize: DEFAULT_FONTSIZE,
            legend_use_petal_color: false,
            legend_loc: None,
        }
    }
}
