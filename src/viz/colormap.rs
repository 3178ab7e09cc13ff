//! Named colormaps.
//!
//! Continuous maps are stored as color stops and linearly interpolated;
//! qualitative maps are plain lists where a position picks a bin.

use crate::error::{Result, VennError};
use crate::style::Rgba;

type Stop = (f64, (u8, u8, u8));

const VIRIDIS: &[Stop] = &[
    (0.000, (68, 1, 84)),
    (0.125, (71, 44, 122)),
    (0.250, (59, 82, 139)),
    (0.375, (44, 114, 142)),
    (0.500, (33, 145, 140)),
    (0.625, (40, 174, 128)),
    (0.750, (94, 201, 98)),
    (0.875, (173, 220, 48)),
    (1.000, (253, 231, 37)),
];

const PLASMA: &[Stop] = &[
    (0.000, (13, 8, 135)),
    (0.125, (76, 2, 161)),
    (0.250, (126, 3, 168)),
    (0.375, (169, 35, 149)),
    (0.500, (204, 71, 120)),
    (0.625, (229, 107, 93)),
    (0.750, (248, 149, 64)),
    (0.875, (253, 197, 39)),
    (1.000, (240, 249, 33)),
];

const MAGMA: &[Stop] = &[
    (0.00, (0, 0, 4)),
    (0.25, (81, 18, 124)),
    (0.50, (183, 55, 121)),
    (0.75, (252, 137, 97)),
    (1.00, (252, 253, 191)),
];

const INFERNO: &[Stop] = &[
    (0.00, (0, 0, 4)),
    (0.25, (87, 16, 110)),
    (0.50, (188, 55, 84)),
    (0.75, (249, 142, 9)),
    (1.00, (252, 255, 164)),
];

const COOL: &[Stop] = &[(0.0, (0, 255, 255)), (1.0, (255, 0, 255))];

const COOLWARM: &[Stop] = &[
    (0.0, (59, 76, 192)),
    (0.5, (221, 221, 221)),
    (1.0, (180, 4, 38)),
];

const GRAY: &[Stop] = &[(0.0, (0, 0, 0)), (1.0, (255, 255, 255))];

const SET1: &[(u8, u8, u8)] = &[
    (228, 26, 28),
    (55, 126, 184),
    (77, 175, 74),
    (152, 78, 163),
    (255, 127, 0),
    (255, 255, 51),
    (166, 86, 40),
    (247, 129, 191),
    (153, 153, 153),
];

const TAB10: &[(u8, u8, u8)] = &[
    (31, 119, 180),
    (255, 127, 14),
    (44, 160, 44),
    (214, 39, 40),
    (148, 103, 189),
    (140, 86, 75),
    (227, 119, 194),
    (127, 127, 127),
    (188, 189, 34),
    (23, 190, 207),
];

/// Names accepted by [`Colormap::by_name`] (case-insensitive).
pub const COLORMAP_NAMES: &[&str] = &[
    "viridis", "plasma", "magma", "inferno", "cool", "coolwarm", "gray", "Set1", "tab10",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Colormap {
    Linear(&'static [Stop]),
    Listed(&'static [(u8, u8, u8)]),
}

impl Colormap {
    pub fn by_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "viridis" => Ok(Colormap::Linear(VIRIDIS)),
            "plasma" => Ok(Colormap::Linear(PLASMA)),
            "magma" => Ok(Colormap::Linear(MAGMA)),
            "inferno" => Ok(Colormap::Linear(INFERNO)),
            "cool" => Ok(Colormap::Linear(COOL)),
            "coolwarm" => Ok(Colormap::Linear(COOLWARM)),
            "gray" | "grey" => Ok(Colormap::Linear(GRAY)),
            "set1" => Ok(Colormap::Listed(SET1)),
            "tab10" => Ok(Colormap::Listed(TAB10)),
            _ => Err(VennError::UnknownColormap(name.to_string())),
        }
    }

    /// Color at position `t` in `[0, 1]` (clamped).
    pub fn at(&self, t: f64, alpha: f64) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Colormap::Listed(colors) => {
                let n = colors.len();
                let idx = ((t * n as f64) as usize).min(n - 1);
                let (r, g, b) = colors[idx];
                Rgba::from_rgb8(r, g, b, alpha)
            }
            Colormap::Linear(stops) => {
                let hi = stops
                    .iter()
                    .position(|(pos, _)| *pos >= t)
                    .unwrap_or(stops.len() - 1);
                if hi == 0 {
                    let (r, g, b) = stops[0].1;
                    return Rgba::from_rgb8(r, g, b, alpha);
                }
                let (p0, c0) = stops[hi - 1];
                let (p1, c1) = stops[hi];
                let w = if p1 > p0 { (t - p0) / (p1 - p0) } else { 0.0 };
                let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * w) / 255.0;
                Rgba::new(lerp(c0.0, c1.0), lerp(c0.1, c1.1), lerp(c0.2, c1.2), alpha)
            }
        }
    }

    /// `n` colors at equally spaced positions from 0 to 1.
    pub fn sample(&self, n: usize, alpha: f64) -> Vec<Rgba> {
        match n {
            0 => Vec::new(),
            1 => vec![self.at(0.0, alpha)],
            _ => (0..n)
                .map(|i| self.at(i as f64 / (n - 1) as f64, alpha))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_stops() {
        let v = Colormap::by_name("viridis").unwrap();
        assert_eq!(v.at(0.0, 1.0).to_hex(), "#440154");
        assert_eq!(v.at(1.0, 1.0).to_hex(), "#fde725");
        assert_eq!(v.at(0.5, 1.0).to_hex(), "#21918c");
    }

    #[test]
    fn listed_maps_pick_bins() {
        let set1 = Colormap::by_name("Set1").unwrap();
        let colors = set1.sample(3, 0.4);
        assert_eq!(colors[0].to_hex(), "#e41a1c");
        assert_eq!(colors[2].to_hex(), "#999999");
        assert!(colors.iter().all(|c| c.a == 0.4));
    }

    #[test]
    fn every_listed_name_resolves() {
        for name in COLORMAP_NAMES {
            assert!(Colormap::by_name(name).is_ok(), "{name}");
        }
        assert_eq!(
            Colormap::by_name("jet2"),
            Err(VennError::UnknownColormap("jet2".into()))
        );
    }
}
