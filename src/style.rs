//! Colors for Venn shapes and labels.
//!
//! Three palette sources are supported:
//! - the built-in 6-entry default table (each entry carries its own alpha),
//! - an explicit list of color strings (`"r"`, `"tomato"`, `"#1f77b4"`, `"tab:blue"`, `"C3"`),
//! - a named colormap sampled at `n` equally spaced points.
//!
//! Explicit colors and colormap samples use one uniform alpha.

use crate::error::{Result, VennError};
use crate::viz::colormap::Colormap;
use std::str::FromStr;

/// RGBA color with all channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// From 8-bit channels, with an explicit alpha.
    pub fn from_rgb8(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, a)
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// 8-bit channels, rounded.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let q = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }

    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Default shape colors, indexed by set order.
pub const DEFAULT_COLORS: [Rgba; 6] = [
    Rgba::new(0.361, 0.753, 0.384, 0.5),
    Rgba::new(0.353, 0.608, 0.831, 0.5),
    Rgba::new(0.965, 0.925, 0.337, 0.6),
    Rgba::new(0.945, 0.353, 0.376, 0.4),
    Rgba::new(1.000, 0.459, 0.000, 0.3),
    Rgba::new(0.322, 0.322, 0.745, 0.2),
];

/// Qualitative cycle used for `"C0"`..`"C9"` and `"tab:*"` names.
const TAB10: [(&str, (u8, u8, u8)); 10] = [
    ("blue", (31, 119, 180)),
    ("orange", (255, 127, 14)),
    ("green", (44, 160, 44)),
    ("red", (214, 39, 40)),
    ("purple", (148, 103, 189)),
    ("brown", (140, 86, 75)),
    ("pink", (227, 119, 194)),
    ("gray", (127, 127, 127)),
    ("olive", (188, 189, 34)),
    ("cyan", (23, 190, 207)),
];

const NAMED: [(&str, (u8, u8, u8)); 30] = [
    // single-letter shorthands
    ("b", (0, 0, 255)),
    ("g", (0, 128, 0)),
    ("r", (255, 0, 0)),
    ("c", (0, 191, 191)),
    ("m", (191, 0, 191)),
    ("y", (191, 191, 0)),
    ("k", (0, 0, 0)),
    ("w", (255, 255, 255)),
    // CSS names
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("cyan", (0, 255, 255)),
    ("magenta", (255, 0, 255)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("pink", (255, 192, 203)),
    ("brown", (165, 42, 42)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("olive", (128, 128, 0)),
    ("navy", (0, 0, 128)),
    ("teal", (0, 128, 128)),
    ("lime", (0, 255, 0)),
    ("gold", (255, 215, 0)),
    ("tomato", (255, 99, 71)),
    ("salmon", (250, 128, 114)),
    ("skyblue", (135, 206, 235)),
];

/// Parse a color string; `alpha` overrides any alpha it carries.
pub fn parse_color(spec: &str, alpha: f64) -> Result<Rgba> {
    let s = spec.trim().to_ascii_lowercase();
    let unknown = || VennError::UnknownColor(spec.to_string());

    if let Some(hex) = s.strip_prefix('#') {
        let digits: Vec<u8> = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<_>>()
            .ok_or_else(unknown)?;
        let (r, g, b) = match digits.len() {
            3 => (digits[0] * 17, digits[1] * 17, digits[2] * 17),
            6 | 8 => (
                digits[0] * 16 + digits[1],
                digits[2] * 16 + digits[3],
                digits[4] * 16 + digits[5],
            ),
            _ => return Err(unknown()),
        };
        return Ok(Rgba::from_rgb8(r, g, b, alpha));
    }

    if let Some(idx) = s.strip_prefix('c').and_then(|d| d.parse::<usize>().ok()) {
        let (_, (r, g, b)) = TAB10[idx % TAB10.len()];
        return Ok(Rgba::from_rgb8(r, g, b, alpha));
    }

    if let Some(name) = s.strip_prefix("tab:") {
        let (r, g, b) = lookup(&TAB10, name).ok_or_else(unknown)?;
        return Ok(Rgba::from_rgb8(r, g, b, alpha));
    }

    let (r, g, b) = lookup(&NAMED, &s).ok_or_else(unknown)?;
    Ok(Rgba::from_rgb8(r, g, b, alpha))
}

fn lookup(table: &[(&str, (u8, u8, u8))], name: &str) -> Option<(u8, u8, u8)> {
    table.iter().find(|(n, _)| *n == name).map(|(_, rgb)| *rgb)
}

/// Edge color for a shape: the fill with alpha raised halfway to opaque.
pub fn less_transparent_color(color: Rgba) -> Rgba {
    color.with_alpha((1.0 + color.a) / 2.0)
}

/// Where shape colors come from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Palette {
    /// The built-in table, [`DEFAULT_COLORS`].
    #[default]
    Default,
    /// Explicit color strings, one per set.
    Colors(Vec<String>),
    /// A named colormap such as `"viridis"` or `"Set1"`.
    Colormap(String),
}

impl FromStr for Palette {
    type Err = VennError;

    /// `"default"` (or empty) selects the default table, a comma-separated
    /// list selects explicit colors, and any other single word names a colormap.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("default") {
            Ok(Palette::Default)
        } else if s.contains(',') {
            Ok(Palette::Colors(
                s.split(',')
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect(),
            ))
        } else {
            Colormap::by_name(s)?;
            Ok(Palette::Colormap(s.to_string()))
        }
    }
}

/// Generate `n_colors` colors from a colormap name or an explicit list.
///
/// `n_colors` must be within 2..=6 and `alpha` within `[0, 1]`. An explicit
/// list shorter than `n_colors` is a size mismatch; longer lists are cut.
pub fn generate_colors(palette: &Palette, n_colors: usize, alpha: f64) -> Result<Vec<Rgba>> {
    if !(2..=6).contains(&n_colors) {
        return Err(VennError::InvalidColorCount(n_colors));
    }
    if !(0.0..=1.0).contains(&alpha) {
        return Err(VennError::InvalidAlpha(alpha));
    }
    match palette {
        Palette::Default => Ok(DEFAULT_COLORS[..n_colors].to_vec()),
        Palette::Colors(list) => {
            if list.len() < n_colors {
                return Err(VennError::SizeMismatch {
                    what: "palette colors",
                    got: list.len(),
                    expected: n_colors,
                });
            }
            list.iter()
                .take(n_colors)
                .map(|c| parse_color(c, alpha))
                .collect()
        }
        Palette::Colormap(name) => Ok(Colormap::by_name(name)?.sample(n_colors, alpha)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_names() {
        assert_eq!(parse_color("#ff0000", 0.4).unwrap(), Rgba::new(1.0, 0.0, 0.0, 0.4));
        assert_eq!(parse_color("#0f0", 1.0).unwrap().to_rgb8(), (0, 255, 0));
        assert_eq!(parse_color("#0000ff80", 0.2).unwrap().a, 0.2);
        assert_eq!(parse_color("r", 0.5).unwrap().to_rgb8(), (255, 0, 0));
        assert_eq!(parse_color("Tab:Blue", 0.5).unwrap().to_hex(), "#1f77b4");
        assert_eq!(parse_color("C1", 0.5).unwrap().to_hex(), "#ff7f0e");
        assert_eq!(
            parse_color("not-a-color", 0.5),
            Err(VennError::UnknownColor("not-a-color".into()))
        );
        assert!(parse_color("#12345", 0.5).is_err());
    }

    #[test]
    fn edge_alpha_is_raised() {
        let c = less_transparent_color(Rgba::new(0.1, 0.2, 0.3, 0.4));
        assert!((c.a - 0.7).abs() < 1e-12);
        assert_eq!((c.r, c.g, c.b), (0.1, 0.2, 0.3));
    }

    #[test]
    fn color_count_bounds() {
        for n in [0, 1, 7] {
            assert_eq!(
                generate_colors(&Palette::Colormap("viridis".into()), n, 0.4),
                Err(VennError::InvalidColorCount(n))
            );
        }
        assert_eq!(generate_colors(&Palette::Default, 6, 0.4).unwrap().len(), 6);
    }

    #[test]
    fn short_color_list_is_a_size_mismatch() {
        let palette: Palette = "red,blue".parse().unwrap();
        assert_eq!(
            generate_colors(&palette, 3, 0.4),
            Err(VennError::SizeMismatch {
                what: "palette colors",
                got: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn explicit_colors_take_uniform_alpha() {
        let palette = Palette::Colors(vec!["r".into(), "g".into(), "b".into()]);
        let colors = generate_colors(&palette, 2, 0.3).unwrap();
        assert_eq!(colors.len(), 2);
        assert!(colors.iter().all(|c| c.a == 0.3));
    }

    #[test]
    fn palette_from_str() {
        assert_eq!("default".parse::<Palette>().unwrap(), Palette::Default);
        assert_eq!(
            "viridis".parse::<Palette>().unwrap(),
            Palette::Colormap("viridis".into())
        );
        assert!("nonsense".parse::<Palette>().is_err());
    }
}
