//! Font discovery for the bitmap backend.
//!
//! `ab_glyph` doesn't discover OS fonts, so a "sans-serif" face is registered
//! once from `GENEVIEW_FONT` or a few well-known system paths. SVG output
//! never needs it.

use anyhow::{Context, bail};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Outcome of the one registration attempt; errors are kept as text so every
/// caller sees the same message.
static REGISTERED: OnceLock<Result<PathBuf, String>> = OnceLock::new();

/// Environment variable naming a TTF/OTF file to use for bitmap text.
pub const FONT_ENV: &str = "GENEVIEW_FONT";

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Font files to try, in order: `GENEVIEW_FONT` first, then the system list.
pub fn font_candidates() -> Vec<PathBuf> {
    std::env::var_os(FONT_ENV)
        .map(PathBuf::from)
        .into_iter()
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from))
        .collect()
}

fn register_file(path: &Path) -> anyhow::Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("cannot read font {}", path.display()))?;
    // Registered fonts must outlive every drawing call.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    plotters::style::register_font("sans-serif", plotters::style::FontStyle::Normal, bytes)
        .map_err(|_| anyhow::anyhow!("font {} could not be parsed", path.display()))
}

/// Register the first readable, parseable font among `candidates`.
///
/// Fails with a message naming `GENEVIEW_FONT` when none of them works.
pub fn register_first_font(candidates: &[PathBuf]) -> anyhow::Result<PathBuf> {
    for path in candidates.iter().filter(|p| p.is_file()) {
        match register_file(path) {
            Ok(()) => {
                debug!("registered font {}", path.display());
                return Ok(path.clone());
            }
            Err(e) => warn!("{e:#}"),
        }
    }
    bail!(
        "no usable font for bitmap text; set {FONT_ENV} to a TTF/OTF file or write .svg instead (tried {} paths)",
        candidates.len()
    )
}

/// Register a sans-serif face for bitmap text. Only the first call does the
/// work; later calls return the cached outcome.
pub fn ensure_fonts_registered() -> anyhow::Result<()> {
    match REGISTERED.get_or_init(|| register_first_font(&font_candidates()).map_err(|e| format!("{e:#}"))) {
        Ok(_) => Ok(()),
        Err(msg) => bail!("{msg}"),
    }
}
