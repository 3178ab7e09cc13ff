use crate::input::Dataset;
use crate::stats::PetalStat;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use log::debug;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Read a plain-text set file: one element per line.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Repeated elements collapse when the result is inserted into a set.
pub fn read_set_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read set file {}", path.display()))?;
    let elements: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect();
    debug!("read {} elements from {}", elements.len(), path.display());
    Ok(elements)
}

/// Load a JSON document and classify it as raw sets or precomputed labels.
pub fn load_dataset_json<P: AsRef<Path>>(
    path: P,
    names: Option<&[String]>,
) -> Result<Dataset<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    let dataset = Dataset::from_json(&value, names)
        .with_context(|| format!("unsupported dataset in {}", path.display()))?;
    Ok(dataset)
}

/// Keep spreadsheet apps from evaluating text cells as formulas.
fn sanitize_cell(s: &str) -> String {
    if s.starts_with(['=', '+', '-', '@']) {
        format!("'{s}")
    } else {
        s.to_string()
    }
}

/// Save petal statistics as CSV with header.
pub fn save_csv<P: AsRef<Path>>(stats: &[PetalStat], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    wtr.serialize(("logic", "sets", "size", "percentage"))?;
    for s in stats {
        wtr.serialize((s.logic.as_str(), sanitize_cell(&s.sets), s.size, s.percentage))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save petal statistics as a pretty JSON array.
pub fn save_json<P: AsRef<Path>>(stats: &[PetalStat], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    let s = serde_json::to_string_pretty(stats)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn set_file_skips_comments_and_blanks() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("a.txt");
        fs::write(&p, "# genes\nTP53\n\n  BRCA1  \nEGFR\n").unwrap();
        assert_eq!(read_set_file(&p).unwrap(), vec!["TP53", "BRCA1", "EGFR"]);
    }

    #[test]
    fn formula_like_cells_are_quoted() {
        assert_eq!(sanitize_cell("=SUM(A1)"), "'=SUM(A1)");
        assert_eq!(sanitize_cell("-x"), "'-x");
        assert_eq!(sanitize_cell("A&B"), "A&B");
    }

    #[test]
    fn missing_set_file_names_the_path() {
        let err = read_set_file("/definitely/not/here.txt").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.txt"));
    }
}
