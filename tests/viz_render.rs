use geneview::viz::{self, DEFAULT_SIZE};
use geneview::{Dataset, LegendLoc, Palette, SetCollection, VennOptions};
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use std::fs;
use tempfile::tempdir;

fn gene_sets(n: usize) -> SetCollection<String> {
    let mut sets = SetCollection::new();
    for i in 0..n {
        let genes: Vec<String> = (i * 4..i * 4 + 12).map(|g| format!("GENE{g}")).collect();
        sets.insert(format!("cohort_{i}"), genes).unwrap();
    }
    sets
}

#[test]
fn svg_is_written_for_every_set_count() {
    let dir = tempdir().unwrap();
    for n in 2..=6 {
        let path = dir.path().join(format!("venn{n}.svg"));
        let layout = viz::plot_venn(
            &Dataset::from(gene_sets(n)),
            &path,
            DEFAULT_SIZE.0,
            DEFAULT_SIZE.1,
            &VennOptions::default(),
        )
        .unwrap();
        assert_eq!(layout.petals.len(), (1 << n) - 1);

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg") || svg.contains("<svg"), "n = {n}");
        assert!(svg.contains("cohort_0"), "n = {n}");
        assert!(svg.contains(&format!("cohort_{}", n - 1)), "n = {n}");
    }
}

#[test]
fn boxed_legend_with_colormap_and_percentages() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("boxed.svg");
    let opts = VennOptions {
        fmt: "{percentage:.1f}%".into(),
        palette: Palette::Colormap("plasma".into()),
        alpha: 0.3,
        legend_loc: Some(LegendLoc::LowerRight),
        ..VennOptions::default()
    };
    viz::plot_venn(&Dataset::from(gene_sets(3)), &path, 640, 480, &opts).unwrap();
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<rect"));
    assert!(svg.contains('%'));
    assert!(svg.contains("cohort_2"));
}

#[test]
fn precomputed_labels_are_drawn_verbatim() {
    let names: Vec<String> = vec!["up".into(), "down".into()];
    let ds: Dataset<String> =
        Dataset::precomputed([("10", "only-up"), ("01", "only-down"), ("11", "shared")], names)
            .unwrap();
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (500, 400)).into_drawing_area();
        root.fill(&WHITE).unwrap();
        viz::venn(&root, &ds, &VennOptions::default()).unwrap();
        root.present().unwrap();
    }
    for text in ["only-up", "only-down", "shared", "up", "down"] {
        assert!(buf.contains(text), "missing {text}");
    }
}

#[test]
fn explicit_colors_reach_the_svg() {
    let opts = VennOptions {
        palette: Palette::Colors(vec!["#ff0000".into(), "#0000ff".into()]),
        legend_use_petal_color: true,
        ..VennOptions::default()
    };
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (500, 400)).into_drawing_area();
        viz::venn(&root, &Dataset::from(gene_sets(2)), &opts).unwrap();
        root.present().unwrap();
    }
    let lower = buf.to_ascii_lowercase();
    assert!(lower.contains("#ff0000"));
    assert!(lower.contains("#0000ff"));
}

#[test]
fn palette_errors_stop_before_drawing() {
    let opts = VennOptions {
        palette: Palette::Colors(vec!["red".into()]),
        ..VennOptions::default()
    };
    let dir = tempdir().unwrap();
    let path = dir.path().join("never.svg");
    let err = viz::plot_venn(&Dataset::from(gene_sets(2)), &path, 300, 300, &opts).unwrap_err();
    assert!(format!("{err}").contains("size mismatch"));
}

fn font_available() -> bool {
    viz::util::font_candidates().iter().any(|p| p.is_file())
}

#[test]
fn png_is_written_when_a_font_is_available() {
    if !font_available() {
        eprintln!("skipping: no font file found, set {}", viz::util::FONT_ENV);
        return;
    }
    let dir = tempdir().unwrap();
    let path = dir.path().join("venn3.png");
    let layout =
        viz::plot_venn(&Dataset::from(gene_sets(3)), &path, 640, 480, &VennOptions::default())
            .unwrap();
    assert_eq!(layout.petals.len(), 7);
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"), "not a PNG file");
}
