//! geneview
//!
//! A small Rust library for drawing 2- to 6-set Venn diagrams of gene lists
//! (or any other sets). Pairs with the `geneview` CLI.
//!
//! ### Features
//! - Petal regions and labels for every one of the `2^n - 1` intersections
//! - Label templates such as `{size}`, `{percentage:.1f}%`, `{logic}`
//! - Raw sets or precomputed petal labels, from Rust values or JSON
//! - Default palette, explicit colors, or a sampled colormap
//! - SVG/PNG output through plotters, on a caller-provided drawing area
//! - Per-petal statistics exported as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use geneview::{Dataset, SetCollection, VennOptions};
//!
//! let sets = SetCollection::new()
//!     .with_set("A", ["TP53", "BRCA1", "EGFR"])?
//!     .with_set("B", ["EGFR", "KRAS"])?
//!     .with_set("C", ["KRAS", "TP53", "MYC"])?;
//! let stats = geneview::stats::petal_summary(&sets)?;
//! geneview::storage::save_csv(&stats, "petals.csv")?;
//!
//! let opts = VennOptions { fmt: "{size} ({percentage:.1f}%)".into(), ..Default::default() };
//! geneview::viz::plot_venn(&Dataset::from(sets), "venn.svg", 900, 700, &opts)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod input;
pub mod models;
pub mod petal;
pub mod stats;
pub mod storage;
pub mod style;
pub mod template;
pub mod viz;
pub mod viz_plotters_adapter;

pub use error::VennError;
pub use input::Dataset;
pub use models::{LogicCode, NamedSet, PetalLabels, SetCollection, SetCount};
pub use petal::generate_petal_labels;
pub use style::{Palette, Rgba, generate_colors};
pub use viz::{LegendLoc, VennLayout, VennOptions, layout, venn};
