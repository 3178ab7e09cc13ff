use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::{Builder, Env};
use geneview::petal::DEFAULT_FMT;
use geneview::viz::{DEFAULT_ALPHA, DEFAULT_FONTSIZE, DEFAULT_SIZE};
use geneview::{Dataset, LegendLoc, Palette, SetCollection, VennOptions};
use geneview::{stats, storage, viz};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "geneview",
    version,
    about = "Draw 2- to 6-set Venn diagrams and summarize their intersections"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a Venn diagram (and optionally save petal stats or print them).
    Venn(VennArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct VennArgs {
    /// Named set file, one element per line (repeat 2..6 times).
    #[arg(long = "set", value_name = "NAME=FILE", conflicts_with = "json")]
    sets: Vec<String>,
    /// JSON file: {"A": [...], ...} raw sets or {"01": "...", ...} petal labels.
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
    /// Set names separated by comma (required for JSON petal labels; reorders JSON sets).
    #[arg(long, requires = "json")]
    names: Option<String>,
    /// Petal label template, e.g. "{size}" or "{percentage:.1f}%".
    #[arg(long, default_value = DEFAULT_FMT)]
    fmt: String,
    /// "default", a colormap name (viridis, Set1, ...) or a comma-separated color list.
    #[arg(long, default_value = "default")]
    palette: String,
    /// Shape transparency for colormaps and explicit colors (0..1).
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    alpha: f64,
    /// Petal text size in pixels; set names use two more.
    #[arg(long, default_value_t = DEFAULT_FONTSIZE)]
    fontsize: u32,
    /// Draw a boxed legend at this location (e.g. "upper right") instead of names by the shapes.
    #[arg(long)]
    legend_loc: Option<String>,
    /// Color set names like their shapes.
    #[arg(long, default_value_t = false)]
    legend_use_petal_color: bool,
    /// Create a diagram at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the plot (default 900).
    #[arg(long, default_value_t = DEFAULT_SIZE.0)]
    width: u32,
    /// Height of the plot (default 700).
    #[arg(long, default_value_t = DEFAULT_SIZE.1)]
    height: u32,
    /// Save petal statistics to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Print one line per petal to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn parse_set_arg(s: &str) -> Result<(String, PathBuf)> {
    let (name, file) = s
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("invalid --set '{s}', expected NAME=FILE"))?;
    let name = name.trim();
    anyhow::ensure!(!name.is_empty(), "invalid --set '{s}': empty set name");
    Ok((name.to_string(), PathBuf::from(file.trim())))
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Venn(args) => cmd_venn(args),
    }
}

fn load_dataset(args: &VennArgs) -> Result<Dataset<String>> {
    if let Some(path) = args.json.as_ref() {
        let names = args.names.as_deref().map(parse_list);
        return storage::load_dataset_json(path, names.as_deref());
    }
    anyhow::ensure!(
        !args.sets.is_empty(),
        "no input: give --set NAME=FILE (2 to 6 times) or --json FILE"
    );
    let mut sets = SetCollection::new();
    for spec in &args.sets {
        let (name, file) = parse_set_arg(spec)?;
        let elements = storage::read_set_file(&file)?;
        sets.insert(name, elements)?;
    }
    Ok(Dataset::from(sets))
}

fn venn_options(args: &VennArgs) -> Result<VennOptions> {
    let palette: Palette = args.palette.parse().context("invalid --palette")?;
    let legend_loc = args
        .legend_loc
        .as_deref()
        .map(str::parse::<LegendLoc>)
        .transpose()
        .context("invalid --legend-loc")?;
    Ok(VennOptions {
        fmt: args.fmt.clone(),
        palette,
        alpha: args.alpha,
        fontsize: args.fontsize,
        legend_use_petal_color: args.legend_use_petal_color,
        legend_loc,
    })
}

fn cmd_venn(args: VennArgs) -> Result<()> {
    let dataset = load_dataset(&args)?;
    let opts = venn_options(&args)?;
    info!(
        "loaded {} sets: {}",
        dataset.names().len(),
        dataset.names().join(", ")
    );

    let summary = match &dataset {
        Dataset::RawSets(sets) if args.out.is_some() || args.stats => {
            Some(stats::petal_summary(sets)?)
        }
        _ => None,
    };

    if let Some(path) = args.out.as_ref() {
        let summary = summary
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("--out needs raw sets, not precomputed petal labels"))?;
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(summary, path)?,
            "json" => storage::save_json(summary, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        info!("saved {} petals to {}", summary.len(), path.display());
    }

    if let Some(plot_path) = args.plot.as_ref() {
        viz::plot_venn(&dataset, plot_path, args.width, args.height, &opts)?;
    }

    if args.stats {
        match summary {
            Some(rows) => {
                for s in rows {
                    println!(
                        "{}  {:<24} size={} percentage={:.2}",
                        s.logic, s.sets, s.size, s.percentage
                    );
                }
            }
            None => {
                for (code, label) in dataset.petal_labels(&opts.fmt)?.iter() {
                    println!("{code}  {label}");
                }
            }
        }
    }

    Ok(())
}
