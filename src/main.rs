use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use compact_str::{CompactString, ToCompactString};

use squarify::layout::{compute_layout, LayoutConfig, Rect};
use squarify::render::{render_svg, Anchor, Color, Decorations, SvgOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One line per rectangle: index, weight, x, y, dx, dy
    Table,
    /// JSON array of {"x", "y", "dx", "dy"} objects
    Json,
    /// Standalone SVG document
    Svg,
}

/// Compute a squarified treemap layout for a list of weights.
#[derive(Debug, Parser)]
#[command(name = "squarify", version, about)]
struct Cli {
    /// Weights, ideally sorted largest first
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    weights: Vec<f64>,

    /// Origin x of the region
    #[arg(long, default_value_t = 0.0)]
    x: f64,

    /// Origin y of the region
    #[arg(long, default_value_t = 0.0)]
    y: f64,

    /// Region width
    #[arg(long, default_value_t = 100.0)]
    width: f64,

    /// Region height
    #[arg(long, default_value_t = 100.0)]
    height: f64,

    /// Leave a one-unit gap around every rectangle
    #[arg(long)]
    pad: bool,

    /// Weights are already areas summing to width * height
    #[arg(long)]
    no_normalize: bool,

    /// Skip input validation (zero/negative weights give degenerate rectangles)
    #[arg(long)]
    no_validate: bool,

    /// Sort weights largest first before laying them out
    #[arg(long)]
    sort: bool,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Comma-separated text labels (svg)
    #[arg(long, value_delimiter = ',')]
    labels: Vec<CompactString>,

    /// Draw each weight as a value label (svg)
    #[arg(long)]
    values: bool,

    /// Comma-separated fill colors as #rrggbb (svg)
    #[arg(long, value_delimiter = ',')]
    colors: Vec<Color>,

    /// Label anchor: "center" or "<top|center|bottom> <left|center|right>" (svg)
    #[arg(long, default_value = "center")]
    anchor: Anchor,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            pad: self.pad,
            normalize: !self.no_normalize,
            validate: !self.no_validate,
        }
    }

    fn region(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("squarify=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let rendered = run(&cli)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote {:?} output to {}", cli.format, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("failed to write to stdout")?;
        }
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    if !cli.labels.is_empty() && cli.labels.len() != cli.weights.len() {
        bail!(
            "got {} labels for {} weights",
            cli.labels.len(),
            cli.weights.len()
        );
    }

    let mut items: Vec<(f64, Option<CompactString>)> = cli
        .weights
        .iter()
        .enumerate()
        .map(|(i, &w)| (w, cli.labels.get(i).cloned()))
        .collect();
    if cli.sort {
        items.sort_by(|a, b| b.0.total_cmp(&a.0));
    }
    let weights: Vec<f64> = items.iter().map(|(w, _)| *w).collect();

    let region = cli.region();
    let rects = compute_layout(&weights, region, &cli.layout_config())
        .context("layout failed")?;

    tracing::info!(
        "Laid out {} rectangles in {}x{}",
        rects.len(),
        region.dx,
        region.dy
    );

    let out = match cli.format {
        Format::Table => format_table(&weights, &rects),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&rects).context("failed to encode JSON")?;
            json.push('\n');
            json
        }
        Format::Svg => {
            let decorations = Decorations {
                colors: cli.colors.clone(),
                labels: items.into_iter().filter_map(|(_, l)| l).collect(),
                values: if cli.values {
                    weights.iter().map(|w| w.to_compact_string()).collect()
                } else {
                    Vec::new()
                },
            };
            let options = SvgOptions {
                anchor: cli.anchor,
                ..Default::default()
            };
            render_svg(&rects, &region, &decorations, &options)
        }
    };

    Ok(out)
}

fn format_table(weights: &[f64], rects: &[Rect]) -> String {
    let mut out = format!(
        "{:>5} {:>12} {:>12} {:>12} {:>12} {:>12}\n",
        "#", "weight", "x", "y", "dx", "dy"
    );
    for (i, (w, r)) in weights.iter().zip(rects).enumerate() {
        out.push_str(&format!(
            "{:>5} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4}\n",
            i, w, r.x, r.y, r.dx, r.dy
        ));
    }
    out
}
