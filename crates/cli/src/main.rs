//! HeatGrid CLI - render normalized data series as heat map images

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use heatgrid_colormap::{draw, presets, DrawOptions, ImageSurface};
use heatgrid_core::GridGeometry;

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "heatgrid")]
#[command(author, version, about = "Render heat map grids from normalized data", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a data series as a heat map PNG
    Render {
        /// Input file: a JSON array of numbers in [0, 1), row-major
        input: PathBuf,
        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,
        /// Number of grid rows
        #[arg(long)]
        rows: usize,
        /// Number of grid columns
        #[arg(long)]
        cols: usize,
        /// Cell width in pixels
        #[arg(long, default_value_t = 10)]
        cell_width: usize,
        /// Cell height in pixels
        #[arg(long, default_value_t = 10)]
        cell_height: usize,
        /// Preset gradient name (see `heatgrid list`)
        #[arg(short, long, default_value = "heat")]
        gradient: String,
    },
    /// Render a preset gradient as a horizontal color bar PNG
    Palette {
        /// Preset gradient name (see `heatgrid list`)
        name: String,
        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,
        /// Bar width in pixels
        #[arg(long, default_value_t = 500)]
        width: usize,
        /// Bar height in pixels
        #[arg(long, default_value_t = 40)]
        height: usize,
    },
    /// List preset gradient names
    List,
}

// ─── Commands ───────────────────────────────────────────────────────────

fn cmd_render(
    input: &PathBuf,
    output: &PathBuf,
    rows: usize,
    cols: usize,
    cell_width: usize,
    cell_height: usize,
    gradient: &str,
) -> Result<()> {
    let Some(table) = presets::by_name(gradient) else {
        bail!(
            "unknown gradient '{}', expected one of: {}",
            gradient,
            presets::NAMES.join(", ")
        );
    };

    let text = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let data: Vec<f64> = serde_json::from_str(&text)
        .with_context(|| format!("parsing {} as a JSON number array", input.display()))?;
    info!(samples = data.len(), rows, cols, "loaded data series");

    let geometry = GridGeometry::new(rows, cols, cell_width, cell_height);
    let options = DrawOptions::with_gradient(geometry, table);

    let start = Instant::now();
    let mut surface = ImageSurface::new();
    draw(&mut surface, &data, &options)
        .with_context(|| format!("rendering {}x{} grid", rows, cols))?;
    info!(elapsed = ?start.elapsed(), width = geometry.width(), height = geometry.height(), "rendered");

    surface
        .save(output)
        .with_context(|| format!("writing {}", output.display()))?;
    println!("wrote {}", output.display());
    Ok(())
}

fn cmd_palette(name: &str, output: &PathBuf, width: usize, height: usize) -> Result<()> {
    let Some(table) = presets::by_name(name) else {
        bail!(
            "unknown gradient '{}', expected one of: {}",
            name,
            presets::NAMES.join(", ")
        );
    };

    // One column per pixel, sampled left (low) to right (high).
    let mut img = image::RgbaImage::new(width as u32, height as u32);
    for x in 0..width {
        let t = x as f64 / width as f64;
        let pixel = image::Rgba(table.sample(t).to_rgba());
        for y in 0..height {
            img.put_pixel(x as u32, y as u32, pixel);
        }
    }

    img.save(output)
        .with_context(|| format!("writing {}", output.display()))?;
    println!("wrote {}", output.display());
    Ok(())
}

fn cmd_list() {
    for name in presets::NAMES {
        if *name == "heat" {
            println!("{name} (default)");
        } else {
            println!("{name}");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting tracing subscriber")?;

    match &cli.command {
        Commands::Render {
            input,
            output,
            rows,
            cols,
            cell_width,
            cell_height,
            gradient,
        } => cmd_render(input, output, *rows, *cols, *cell_width, *cell_height, gradient),
        Commands::Palette {
            name,
            output,
            width,
            height,
        } => cmd_palette(name, output, *width, *height),
        Commands::List => {
            cmd_list();
            Ok(())
        }
    }
}
