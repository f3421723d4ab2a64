//! Command-line interface for rendering gaskets to PNG files

use crate::io::configuration::{
    default_seed_points, DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_PALETTE, DEFAULT_RESOLUTION,
    DEFAULT_SHARPEN_AMOUNT, DEFAULT_SHARPEN_RADIUS, DEFAULT_WIDTH,
};
use crate::io::error::{invalid_parameter, Result};
use crate::io::image::save_png;
use crate::io::progress::cell_progress;
use crate::render::color::Rgb;
use crate::render::filters::UnsharpMask;
use crate::render::GridRenderer;
use clap::Parser;
use num_complex::Complex64;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "apollonian")]
#[command(author, version, about = "Render an Apollonian gasket to a PNG file")]
/// Command-line arguments for the gasket renderer
pub struct Cli {
    /// Output PNG file path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Resolution in pixels per plane unit
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
    pub resolution: f64,

    /// Plane x coordinate of the image center
    #[arg(long, default_value_t = 0.0)]
    pub center_x: f64,

    /// Plane y coordinate of the image center
    #[arg(long, default_value_t = 0.0)]
    pub center_y: f64,

    /// Recursion size threshold; defaults to one pixel (1/resolution)
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Worker thread count; defaults to available parallelism
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Cell edge length in pixels for tiled rendering
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: usize,

    /// Apply an unsharp mask to the finished image
    #[arg(short, long)]
    pub sharpen: bool,

    /// Unsharp mask blur radius in pixels
    #[arg(long, default_value_t = DEFAULT_SHARPEN_RADIUS)]
    pub sharpen_radius: f64,

    /// Unsharp mask strength
    #[arg(long, default_value_t = DEFAULT_SHARPEN_AMOUNT)]
    pub sharpen_amount: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Effective worker count
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or_else(|| {
            std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
        })
    }

    /// Effective recursion threshold
    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(1.0 / self.resolution)
    }
}

/// Run a full render according to the CLI arguments
///
/// # Errors
///
/// Returns an error on invalid numeric parameters or when the output file
/// cannot be written.
// Allow print for user feedback on render completion
#[allow(clippy::print_stderr)]
pub fn run(cli: &Cli) -> Result<()> {
    if cli.width == 0 || cli.height == 0 {
        return Err(invalid_parameter(
            "width/height",
            &format!("{}x{}", cli.width, cli.height),
            &"image dimensions must be positive",
        ));
    }
    if cli.resolution <= 0.0 || cli.resolution.is_nan() {
        return Err(invalid_parameter(
            "resolution",
            &cli.resolution,
            &"must be a positive number",
        ));
    }
    if cli.cell_size == 0 {
        return Err(invalid_parameter(
            "cell-size",
            &cli.cell_size,
            &"must be positive",
        ));
    }

    // Sharpening consumes a border; render a padded image so the saved
    // output keeps the requested dimensions
    let mask = cli
        .sharpen
        .then(|| UnsharpMask::new(cli.sharpen_radius, cli.sharpen_amount));
    let pad = mask.as_ref().map_or(0, UnsharpMask::padding);

    let grid = GridRenderer {
        width: cli.width + 2 * pad,
        height: cli.height + 2 * pad,
        center: Complex64::new(cli.center_x, cli.center_y),
        resolution: cli.resolution,
        threshold: cli.effective_threshold(),
        palette: DEFAULT_PALETTE.map(Rgb::decode24),
        workers: cli.worker_count(),
        cell_size: cli.cell_size,
    };

    let cell_count = grid.width.div_ceil(grid.cell_size) * grid.height.div_ceil(grid.cell_size);
    let bar = (!cli.quiet).then(|| cell_progress(cell_count as u64));

    let [z0, z1, z2] = default_seed_points();
    let (buffer, circles) = grid.render(z0.into(), z1.into(), z2.into(), bar.as_ref());

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    let mut buffer = buffer;
    if let Some(mask) = &mask {
        buffer = mask.apply(&buffer);
    }
    save_png(&buffer, &cli.output)?;

    if !cli.quiet {
        eprintln!("Circles rendered: {circles}");
        eprintln!("Saved: {}", cli.output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(e) => unreachable!("args should parse: {e}"),
        }
    }

    #[test]
    fn output_path_is_required() {
        let missing = Cli::try_parse_from(["apollonian"]);
        assert!(missing.is_err());
        // clap reports missing required arguments with exit code 2
        if let Err(e) = missing {
            assert_eq!(e.exit_code(), 2);
        }
    }

    #[test]
    fn defaults_apply_without_flags() {
        let cli = parse(&["apollonian", "out.png"]);
        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.height, DEFAULT_HEIGHT);
        assert!((cli.effective_threshold() - 1.0 / DEFAULT_RESOLUTION).abs() < 1e-12);
        assert!(cli.worker_count() >= 1);
        assert!(!cli.sharpen);
    }

    #[test]
    fn explicit_threshold_overrides_resolution() {
        let cli = parse(&["apollonian", "out.png", "-r", "100", "-t", "0.25"]);
        assert!((cli.effective_threshold() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        let cli = parse(&["apollonian", "out.png", "--cell-size", "0"]);
        assert!(run(&cli).is_err());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let cli = parse(&["apollonian", "out.png", "-W", "0"]);
        assert!(run(&cli).is_err());
    }
}
