use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use image::ImageFormat;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pxl::core_modules::utils::image_helper::image_helper;
use pxl::pipeline::{block_size_for_cols, block_size_for_rows};
use pxl::{DEFAULT_BLOCK_SIZE, ParallelPipeline, PipelineConfig, PxlPipeline, SplitMode};

#[derive(Parser)]
#[command(name = "pxl")]
#[command(about = "Pixelates an image into diagonally split blocks")]
#[command(group(ArgGroup::new("sizing").args(["size", "rows", "cols"])))]
struct Cli {
    /// Side of each square block in pixels
    #[arg(short, long)]
    size: Option<u32>,

    /// Fit this many rows of blocks into the image height
    #[arg(long)]
    rows: Option<u32>,

    /// Fit this many columns of blocks into the image width
    #[arg(long)]
    cols: Option<u32>,

    /// Use only top-left/bottom-right triangles
    #[arg(long, conflicts_with = "right")]
    left: bool,

    /// Use only top-right/bottom-left triangles
    #[arg(long)]
    right: bool,

    /// Pick the triangle pair whose halves are closest in color (default)
    #[arg(long, conflicts_with_all = ["left", "right"])]
    both: bool,

    /// Process block rows on a worker pool
    #[arg(long)]
    parallel: bool,

    /// Input image (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output image (defaults to stdout, in the input's format)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn split_mode(&self) -> SplitMode {
        if self.left {
            SplitMode::MainDiagonal
        } else if self.right {
            SplitMode::AntiDiagonal
        } else {
            SplitMode::Adaptive
        }
    }

    fn block_size(&self, width: u32, height: u32) -> pxl::error::Result<u32> {
        match (self.size, self.rows, self.cols) {
            (Some(size), _, _) => Ok(size),
            (_, Some(rows), _) => block_size_for_rows(height, rows),
            (_, _, Some(cols)) => block_size_for_cols(width, cols),
            _ => Ok(DEFAULT_BLOCK_SIZE),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout may carry the image, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pxl=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();

    let cli = Cli::parse();

    let bytes = match &cli.input {
        Some(path) => std::fs::read(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("reading stdin")?;
            bytes
        }
    };

    let (image, input_format) = image_helper::decode(&bytes)?;
    let (width, height) = image.dimensions();
    let config = PipelineConfig::default()
        .with_block_size(cli.block_size(width, height)?)
        .with_split_mode(cli.split_mode());
    info!(width, height, block_size = config.block_size, split_mode = ?config.split_mode, "stylizing image");

    let output = if cli.parallel {
        ParallelPipeline::new(config)?.process(image).await?
    } else {
        PxlPipeline::new(config)?.process(image)
    };

    match &cli.output {
        Some(path) => {
            let format = ImageFormat::from_path(path).unwrap_or(input_format);
            let encoded = image_helper::encode(&output, format)?;
            std::fs::write(path, encoded).with_context(|| format!("writing {}", path.display()))?;
        }
        None => {
            let encoded = image_helper::encode(&output, input_format)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&encoded).context("writing stdout")?;
            stdout.flush().context("writing stdout")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pxl").chain(args.iter().copied())).expect("valid arguments")
    }

    #[test]
    fn sizing_flags_pick_the_block_size() {
        assert_eq!(parse(&[]).block_size(200, 100).expect("size"), DEFAULT_BLOCK_SIZE);
        assert_eq!(parse(&["--size", "7"]).block_size(200, 100).expect("size"), 7);
        assert_eq!(parse(&["-s", "9"]).block_size(200, 100).expect("size"), 9);
        assert_eq!(parse(&["--rows", "10"]).block_size(200, 100).expect("size"), 10);
        assert_eq!(parse(&["--cols", "4"]).block_size(200, 100).expect("size"), 50);
    }

    #[test]
    fn zero_rows_is_rejected_when_sizing() {
        assert!(parse(&["--rows", "0"]).block_size(200, 100).is_err());
    }

    #[test]
    fn sizing_flags_are_mutually_exclusive() {
        for args in [
            ["pxl", "--size", "7", "--rows", "3"],
            ["pxl", "--size", "7", "--cols", "3"],
            ["pxl", "--rows", "7", "--cols", "3"],
        ] {
            assert!(Cli::try_parse_from(args).is_err(), "{args:?}");
        }
    }

    #[test]
    fn triangle_flags_pick_the_split_mode() {
        assert_eq!(parse(&[]).split_mode(), SplitMode::Adaptive);
        assert_eq!(parse(&["--both"]).split_mode(), SplitMode::Adaptive);
        assert_eq!(parse(&["--left"]).split_mode(), SplitMode::MainDiagonal);
        assert_eq!(parse(&["--right"]).split_mode(), SplitMode::AntiDiagonal);
    }

    #[test]
    fn triangle_flags_are_mutually_exclusive() {
        for args in [["pxl", "--left", "--right"], ["pxl", "--both", "--left"], ["pxl", "--both", "--right"]] {
            assert!(Cli::try_parse_from(args).is_err(), "{args:?}");
        }
    }
}
