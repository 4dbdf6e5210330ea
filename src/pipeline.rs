// THEORY:
// The `pipeline` module is the top-level API of the filter. It bundles the
// configuration, validates it once up front, and runs the block grid over an
// image. Callers either hand over a decoded `RgbaImage` or a raw encoded byte
// stream; in the latter case the output is written back in the input's format.

use crate::core_modules::canvas::PixelCanvas;
use crate::core_modules::grid_manager::GridManager;
use crate::core_modules::utils::image_helper::image_helper;
use crate::error::{PxlError, Result};
use image::RgbaImage;
use tracing::debug;

// Re-export key data structures for the public API.
pub use crate::core_modules::color::color::Color;
pub use crate::core_modules::painter::{DiagonalSplit, Orientation, SplitMode};

pub const DEFAULT_BLOCK_SIZE: u32 = 20;
pub const MIN_BLOCK_SIZE: u32 = 2;

/// Configuration for the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Side of each square block in pixels.
    pub block_size: u32,
    pub split_mode: SplitMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            split_mode: SplitMode::default(),
        }
    }
}

impl PipelineConfig {
    pub fn with_block_size(mut self, block_size: u32) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_split_mode(mut self, split_mode: SplitMode) -> Self {
        self.split_mode = split_mode;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.block_size < MIN_BLOCK_SIZE {
            return Err(PxlError::invalid_config(format!(
                "block size {} is smaller than {}",
                self.block_size, MIN_BLOCK_SIZE
            )));
        }
        Ok(())
    }
}

/// Largest square block that fits `rows` blocks into `height` pixels.
pub fn block_size_for_rows(height: u32, rows: u32) -> Result<u32> {
    if rows == 0 {
        return Err(PxlError::invalid_config("row count must be positive"));
    }
    Ok(height / rows)
}

/// Largest square block that fits `cols` blocks into `width` pixels.
pub fn block_size_for_cols(width: u32, cols: u32) -> Result<u32> {
    if cols == 0 {
        return Err(PxlError::invalid_config("column count must be positive"));
    }
    Ok(width / cols)
}

/// Sequential filter over a whole image.
#[derive(Debug, Clone)]
pub struct PxlPipeline {
    config: PipelineConfig,
}

impl PxlPipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Stylizes `canvas` in place, returning the split chosen for every block.
    pub fn apply<C: PixelCanvas + ?Sized>(&self, canvas: &mut C) -> Vec<DiagonalSplit> {
        let grid = GridManager::new(
            canvas.width(),
            canvas.height(),
            self.config.block_size,
            self.config.split_mode,
        );
        grid.process_image(canvas)
    }

    pub fn process(&self, mut image: RgbaImage) -> RgbaImage {
        self.apply(&mut image);
        image
    }

    /// Decodes, stylizes and re-encodes in the input's own format.
    pub fn process_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let (image, format) = image_helper::decode(bytes)?;
        debug!(
            width = image.width(),
            height = image.height(),
            ?format,
            "decoded input image"
        );
        image_helper::encode(&self.process(image), format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use pretty_assertions::assert_eq;

    fn patterned(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 7 % 256) as u8, (y * 11 % 256) as u8, ((x ^ y) % 256) as u8, 255])
        })
    }

    #[test]
    fn default_config_uses_twenty_pixel_blocks() {
        let config = PipelineConfig::default();
        assert_eq!(config.block_size, 20);
        assert_eq!(config.split_mode, SplitMode::Adaptive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_blocks_smaller_than_two() {
        for block_size in [0, 1] {
            let config = PipelineConfig::default().with_block_size(block_size);
            assert!(matches!(PxlPipeline::new(config), Err(PxlError::InvalidConfig { .. })));
        }
        assert!(PxlPipeline::new(PipelineConfig::default().with_block_size(2)).is_ok());
    }

    #[test]
    fn derives_block_size_from_rows_and_cols() {
        assert_eq!(block_size_for_rows(480, 20).ok(), Some(24));
        assert_eq!(block_size_for_cols(650, 20).ok(), Some(32));
        assert!(matches!(block_size_for_rows(480, 0), Err(PxlError::InvalidConfig { .. })));
        assert!(matches!(block_size_for_cols(480, 0), Err(PxlError::InvalidConfig { .. })));
    }

    #[test]
    fn derived_size_too_small_fails_validation() {
        let block_size = block_size_for_rows(10, 20).expect("rows are positive");
        let config = PipelineConfig::default().with_block_size(block_size);
        assert!(config.validate().is_err());
    }

    #[test]
    fn output_dimensions_match_input() {
        let pipeline = PxlPipeline::new(PipelineConfig::default()).expect("valid config");
        for (width, height) in [(10, 10), (20, 20), (45, 33), (101, 7)] {
            let output = pipeline.process(patterned(width, height));
            assert_eq!(output.dimensions(), (width, height));
        }
    }

    #[test]
    fn small_png_round_trips_byte_identical_pixels() {
        let pipeline = PxlPipeline::new(PipelineConfig::default()).expect("valid config");
        let input = patterned(10, 10);
        let bytes = image_helper::encode(&input, ImageFormat::Png).expect("encode");

        let output = pipeline.process_bytes(&bytes).expect("process");
        let (decoded, format) = image_helper::decode(&output).expect("decode");

        assert_eq!(format, ImageFormat::Png);
        assert_eq!(decoded, input);
    }

    #[test]
    fn process_bytes_rejects_garbage() {
        let pipeline = PxlPipeline::new(PipelineConfig::default()).expect("valid config");
        assert!(matches!(pipeline.process_bytes(&[0, 1, 2, 3]), Err(PxlError::Decode(_))));
    }

    #[test]
    fn apply_reports_one_split_per_block() {
        let pipeline = PxlPipeline::new(PipelineConfig::default().with_block_size(8)).expect("valid config");
        let mut image = patterned(33, 17);
        let splits = pipeline.apply(&mut image);
        assert_eq!(splits.len(), 4 * 2);
    }
}
