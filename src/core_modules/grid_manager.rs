// THEORY:
// The `GridManager` owns the block geometry of one image and walks it. It is
// not an analyzer itself: it works out how many whole blocks fit, hands each
// one to `Block::process`, and collects the splits that were chosen.
//
// Only whole blocks are processed. When the image is not a multiple of the
// block size, the strips along the right and bottom edges keep their pixels.

use crate::core_modules::block::Block;
use crate::core_modules::canvas::PixelCanvas;
use crate::core_modules::painter::{DiagonalSplit, SplitMode};
use tracing::debug;

/// Block grid for one image size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridManager {
    /// The width of the grid in blocks (image_width / block_size).
    grid_width: u32,
    /// The height of the grid in blocks (image_height / block_size).
    grid_height: u32,
    /// The side of a single block in pixels.
    block_size: u32,
    split_mode: SplitMode,
}

impl GridManager {
    /// Creates a grid for the given image dimension. `block_size` must be non-zero.
    pub fn new(image_width: u32, image_height: u32, block_size: u32, split_mode: SplitMode) -> Self {
        Self {
            grid_width: image_width / block_size,
            grid_height: image_height / block_size,
            block_size,
            split_mode,
        }
    }

    pub fn grid_width(&self) -> u32 {
        self.grid_width
    }

    pub fn grid_height(&self) -> u32 {
        self.grid_height
    }

    pub fn num_blocks(&self) -> usize {
        self.grid_width as usize * self.grid_height as usize
    }

    /// Blocks in row-major order.
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        (0..self.num_blocks()).map(|block_index| {
            let row = (block_index / self.grid_width as usize) as u32;
            let col = (block_index % self.grid_width as usize) as u32;
            Block::new(col, row, self.block_size)
        })
    }

    /// Stylizes every whole block of `canvas` in place and returns the split
    /// chosen for each, in row-major order.
    pub fn process_image<C: PixelCanvas + ?Sized>(&self, canvas: &mut C) -> Vec<DiagonalSplit> {
        debug!(
            cols = self.grid_width,
            rows = self.grid_height,
            block_size = self.block_size,
            "processing block grid"
        );

        let mut splits = Vec::with_capacity(self.num_blocks());
        for block in self.blocks() {
            splits.push(block.process(canvas, self.split_mode));
        }
        splits
    }
}
