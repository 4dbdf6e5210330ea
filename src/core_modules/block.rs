// THEORY:
// A `Block` is one square tile of the grid. Processing it is a closed pipeline:
// scan every pixel into its quadrant accumulator, average the quadrants, pick a
// diagonal split and repaint. All reads finish before the first write and no
// pixel outside the tile is touched, so blocks never observe one another.

use crate::core_modules::accumulator::accumulator::ColorAccumulator;
use crate::core_modules::canvas::PixelCanvas;
use crate::core_modules::color::color::Color;
use crate::core_modules::painter::{DiagonalSplit, SplitMode};
use crate::core_modules::quadrant::{Quadrant, recenter};
use tracing::{trace, warn};

/// Average color of each quadrant of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantAverages {
    pub top: Color,
    pub right: Color,
    pub bottom: Color,
    pub left: Color,
}

/// Grid position and side length of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub col: u32,
    pub row: u32,
    pub size: u32,
}

impl Block {
    pub fn new(col: u32, row: u32, size: u32) -> Self {
        Self { col, row, size }
    }

    /// Top-left pixel of the block in image space.
    pub fn origin(&self) -> (u32, u32) {
        (self.col * self.size, self.row * self.size)
    }

    /// Sums every classified pixel of the block into its quadrant.
    pub fn accumulate<C: PixelCanvas + ?Sized>(&self, canvas: &C) -> [ColorAccumulator; 4] {
        let (origin_x, origin_y) = self.origin();
        let mut quadrants = [ColorAccumulator::new(); 4];

        for y in 0..self.size {
            for x in 0..self.size {
                if let Some(quadrant) = Quadrant::classify(x, y, self.size) {
                    quadrants[quadrant.index()].add(canvas.get_color(origin_x + x, origin_y + y));
                }
            }
        }

        quadrants
    }

    pub fn averages<C: PixelCanvas + ?Sized>(&self, canvas: &C) -> QuadrantAverages {
        let quadrants = self.accumulate(canvas);
        let average = |quadrant: Quadrant| {
            quadrants[quadrant.index()].average().unwrap_or_else(|| {
                warn!(col = self.col, row = self.row, ?quadrant, "empty quadrant, using black");
                Color::BLACK
            })
        };

        QuadrantAverages {
            top: average(Quadrant::Top),
            right: average(Quadrant::Right),
            bottom: average(Quadrant::Bottom),
            left: average(Quadrant::Left),
        }
    }

    pub fn paint<C: PixelCanvas + ?Sized>(&self, canvas: &mut C, split: &DiagonalSplit) {
        let (origin_x, origin_y) = self.origin();

        for y in 0..self.size {
            let y_origin = recenter(y, self.size);
            for x in 0..self.size {
                let x_origin = recenter(x, self.size);
                canvas.set_color(origin_x + x, origin_y + y, split.color_at(x_origin, y_origin));
            }
        }
    }

    /// Scans, decides and repaints this block in place.
    pub fn process<C: PixelCanvas + ?Sized>(&self, canvas: &mut C, mode: SplitMode) -> DiagonalSplit {
        let averages = self.averages(canvas);
        let split = DiagonalSplit::new(&averages, mode);
        trace!(col = self.col, row = self.row, orientation = ?split.orientation, "block split");
        self.paint(canvas, &split);
        split
    }
}
