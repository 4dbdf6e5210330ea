// THEORY:
// The painter turns four quadrant averages into a two-tone block.
//
// 1.  **Orientation decision**: the top quadrant is compared with its two
//     neighbours. If it is further from the right quadrant than from the left
//     one, the block is cut along the anti-diagonal (top+right against
//     bottom+left); otherwise along the main diagonal (top+left against
//     bottom+right). Exact ties go to the main diagonal.
// 2.  **Half-plane test**: a 2-way test on the recentred offset decides which
//     of the two blended colors a pixel receives. It is not the 4-way
//     quadrant test, so the seam pixels skipped while scanning are painted.

use crate::core_modules::block::QuadrantAverages;
use crate::core_modules::color::color::Color;
use crate::core_modules::quadrant::Centered;
use crate::core_modules::smart_color::smart_color::{blend, closeness};

/// How the split diagonal is picked for each block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Per block, by color closeness.
    #[default]
    Adaptive,
    /// Always top-left / bottom-right halves.
    MainDiagonal,
    /// Always top-right / bottom-left halves.
    AntiDiagonal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Top-right color against bottom-left color.
    AntiDiagonal,
    /// Top-left color against bottom-right color.
    MainDiagonal,
}

/// The two colors of a block and the diagonal separating them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagonalSplit {
    pub orientation: Orientation,
    /// Painted on the half containing the top quadrant.
    pub first: Color,
    /// Painted on the opposite half.
    pub second: Color,
}

impl Orientation {
    pub fn choose(averages: &QuadrantAverages, mode: SplitMode) -> Self {
        match mode {
            SplitMode::MainDiagonal => Orientation::MainDiagonal,
            SplitMode::AntiDiagonal => Orientation::AntiDiagonal,
            SplitMode::Adaptive => {
                if closeness(averages.top, averages.right) > closeness(averages.top, averages.left) {
                    Orientation::AntiDiagonal
                } else {
                    Orientation::MainDiagonal
                }
            }
        }
    }
}

impl DiagonalSplit {
    pub fn new(averages: &QuadrantAverages, mode: SplitMode) -> Self {
        let orientation = Orientation::choose(averages, mode);
        let (first, second) = match orientation {
            Orientation::AntiDiagonal => (
                blend(averages.top, averages.right),
                blend(averages.bottom, averages.left),
            ),
            Orientation::MainDiagonal => (
                blend(averages.top, averages.left),
                blend(averages.bottom, averages.right),
            ),
        };
        Self {
            orientation,
            first,
            second,
        }
    }

    /// Color for a recentred in-block offset.
    pub fn color_at(&self, x_origin: Centered, y_origin: Centered) -> Color {
        let first_half = match self.orientation {
            Orientation::AntiDiagonal => y_origin > x_origin,
            Orientation::MainDiagonal => y_origin >= -x_origin,
        };
        if first_half { self.first } else { self.second }
    }
}
