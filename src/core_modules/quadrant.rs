//! Triangular quadrants of a block.
//!
//! A block is cut by its two diagonals into four triangles. Offsets are first
//! recentred so the block's middle sits near the origin, then two strict
//! inequalities pick the triangle. Pixels lying exactly on a diagonal satisfy
//! neither and belong to no quadrant.

/// Signed offset from the centre of a block.
pub type Centered = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Top,
    Right,
    Bottom,
    Left,
}

impl Quadrant {
    /// Stable index into per-quadrant arrays.
    pub const fn index(self) -> usize {
        match self {
            Quadrant::Top => 0,
            Quadrant::Right => 1,
            Quadrant::Bottom => 2,
            Quadrant::Left => 3,
        }
    }

    /// Classifies an in-block offset, `None` for pixels on either diagonal.
    pub fn classify(x: u32, y: u32, block_size: u32) -> Option<Quadrant> {
        let x_origin = recenter(x, block_size);
        let y_origin = recenter(y, block_size);

        if y_origin > x_origin && y_origin > -x_origin {
            Some(Quadrant::Top)
        } else if y_origin < x_origin && y_origin > -x_origin {
            Some(Quadrant::Right)
        } else if y_origin < x_origin && y_origin < -x_origin {
            Some(Quadrant::Bottom)
        } else if y_origin > x_origin && y_origin < -x_origin {
            Some(Quadrant::Left)
        } else {
            None
        }
    }
}

/// `offset - floor(block_size / 2)`.
///
/// Both operands are unsigned so the halving is a floor division; the
/// subtraction happens in signed space and may go negative.
pub fn recenter(offset: u32, block_size: u32) -> Centered {
    Centered::from(offset) - Centered::from(block_size / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(block_size: u32) -> ([usize; 4], usize) {
        let mut counts = [0; 4];
        let mut unclassified = 0;
        for y in 0..block_size {
            for x in 0..block_size {
                match Quadrant::classify(x, y, block_size) {
                    Some(quadrant) => counts[quadrant.index()] += 1,
                    None => unclassified += 1,
                }
            }
        }
        (counts, unclassified)
    }

    #[test]
    fn recenter_uses_floor_half() {
        assert_eq!(recenter(0, 20), -10);
        assert_eq!(recenter(19, 20), 9);
        assert_eq!(recenter(0, 5), -2);
        assert_eq!(recenter(4, 5), 2);
    }

    #[test]
    fn classifies_points_around_the_centre() {
        // block 20: centre at offset (10, 10)
        assert_eq!(Quadrant::classify(10, 15, 20), Some(Quadrant::Top));
        assert_eq!(Quadrant::classify(15, 10, 20), Some(Quadrant::Right));
        assert_eq!(Quadrant::classify(10, 5, 20), Some(Quadrant::Bottom));
        assert_eq!(Quadrant::classify(5, 10, 20), Some(Quadrant::Left));
    }

    #[test]
    fn diagonal_pixels_are_unclassified() {
        for i in 0..20 {
            assert_eq!(Quadrant::classify(i, i, 20), None, "main diagonal at {i}");
        }
        // anti-diagonal through the centre: x_origin == -y_origin
        assert_eq!(Quadrant::classify(10, 10, 20), None);
        assert_eq!(Quadrant::classify(11, 9, 20), None);
        assert_eq!(Quadrant::classify(19, 1, 20), None);
    }

    #[test]
    fn counts_never_exceed_block_area() {
        for block_size in 1..=33 {
            let (counts, unclassified) = counts(block_size);
            let area = (block_size * block_size) as usize;
            assert_eq!(counts.iter().sum::<usize>() + unclassified, area);
            assert!(unclassified > 0, "block {block_size} has no seam");
        }
    }

    #[test]
    fn every_quadrant_is_populated_from_three_up() {
        for block_size in 3..=64 {
            let (counts, _) = counts(block_size);
            assert!(counts.iter().all(|&count| count > 0), "block {block_size}: {counts:?}");
        }
    }

    #[test]
    fn two_by_two_block_only_fills_left_and_bottom() {
        let (counts, unclassified) = counts(2);
        assert_eq!(counts, [0, 0, 1, 1]);
        assert_eq!(unclassified, 2);
    }
}
