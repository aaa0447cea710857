//! Dense coverage masks and the offset-to-mask builder.
//!
//! A [`CoverageMask`] is the bounding-box boolean grid describing which tiles
//! around an object are covered. Masks are always origin-centered with odd
//! dimensions, so the cell at the grid center corresponds to the object's own
//! tile.
mod shapes;

pub use shapes::{DefaultShapes, SprinklerTier, manhattan_circle, square, square_circle};

use std::fmt;

/// Relative tile coordinate, measured from the covering object's own tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Origin-centered boolean grid sized to exactly bound an offset set.
///
/// Width is `2 * max|x| + 1` and height is `2 * max|y| + 1` over the offsets
/// the mask was built from, so both dimensions are always odd. Cells outside
/// the bounding box are implicitly false; [`CoverageMask::contains`] returns
/// `false` for them rather than panicking.
///
/// A mask with no set cells means "no coverage". Callers must treat it as an
/// ordinary empty result, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageMask {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl CoverageMask {
    /// The degenerate 1x1 mask with a single false cell.
    pub fn empty() -> Self {
        Self {
            width: 1,
            height: 1,
            cells: vec![false],
        }
    }

    /// Builds the minimal origin-centered mask containing every offset.
    ///
    /// Duplicate offsets are idempotent. An empty input yields the 1x1
    /// all-false mask. Pure function of its input.
    pub fn from_offsets<I>(offsets: I) -> Self
    where
        I: IntoIterator<Item = Offset>,
    {
        let offsets: Vec<Offset> = offsets.into_iter().collect();

        let mut max_x: i32 = 0;
        let mut max_y: i32 = 0;
        for offset in &offsets {
            max_x = max_x.max(offset.x.abs());
            max_y = max_y.max(offset.y.abs());
        }

        let width = (2 * max_x + 1) as usize;
        let height = (2 * max_y + 1) as usize;
        let mut cells = vec![false; width * height];
        for offset in &offsets {
            let col = (offset.x + max_x) as usize;
            let row = (offset.y + max_y) as usize;
            cells[row * width + col] = true;
        }

        Self {
            width,
            height,
            cells,
        }
    }

    /// Builds a mask from a predicate evaluated over the given radius.
    ///
    /// The predicate receives offset coordinates in `-radius..=radius` on
    /// both axes.
    pub fn from_predicate<F>(radius: u32, mut covered: F) -> Self
    where
        F: FnMut(i32, i32) -> bool,
    {
        let r = radius as i32;
        let width = (2 * r + 1) as usize;
        let mut cells = vec![false; width * width];
        for y in -r..=r {
            for x in -r..=r {
                let col = (x + r) as usize;
                let row = (y + r) as usize;
                cells[row * width + col] = covered(x, y);
            }
        }
        Self {
            width,
            height: width,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if the cell for the given offset is covered.
    ///
    /// Offsets outside the bounding box are implicitly uncovered.
    pub fn contains(&self, offset: Offset) -> bool {
        let half_w = (self.width as i32 - 1) / 2;
        let half_h = (self.height as i32 - 1) / 2;
        let col = offset.x + half_w;
        let row = offset.y + half_h;
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return false;
        }
        self.cells[row as usize * self.width + col as usize]
    }

    /// True iff no cell is covered.
    pub fn is_empty_coverage(&self) -> bool {
        !self.cells.iter().any(|&cell| cell)
    }

    /// Iterates the covered offsets, row by row.
    pub fn offsets(&self) -> impl Iterator<Item = Offset> + '_ {
        let half_w = (self.width as i32 - 1) / 2;
        let half_h = (self.height as i32 - 1) / 2;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell)
            .map(move |(i, _)| {
                let col = (i % self.width) as i32;
                let row = (i / self.width) as i32;
                Offset::new(col - half_w, row - half_h)
            })
    }
}

impl Default for CoverageMask {
    fn default() -> Self {
        Self::empty()
    }
}
