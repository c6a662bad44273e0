use std::path::Path;

use caster_physics::Coordinate2D;
use log::*;

use crate::Result;

const DEFAULT_ARENA_SIDE: usize = 16;

/// A rectangular grid of cells, each either empty (0) or filled (anything else).
///
/// Rows run along y and columns along x, so the cell at `(row, col)` covers the unit square whose corner nearest the
/// origin is `(col, row)`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Default for OccupancyGrid {
    fn default() -> Self {
        OccupancyGrid::default_arena()
    }
}

impl OccupancyGrid {
    /// Build a grid from rows of cells.
    ///
    /// Short rows are padded with empty cells to the length of the longest.  No rows at all gives the default arena.
    pub fn new(rows: Vec<Vec<u8>>) -> OccupancyGrid {
        if rows.is_empty() {
            debug!("Empty grid; using the default arena");
            return OccupancyGrid::default_arena();
        }

        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for mut row in rows {
            if row.len() < width {
                trace!("Padding row of {} cells to {}", row.len(), width);
                row.resize(width, 0);
            }
            cells.extend(row);
        }

        OccupancyGrid {
            width,
            height,
            cells,
        }
    }

    /// A 16x16 room: every border cell filled, the inside empty.
    pub fn default_arena() -> OccupancyGrid {
        let side = DEFAULT_ARENA_SIDE;
        let mut cells = vec![0; side * side];
        for row in 0..side {
            for col in 0..side {
                if row == 0 || col == 0 || row == side - 1 || col == side - 1 {
                    cells[row * side + col] = 1;
                }
            }
        }

        OccupancyGrid {
            width: side,
            height: side,
            cells,
        }
    }

    /// Parse a grid from a JSON array of rows, e.g. `[[1, 1], [1, 0]]`.
    pub fn from_json_str(input: &str) -> Result<OccupancyGrid> {
        let rows: Vec<Vec<u8>> = serde_json::from_str(input)?;
        Ok(OccupancyGrid::new(rows))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<OccupancyGrid> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let grid = OccupancyGrid::from_json_str(&contents)?;
        info!(
            "Loaded {}x{} grid from {}",
            grid.width(),
            grid.height(),
            path.display()
        );
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at `(row, col)`, if it is in the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Cells outside the grid are empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.get(row, col).map(|c| c != 0).unwrap_or(false)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != 0).count()
    }

    /// Iterate over the rows of this grid, top row first.  There are always `height` of them, even when they are
    /// empty.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let width = self.width;
        (0..self.height).map(move |row| &self.cells[row * width..(row + 1) * width])
    }

    /// Where an actor starts: the middle of the grid, rounded down to whole cells.
    pub fn spawn_point(&self) -> Coordinate2D {
        Coordinate2D::new((self.width / 2) as f64, (self.height / 2) as f64)
    }
}
