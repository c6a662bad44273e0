//! Greedy merging of filled cells into as few rectangles as the scan order allows.
//!
//! Cells are claimed in row-major order.  From the first unclaimed filled cell, a rectangle grows right along its row
//! until it meets an empty or claimed cell, then grows down one row at a time for as long as the whole span below it
//! is filled and unclaimed.  This is not an optimal cover, but it is deterministic and every filled cell ends up in
//! exactly one rectangle.
use caster_physics::AabbCollider;
use log::*;

use crate::OccupancyGrid;

/// A merged rectangle of cells, in cell units.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CellRect {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl CellRect {
    /// The collider covering exactly these cells.
    pub fn to_collider(&self) -> AabbCollider {
        AabbCollider::new(
            self.col as f64 + self.width as f64 / 2.0,
            self.row as f64 + self.height as f64 / 2.0,
            self.width as f64,
            self.height as f64,
        )
    }
}

/// Cover the filled cells of `grid` with rectangles.
pub fn merge_cells(grid: &OccupancyGrid) -> Vec<CellRect> {
    let (width, height) = (grid.width(), grid.height());
    // Empty cells start out claimed so that nothing grows into them.
    let mut claimed: Vec<bool> = (0..height)
        .flat_map(|row| (0..width).map(move |col| (row, col)))
        .map(|(row, col)| !grid.is_filled(row, col))
        .collect();
    let index = |row: usize, col: usize| row * width + col;

    let mut rects = vec![];
    let mut cursor = 0;
    while let Some(start) = claimed[cursor..].iter().position(|c| !*c) {
        let start = cursor + start;
        let (row, col) = (start / width, start % width);

        let mut col_end = col;
        while col_end < width && !claimed[index(row, col_end)] {
            claimed[index(row, col_end)] = true;
            col_end += 1;
        }

        let mut row_end = row + 1;
        while row_end < height && (col..col_end).all(|c| !claimed[index(row_end, c)]) {
            for c in col..col_end {
                claimed[index(row_end, c)] = true;
            }
            row_end += 1;
        }

        rects.push(CellRect {
            row,
            col,
            width: col_end - col,
            height: row_end - row,
        });
        cursor = start;
    }

    rects
}

/// Build the colliders for a grid.
pub fn merge_colliders(grid: &OccupancyGrid) -> Vec<AabbCollider> {
    let rects = merge_cells(grid);
    info!(
        "Merged {} filled cells into {} colliders",
        grid.filled_count(),
        rects.len()
    );
    for r in rects.iter() {
        debug!("{:?}", r);
    }
    rects.iter().map(CellRect::to_collider).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn default_arena_is_four_walls() {
        let colliders = merge_colliders(&OccupancyGrid::default_arena());
        assert_eq!(
            colliders,
            vec![
                AabbCollider::new(8.0, 0.5, 16.0, 1.0),
                AabbCollider::new(0.5, 8.5, 1.0, 15.0),
                AabbCollider::new(15.5, 8.5, 1.0, 15.0),
                AabbCollider::new(8.0, 15.5, 14.0, 1.0),
            ]
        );
    }

    #[test]
    fn grows_right_then_down() {
        let grid = OccupancyGrid::new(vec![
            vec![1, 1, 0, 1],
            vec![1, 1, 0, 1],
            vec![1, 1, 1, 1],
        ]);
        assert_eq!(
            merge_cells(&grid),
            vec![
                CellRect {
                    row: 0,
                    col: 0,
                    width: 2,
                    height: 3,
                },
                CellRect {
                    row: 0,
                    col: 3,
                    width: 1,
                    height: 3,
                },
                CellRect {
                    row: 2,
                    col: 2,
                    width: 1,
                    height: 1,
                },
            ]
        );
    }

    #[test]
    fn a_partial_row_below_stops_growth() {
        let grid = OccupancyGrid::new(vec![vec![1, 1, 1], vec![1, 0, 1]]);
        assert_eq!(merge_cells(&grid).len(), 3);
    }

    #[test]
    fn nothing_filled() {
        assert!(merge_colliders(&OccupancyGrid::new(vec![vec![0; 4]; 4])).is_empty());
        assert!(merge_colliders(&OccupancyGrid::new(vec![vec![]])).is_empty());
    }
}
