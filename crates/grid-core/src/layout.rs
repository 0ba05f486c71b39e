#![warn(missing_docs)]

use grid_math::{Vect2, Vect2Int};

use crate::grid_info::GridInfo;

/// The geometry of a grid: its dimensions and the transforms between cell
/// coordinates and world positions.
///
/// A layout holds no cells. It is `Copy`, so a cell object may keep one as a
/// non-owning view of the grid it lives in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    info: GridInfo,
    /// Half a cell, added to corner positions to land on the cell center
    offset: f32,
}

impl GridLayout {
    /// Creates the layout described by `info`.
    pub fn new(info: GridInfo) -> Self {
        GridLayout {
            info,
            offset: info.cell_size() / 2.0,
        }
    }

    /// The configuration this layout was built from.
    pub fn info(&self) -> &GridInfo {
        &self.info
    }

    /// Number of rows (valid `x` range is `0..rows`).
    pub fn rows(&self) -> usize {
        self.info.rows()
    }

    /// Number of columns (valid `y` range is `0..columns`).
    pub fn columns(&self) -> usize {
        self.info.columns()
    }

    /// Side length of a cell in world units.
    pub fn cell_size(&self) -> f32 {
        self.info.cell_size()
    }

    /// World position of the corner of cell (0, 0).
    pub fn origin_position(&self) -> Vect2 {
        self.info.origin_position()
    }

    /// Returns true if `(x, y)` addresses a cell of this grid.
    pub(crate) fn in_bounds(&self, x: i32, y: i32) -> bool {
        // Negative values fail the conversion
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) => x < self.rows() && y < self.columns(),
            _ => false,
        }
    }

    /// Storage index of an in-bounds coordinate; `x` outer, `y` inner.
    pub(crate) fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(x as usize * self.columns() + y as usize)
        } else {
            None
        }
    }

    /// Converts cell coordinates to the world position of the cell center.
    ///
    /// Coordinates are not bounds checked; the result for an out-of-range
    /// cell is where that cell would be if the grid extended that far.
    ///
    /// # Arguments
    /// * `x` - Row index
    /// * `y` - Column index
    pub fn grid_to_world(&self, x: i32, y: i32) -> Vect2 {
        let cell_size = self.cell_size();
        let origin = self.origin_position();
        Vect2::new(
            x as f32 * cell_size + self.offset + origin.x,
            y as f32 * cell_size + self.offset + origin.y,
        )
    }

    /// [`grid_to_world`](Self::grid_to_world) taking a coordinate vector.
    pub fn grid_to_world_at(&self, coordinate: Vect2Int) -> Vect2 {
        self.grid_to_world(coordinate.x, coordinate.y)
    }

    /// Converts a world position to the coordinates of the cell containing it.
    ///
    /// Uses floor, so positions left of or below the origin map to negative
    /// coordinates. A position exactly on a cell boundary belongs to the cell
    /// with the higher index. The result is not bounds checked; a position
    /// with a NaN or infinite component maps to `(i32::MIN, i32::MIN)`, which
    /// is outside every grid.
    ///
    /// # Arguments
    /// * `world_position` - Point in world space
    pub fn world_to_grid(&self, world_position: Vect2) -> Vect2Int {
        if !world_position.is_finite() {
            return Vect2Int::new(i32::MIN, i32::MIN);
        }
        ((world_position - self.origin_position()) / self.cell_size()).floor_to_int()
    }

    /// Returns true if `world_position` falls inside one of the grid's cells.
    pub fn contains_world(&self, world_position: Vect2) -> bool {
        let coordinate = self.world_to_grid(world_position);
        self.in_bounds(coordinate.x, coordinate.y)
    }

    /// Gets the world coordinates of the grid's bounds.
    ///
    /// # Returns
    /// * `(Vect2, Vect2)` - The minimum and maximum corners of the grid's extent
    pub fn world_bounds(&self) -> (Vect2, Vect2) {
        let min_p = self.origin_position();
        let max_p = Vect2::new(
            min_p.x + self.rows() as f32 * self.cell_size(),
            min_p.y + self.columns() as f32 * self.cell_size(),
        );
        (min_p, max_p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f32 = 1e-5;

    fn layout(rows: usize, columns: usize, cell_size: f32, origin: Vect2) -> GridLayout {
        GridLayout::new(GridInfo::new(rows, columns, cell_size, origin).unwrap())
    }

    #[test]
    fn test_grid_to_world_centers() {
        let l = layout(3, 2, 1.0, Vect2::ZERO);
        assert_eq!(l.grid_to_world(0, 0), Vect2::new(0.5, 0.5));
        assert_eq!(l.grid_to_world(1, 1), Vect2::new(1.5, 1.5));
        assert_eq!(l.grid_to_world_at(Vect2Int::new(2, 1)), Vect2::new(2.5, 1.5));
    }

    #[test]
    fn test_world_to_grid() {
        let l = layout(3, 2, 1.0, Vect2::ZERO);
        assert_eq!(l.world_to_grid(Vect2::new(1.5, 1.5)), Vect2Int::new(1, 1));
        assert_eq!(l.world_to_grid(Vect2::new(0.0, 0.0)), Vect2Int::new(0, 0));
        // Boundary belongs to the higher cell
        assert_eq!(l.world_to_grid(Vect2::new(1.0, 2.0)), Vect2Int::new(1, 2));
        // Floor, not truncation
        assert_eq!(l.world_to_grid(Vect2::new(-0.5, -0.01)), Vect2Int::new(-1, -1));
    }

    #[test]
    fn test_non_finite_world_position_is_outside() {
        let l = layout(3, 2, 1.0, Vect2::ZERO);
        let outside = Vect2Int::new(i32::MIN, i32::MIN);
        for p in [
            Vect2::new(f32::NAN, 0.5),
            Vect2::new(0.5, f32::NAN),
            Vect2::new(f32::NAN, f32::NAN),
            Vect2::new(f32::INFINITY, 0.5),
            Vect2::new(0.5, f32::NEG_INFINITY),
        ] {
            assert_eq!(l.world_to_grid(p), outside);
            assert!(!l.contains_world(p));
        }
    }

    #[test]
    fn test_coordinate_conversion_with_offset_origin() {
        let origin = Vect2::new(-0.5, -0.5);
        let l = layout(10, 10, 0.1, origin);

        // World (0.0, 0.0) should map to grid (5, 5)
        assert_eq!(l.world_to_grid(Vect2::new(0.0, 0.0)), Vect2Int::new(5, 5));

        // Cell (5,5) center is (-0.5 + 5.5 * 0.1, -0.5 + 5.5 * 0.1) = (0.05, 0.05)
        let center = l.grid_to_world(5, 5);
        assert!((center.x - 0.05).abs() < EPSILON);
        assert!((center.y - 0.05).abs() < EPSILON);

        // Origin is the corner of cell (0,0)
        assert_eq!(l.world_to_grid(origin), Vect2Int::new(0, 0));
        let center0 = l.grid_to_world(0, 0);
        assert!((center0.x - (-0.45)).abs() < EPSILON);
        assert!((center0.y - (-0.45)).abs() < EPSILON);
    }

    #[test]
    fn test_round_trip_at_centers() {
        let l = layout(7, 5, 0.3, Vect2::new(-1.2, 4.7));
        for x in 0..7 {
            for y in 0..5 {
                assert_eq!(l.world_to_grid(l.grid_to_world(x, y)), Vect2Int::new(x, y));
            }
        }
    }

    #[test]
    fn test_in_bounds() {
        let l = layout(3, 2, 1.0, Vect2::ZERO);
        assert!(l.in_bounds(0, 0));
        assert!(l.in_bounds(2, 1));
        assert!(!l.in_bounds(3, 0));
        assert!(!l.in_bounds(0, 2));
        assert!(!l.in_bounds(-1, 0));
        assert!(!l.in_bounds(0, -1));
        assert!(!l.in_bounds(i32::MIN, i32::MAX));
    }

    #[test]
    fn test_index_is_row_major() {
        let l = layout(3, 2, 1.0, Vect2::ZERO);
        assert_eq!(l.index(0, 0), Some(0));
        assert_eq!(l.index(0, 1), Some(1));
        assert_eq!(l.index(1, 0), Some(2));
        assert_eq!(l.index(2, 1), Some(5));
        assert_eq!(l.index(5, 5), None);
    }

    #[test]
    fn test_world_bounds_and_contains() {
        let l = layout(3, 2, 0.5, Vect2::new(1.0, -1.0));
        let (min_p, max_p) = l.world_bounds();
        assert_eq!(min_p, Vect2::new(1.0, -1.0));
        assert_eq!(max_p, Vect2::new(2.5, 0.0));

        assert!(l.contains_world(Vect2::new(1.0, -1.0)));
        assert!(l.contains_world(Vect2::new(2.4, -0.1)));
        // The max corner is outside
        assert!(!l.contains_world(max_p));
        assert!(!l.contains_world(Vect2::new(0.99, -0.5)));
    }
}
