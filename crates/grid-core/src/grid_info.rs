#![warn(missing_docs)]

use grid_math::Vect2;
use tracing::debug;

use crate::error::GridError;

/// Configuration of a grid: dimensions, cell size and world origin.
///
/// A `GridInfo` can only be built through [`GridInfo::new`] (or, with the
/// `serde` feature, deserialized through the same validation), so every value
/// in circulation describes a usable grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridInfoFields"))]
pub struct GridInfo {
    /// Number of rows (extent along x)
    rows: usize,
    /// Number of columns (extent along y)
    columns: usize,
    /// Side length of a square cell in world units
    cell_size: f32,
    /// World position of the outer corner of cell (0, 0)
    origin_position: Vect2,
}

impl GridInfo {
    /// Creates a new grid configuration.
    ///
    /// # Arguments
    /// * `rows` - Number of rows, indexed by `x`
    /// * `columns` - Number of columns, indexed by `y`
    /// * `cell_size` - Side length of each cell in world units
    /// * `origin_position` - World position of the corner of cell (0, 0)
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - The configuration or an error if parameters are invalid
    pub fn new(
        rows: usize,
        columns: usize,
        cell_size: f32,
        origin_position: Vect2,
    ) -> Result<Self, GridError> {
        if cell_size <= 0.0 || !cell_size.is_finite() {
            return Err(GridError::InvalidCellSize("Cell size must be positive and finite"));
        }
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidDimensions("Rows and columns must be non-zero"));
        }
        // Coordinates are i32, every row and column has to be addressable
        if i32::try_from(rows).is_err() || i32::try_from(columns).is_err() {
            return Err(GridError::InvalidDimensions("Rows and columns must fit in an i32 coordinate"));
        }
        if rows.checked_mul(columns).is_none() {
            return Err(GridError::InvalidDimensions("Grid dimensions too large, would cause overflow"));
        }
        if !origin_position.is_finite() {
            return Err(GridError::InvalidOrigin("Origin must be finite"));
        }

        Ok(GridInfo {
            rows,
            columns,
            cell_size,
            origin_position,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Side length of a cell in world units.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// World position of the corner of cell (0, 0).
    pub fn origin_position(&self) -> Vect2 {
        self.origin_position
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Releases the configuration.
    ///
    /// `GridInfo` owns no resources; this consumes the value and records the
    /// teardown so grid disposal can be traced end to end.
    pub fn dispose(self) {
        debug!(rows = self.rows, columns = self.columns, "Grid configuration disposed");
    }
}

impl core::fmt::Display for GridInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}x{} cells of {:.3}, origin {}",
            self.rows, self.columns, self.cell_size, self.origin_position
        )
    }
}

/// Unvalidated field set used to deserialize a [`GridInfo`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridInfoFields {
    rows: usize,
    columns: usize,
    cell_size: f32,
    #[serde(default)]
    origin_position: Vect2,
}

#[cfg(feature = "serde")]
impl TryFrom<GridInfoFields> for GridInfo {
    type Error = GridError;

    fn try_from(fields: GridInfoFields) -> Result<Self, Self::Error> {
        GridInfo::new(fields.rows, fields.columns, fields.cell_size, fields.origin_position)
    }
}
