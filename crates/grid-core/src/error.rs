//! This module defines the error types used by the `grid-core` crate.

#![warn(missing_docs)]

/// Error type for grid configuration.
///
/// Out-of-range coordinates are never reported through this type; reads
/// return `None` and writes are dropped. These variants cover configuration
/// that cannot produce a usable grid at all.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Error for an invalid cell size.
    /// This variant is returned when the cell size is not a positive, finite number.
    InvalidCellSize(&'static str),
    /// Error for invalid grid dimensions.
    /// This variant is returned when the row or column count is zero or too large.
    InvalidDimensions(&'static str),
    /// Error for an invalid origin position.
    /// This variant is returned when the origin has a NaN or infinite component.
    InvalidOrigin(&'static str),
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::InvalidCellSize(msg) => write!(f, "Invalid cell size: {}", msg),
            GridError::InvalidDimensions(msg) => write!(f, "Invalid grid dimensions: {}", msg),
            GridError::InvalidOrigin(msg) => write!(f, "Invalid origin position: {}", msg),
        }
    }
}

impl core::error::Error for GridError {}

/// Error returned by [`Grid::try_new`](crate::Grid::try_new) when the cell
/// factory fails.
///
/// Every cell created before the failure has already been disposed by the
/// time this error reaches the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct CellFactoryError<E> {
    /// Row index of the failing cell.
    pub x: i32,
    /// Column index of the failing cell.
    pub y: i32,
    /// The factory's error.
    pub source: E,
}

impl<E> CellFactoryError<E> {
    /// Discards the coordinates and returns the factory's error.
    pub fn into_source(self) -> E {
        self.source
    }
}

impl<E: core::fmt::Display> core::fmt::Display for CellFactoryError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Cell factory failed at ({}, {}): {}", self.x, self.y, self.source)
    }
}

impl<E> core::error::Error for CellFactoryError<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.source)
    }
}
