//! A generic 2D grid container placed in world space.
//!
//! [`Grid`] owns a fixed rows×columns array of cell objects, populated once by
//! a factory, and maps between integer cell coordinates and world positions.
//! Writes through coordinates notify subscribed listeners; out-of-range
//! coordinates are silently ignored.

pub mod error;
pub mod grid;
pub mod grid_info;
pub mod grid_object;
pub mod layout;
mod listeners;

pub use error::{CellFactoryError, GridError};
pub use grid::Grid;
pub use grid_info::GridInfo;
pub use grid_object::GridObject;
pub use layout::GridLayout;
pub use listeners::ListenerId;

pub use grid_math::{Vect2, Vect2Int};
