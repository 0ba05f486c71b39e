#![warn(missing_docs)]

use grid_math::{Vect2, Vect2Int};
use tracing::{debug, error, trace};

use crate::error::CellFactoryError;
use crate::grid_info::GridInfo;
use crate::grid_object::GridObject;
use crate::layout::GridLayout;
use crate::listeners::{ListenerId, Listeners};

/// A fixed-size 2D grid of cell objects placed in world space.
///
/// Cells are indexed `[x][y]` with `x` in `0..rows` and `y` in `0..columns`.
/// Out-of-range coordinates are not errors: reads return `None` and writes
/// are dropped without notifying anyone.
pub struct Grid<T: GridObject> {
    layout: GridLayout,
    /// Row-major storage, `x * columns + y`
    cells: Vec<T>,
    listeners: Listeners<T>,
}

impl<T: GridObject> Grid<T> {
    /// Creates a grid and populates every cell with `create_grid_object`.
    ///
    /// The factory is called once per cell in row-major order (`x` outer,
    /// `y` inner) and receives the grid's layout along with the coordinates,
    /// so a cell can locate itself in world space.
    ///
    /// The factory gets the grid's geometry ([`GridLayout`]: dimensions, cell
    /// size, origin and the coordinate transforms), not the grid itself. The
    /// cells do not exist yet while the factory runs. A cell that needs a
    /// back-reference can keep a copy of the layout.
    ///
    /// No change listeners exist yet, so population is never observed as a
    /// change.
    ///
    /// # Arguments
    /// * `info` - Grid configuration
    /// * `create_grid_object` - Factory `(layout, x, y) -> cell`
    pub fn new<F>(info: GridInfo, mut create_grid_object: F) -> Self
    where
        F: FnMut(&GridLayout, i32, i32) -> T,
    {
        match Self::try_new(info, |layout, x, y| {
            Ok::<T, core::convert::Infallible>(create_grid_object(layout, x, y))
        }) {
            Ok(grid) => grid,
            Err(e) => match e.source {},
        }
    }

    /// Creates a grid with a fallible cell factory.
    ///
    /// If the factory fails, construction is aborted: the cells built so far
    /// are disposed in the order they were created and the error is returned
    /// together with the coordinates of the failing cell.
    ///
    /// # Returns
    /// * `Result<Self, CellFactoryError<E>>` - The populated grid or the factory's first error
    pub fn try_new<F, E>(info: GridInfo, mut create_grid_object: F) -> Result<Self, CellFactoryError<E>>
    where
        F: FnMut(&GridLayout, i32, i32) -> Result<T, E>,
    {
        let layout = GridLayout::new(info);
        let mut cells = Vec::with_capacity(info.cell_count());

        // Dimensions were checked to fit in i32 by GridInfo
        for x in 0..info.rows() as i32 {
            for y in 0..info.columns() as i32 {
                match create_grid_object(&layout, x, y) {
                    Ok(cell) => cells.push(cell),
                    Err(source) => {
                        error!(x, y, created = cells.len(), "Cell factory failed, disposing created cells");
                        cells.into_iter().for_each(GridObject::dispose);
                        return Err(CellFactoryError { x, y, source });
                    }
                }
            }
        }

        debug!(rows = info.rows(), columns = info.columns(), cell_size = info.cell_size(), "Grid created");
        Ok(Grid {
            layout,
            cells,
            listeners: Listeners::new(),
        })
    }

    /// Number of rows. Same as [`rows`](Self::rows).
    pub fn width(&self) -> usize {
        self.layout.rows()
    }

    /// Number of columns. Same as [`columns`](Self::columns).
    pub fn height(&self) -> usize {
        self.layout.columns()
    }

    /// Number of rows (valid `x` range is `0..rows`).
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    /// Number of columns (valid `y` range is `0..columns`).
    pub fn columns(&self) -> usize {
        self.layout.columns()
    }

    /// Side length of a cell in world units.
    pub fn cell_size(&self) -> f32 {
        self.layout.cell_size()
    }

    /// World position of the corner of cell (0, 0).
    pub fn origin_position(&self) -> Vect2 {
        self.layout.origin_position()
    }

    /// The configuration the grid was built from.
    pub fn info(&self) -> &GridInfo {
        self.layout.info()
    }

    /// The grid's geometry, detached from its cells.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// World position of the center of cell `(x, y)`. See [`GridLayout::grid_to_world`].
    pub fn grid_to_world(&self, x: i32, y: i32) -> Vect2 {
        self.layout.grid_to_world(x, y)
    }

    /// World position of the center of the cell at `coordinate`.
    pub fn grid_to_world_at(&self, coordinate: Vect2Int) -> Vect2 {
        self.layout.grid_to_world_at(coordinate)
    }

    /// Coordinates of the cell containing `world_position`. See [`GridLayout::world_to_grid`].
    pub fn world_to_grid(&self, world_position: Vect2) -> Vect2Int {
        self.layout.world_to_grid(world_position)
    }

    /// Minimum and maximum corners of the grid in world space.
    pub fn world_bounds(&self) -> (Vect2, Vect2) {
        self.layout.world_bounds()
    }

    /// Returns true if `world_position` falls inside one of the grid's cells.
    pub fn contains_world(&self, world_position: Vect2) -> bool {
        self.layout.contains_world(world_position)
    }

    /// Gets the cell at `(x, y)`, or `None` if the coordinates are out of range.
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.layout.index(x, y).map(|i| &self.cells[i])
    }

    /// Gets the cell at `coordinate`, or `None` if it is out of range.
    pub fn get_at(&self, coordinate: Vect2Int) -> Option<&T> {
        self.get(coordinate.x, coordinate.y)
    }

    /// Gets the cell containing `world_position`, or `None` if the position is outside the grid.
    pub fn get_world(&self, world_position: Vect2) -> Option<&T> {
        self.get_at(self.world_to_grid(world_position))
    }

    /// Replaces the cell at `(x, y)` and notifies every change listener.
    ///
    /// Listeners see the new value after it is stored, in subscription order.
    /// Out-of-range coordinates leave the grid untouched, notify no one and
    /// drop `value`.
    ///
    /// # Returns
    /// * `Option<T>` - The replaced cell, or `None` if the write was dropped
    pub fn set(&mut self, x: i32, y: i32, value: T) -> Option<T> {
        let Some(index) = self.layout.index(x, y) else {
            trace!(x, y, "Dropped write outside the grid");
            return None;
        };
        let previous = core::mem::replace(&mut self.cells[index], value);
        self.listeners.notify(x, y, &self.cells[index]);
        Some(previous)
    }

    /// [`set`](Self::set) taking a coordinate vector.
    pub fn set_at(&mut self, coordinate: Vect2Int, value: T) -> Option<T> {
        self.set(coordinate.x, coordinate.y, value)
    }

    /// [`set`](Self::set) on the cell containing `world_position`.
    pub fn set_world(&mut self, world_position: Vect2, value: T) -> Option<T> {
        let coordinate = self.world_to_grid(world_position);
        self.set_at(coordinate, value)
    }

    /// Calls `visitor` on every cell in row-major order (`x` outer, `y` inner).
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visitor);
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterates over every cell with its coordinates, in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = (Vect2Int, &T)> + '_ {
        let columns = self.columns();
        self.cells.iter().enumerate().map(move |(i, cell)| {
            // Both quotient and remainder are below the i32-checked dimensions
            (Vect2Int::new((i / columns) as i32, (i % columns) as i32), cell)
        })
    }

    /// Registers a listener called with `(x, y, new_value)` after every
    /// successful coordinate write.
    ///
    /// The grid is mutably borrowed while listeners run, so a listener cannot
    /// reach back into the grid that notified it.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(i32, i32, &T) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Removes a listener. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Number of subscribed listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Disposes every cell in row-major order, then the configuration.
    ///
    /// Consumes the grid; nothing can use it afterwards.
    pub fn dispose(mut self) {
        debug!(cells = self.cells.len(), "Disposing grid");
        self.listeners.clear();
        self.cells.drain(..).for_each(GridObject::dispose);
        self.layout.info().dispose();
    }
}

impl<'a, T: GridObject> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: GridObject + core::fmt::Debug> core::fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Grid")
            .field("layout", &self.layout)
            .field("cells", &self.cells)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T: GridObject + core::fmt::Display> core::fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Grid ({}x{}, cell size: {:.3})", self.rows(), self.columns(), self.cell_size())?;
        writeln!(f, "Origin: {}", self.origin_position())?;

        // One line per x, cells along y
        for row in self.cells.chunks(self.columns()) {
            for cell in row {
                write!(f, "{:>3} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
