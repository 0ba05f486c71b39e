#![warn(missing_docs)]

/// Capability required of every value stored in a [`Grid`](crate::Grid).
///
/// The grid calls [`dispose`](GridObject::dispose) exactly once on every cell
/// it still holds when the grid itself is disposed, in row-major order. Cells
/// replaced through `set` are handed back to the caller instead.
pub trait GridObject {
    /// Releases whatever the cell holds. The default does nothing.
    fn dispose(self)
    where
        Self: Sized,
    {
    }
}

impl<T: GridObject> GridObject for Box<T> {
    fn dispose(self) {
        (*self).dispose()
    }
}

impl<T: GridObject> GridObject for Option<T> {
    fn dispose(self) {
        if let Some(cell) = self {
            cell.dispose();
        }
    }
}

impl GridObject for () {}
impl GridObject for bool {}
impl GridObject for u8 {}
impl GridObject for i32 {}
impl GridObject for u32 {}
impl GridObject for f32 {}
impl GridObject for char {}
impl GridObject for grid_math::Vect2 {}
impl GridObject for grid_math::Vect2Int {}

impl<A: GridObject, B: GridObject> GridObject for (A, B) {
    fn dispose(self) {
        self.0.dispose();
        self.1.dispose();
    }
}
