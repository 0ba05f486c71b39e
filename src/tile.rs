use grid_core::{GridLayout, GridObject, Vect2};
use tracing::trace;

/// What occupies a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Floor,
    Wall,
    Water,
}

impl TileKind {
    /// The kind a click turns this one into.
    pub fn next(self) -> Self {
        match self {
            TileKind::Floor => TileKind::Wall,
            TileKind::Wall => TileKind::Water,
            TileKind::Water => TileKind::Floor,
        }
    }
}

/// A grid cell for the demo map. Remembers where it sits in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub kind: TileKind,
    pub center: Vect2,
}

impl Tile {
    /// Factory passed to `Grid::new`: border tiles are walls, the rest floor.
    pub fn create(layout: &GridLayout, x: i32, y: i32) -> Self {
        let last_x = layout.rows() as i32 - 1;
        let last_y = layout.columns() as i32 - 1;
        let kind = if x == 0 || y == 0 || x == last_x || y == last_y {
            TileKind::Wall
        } else {
            TileKind::Floor
        };
        Tile {
            kind,
            center: layout.grid_to_world(x, y),
        }
    }

    pub fn cycled(&self) -> Self {
        Tile {
            kind: self.kind.next(),
            center: self.center,
        }
    }
}

impl GridObject for Tile {
    fn dispose(self) {
        trace!(kind = ?self.kind, center = %self.center, "Tile disposed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_core::{Grid, GridInfo};

    #[test]
    fn test_create_marks_border_as_wall() {
        let grid = Grid::new(GridInfo::new(4, 3, 1.0, Vect2::ZERO).unwrap(), Tile::create);
        assert_eq!(grid.get(0, 1).unwrap().kind, TileKind::Wall);
        assert_eq!(grid.get(3, 1).unwrap().kind, TileKind::Wall);
        assert_eq!(grid.get(1, 0).unwrap().kind, TileKind::Wall);
        assert_eq!(grid.get(2, 2).unwrap().kind, TileKind::Wall);
        assert_eq!(grid.get(1, 1).unwrap().kind, TileKind::Floor);
        assert_eq!(grid.get(2, 1).unwrap().kind, TileKind::Floor);
    }

    #[test]
    fn test_tile_knows_its_center() {
        let grid = Grid::new(GridInfo::new(4, 3, 0.5, Vect2::new(-1.0, -1.0)).unwrap(), Tile::create);
        for (coord, tile) in grid.iter_coords() {
            assert_eq!(tile.center, grid.grid_to_world_at(coord));
            assert_eq!(grid.world_to_grid(tile.center), coord);
        }
    }

    #[test]
    fn test_cycle() {
        let tile = Tile { kind: TileKind::Floor, center: Vect2::ZERO };
        assert_eq!(tile.cycled().kind, TileKind::Wall);
        assert_eq!(tile.cycled().cycled().kind, TileKind::Water);
        assert_eq!(tile.cycled().cycled().cycled(), tile);
    }
}
