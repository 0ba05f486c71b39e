use grid_core::{Grid, GridInfo, GridObject, Vect2, Vect2Int};

/// Terrain cost of a cell, printed as a number.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Terrain(u8);

impl GridObject for Terrain {}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn main() -> anyhow::Result<()> {
    // A 20x20 grid with 0.1m cells, origin at (-1.0, -1.0) so that the world origin sits in the middle
    let info = GridInfo::new(20, 20, 0.1, Vect2::new(-1.0, -1.0))?;
    let mut grid = Grid::new(info, |_, _, _| Terrain(0));

    let changes = std::rc::Rc::new(std::cell::Cell::new(0));
    let counter = std::rc::Rc::clone(&changes);
    grid.subscribe(move |_, _, _| counter.set(counter.get() + 1));

    // Wall block in the center
    for x in 8..12 {
        for y in 8..12 {
            grid.set(x, y, Terrain(254));
        }
    }
    println!("{} cells changed", changes.get());

    // Demonstrate world coordinate conversion
    let world_pos = Vect2::new(0.0, 0.0);
    let coord = grid.world_to_grid(world_pos);
    println!("World position {} maps to grid position {}", world_pos, coord);
    println!("Grid position {} maps back to world position {}", coord, grid.grid_to_world_at(coord));

    let (min_p, max_p) = grid.world_bounds();
    println!("\nGrid bounds:");
    println!("Min: {}", min_p);
    println!("Max: {}", max_p);

    println!("\n{}", grid);

    // Positions near the edge fall outside without any error
    for p in [Vect2::new(0.0, 0.0), Vect2::new(-0.95, -0.95), Vect2::new(1.5, 0.0)] {
        match grid.get_world(p) {
            Some(terrain) => println!("Cost at world position {}: {}", p, terrain),
            None => println!("World position {} is outside the grid", p),
        }
    }

    assert_eq!(grid.get_at(Vect2Int::new(5, 5)), Some(&Terrain(0)));
    grid.dispose();
    Ok(())
}
