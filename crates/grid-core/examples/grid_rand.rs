use grid_core::{Grid, GridInfo, GridObject, Vect2};
use rand::Rng;
use tracing_subscriber::EnvFilter;

/// A crate that may or may not be sitting in a cell.
#[derive(Debug)]
struct Crate {
    weight: u32,
}

impl GridObject for Crate {
    fn dispose(self) {
        tracing::debug!(weight = self.weight, "Crate removed");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .init();

    let mut rng = rand::rng();
    let info = GridInfo::new(12, 8, 0.5, Vect2::new(-3.0, -2.0))?;

    // Roughly a third of the cells start with a crate
    let mut grid: Grid<Option<Crate>> = Grid::new(info, |_, _, _| {
        rng.random_bool(0.3).then(|| Crate { weight: rng.random_range(1..50) })
    });

    grid.subscribe(|x, y, cell: &Option<Crate>| match cell {
        Some(c) => println!("({}, {}) now holds a crate of {}", x, y, c.weight),
        None => println!("({}, {}) cleared", x, y),
    });

    // Drop crates at random world positions; some land outside the grid and are ignored
    let (min_p, max_p) = grid.world_bounds();
    for _ in 0..10 {
        let p = Vect2::new(
            rng.random_range(min_p.x - 1.0..max_p.x + 1.0),
            rng.random_range(min_p.y - 1.0..max_p.y + 1.0),
        );
        let weight = rng.random_range(1..50);
        match grid.set_world(p, Some(Crate { weight })) {
            Some(previous) => previous.dispose(),
            None => println!("{} is outside the grid, crate of {} discarded", p, weight),
        }
    }

    let mut total = 0;
    grid.for_each(|cell| total += cell.as_ref().map_or(0, |c| c.weight));
    println!("Total weight on the grid: {}", total);

    grid.dispose();
    Ok(())
}
