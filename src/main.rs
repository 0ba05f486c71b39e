mod config;
mod graphics;
mod tile;

use graphics::window_conf;
use grid_core::Grid;
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

use crate::tile::Tile;

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Grid System started. Loading configuration...");

    let settings = match config::load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Cannot start without a valid grid configuration: {}", e);
            return;
        }
    };

    let mut grid = Grid::new(settings.grid, Tile::create);
    grid.subscribe(|x, y, tile: &Tile| info!(x, y, kind = ?tile.kind, "Tile changed"));
    info!(rows = grid.rows(), columns = grid.columns(), "Grid populated");

    graphics::run_visualization_loop(grid, settings.view).await;
    info!("Grid System finished.");
}
