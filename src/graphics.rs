use macroquad::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info};

use grid_core::{Grid, GridObject, Vect2};

use crate::config::ViewSettings;
use crate::tile::{Tile, TileKind};

// Function to configure the macroquad window
pub fn window_conf() -> Conf {
    Conf {
        window_title: "Grid System".to_string(),
        window_width: 800,
        window_height: 600,
        high_dpi: true,
        ..
        Default::default()
    }
}

/// Maps world space onto the screen: `focus` lands on `screen_center`, y points up.
#[derive(Debug, Clone, Copy)]
struct View {
    focus: Vect2,
    screen_center: Vec2,
    scale: f32,
}

impl View {
    fn world_to_screen(&self, p: Vect2) -> Vec2 {
        vec2(
            self.screen_center.x + (p.x - self.focus.x) * self.scale,
            self.screen_center.y - (p.y - self.focus.y) * self.scale,
        )
    }

    fn screen_to_world(&self, s: Vec2) -> Vect2 {
        Vect2::new(
            self.focus.x + (s.x - self.screen_center.x) / self.scale,
            self.focus.y - (s.y - self.screen_center.y) / self.scale,
        )
    }
}

fn tile_color(kind: TileKind) -> Color {
    match kind {
        TileKind::Floor => BEIGE,
        TileKind::Wall => DARKGRAY,
        TileKind::Water => SKYBLUE,
    }
}

/// Draws the grid every frame. Left click cycles the tile under the cursor,
/// Escape disposes the grid and returns.
pub async fn run_visualization_loop(mut grid: Grid<Tile>, view_settings: ViewSettings) {
    let changes = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&changes);
    grid.subscribe(move |_, _, _| counter.set(counter.get() + 1));

    let (min_p, max_p) = grid.world_bounds();
    let focus = (min_p + max_p) / 2.0;
    let cell_px = grid.cell_size() * view_settings.pixels_per_unit;

    info!("Visualization loop starting inside graphics module...");

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("Escape pressed, closing visualization.");
            break;
        }

        let view = View {
            focus,
            screen_center: vec2(screen_width() / 2.0, screen_height() / 2.0),
            scale: view_settings.pixels_per_unit,
        };
        let (mx, my) = mouse_position();
        let cursor = view.screen_to_world(vec2(mx, my));

        if is_mouse_button_pressed(MouseButton::Left) {
            if let Some(next) = grid.get_world(cursor).map(Tile::cycled) {
                if let Some(previous) = grid.set_world(cursor, next) {
                    previous.dispose();
                }
            } else {
                debug!(x = cursor.x, y = cursor.y, "Click outside the grid ignored");
            }
        }

        clear_background(LIGHTGRAY);

        for tile in &grid {
            let s = view.world_to_screen(tile.center);
            draw_rectangle(
                s.x - cell_px / 2.0,
                s.y - cell_px / 2.0,
                cell_px - 1.0,
                cell_px - 1.0,
                tile_color(tile.kind),
            );
        }

        let hovered = grid.world_to_grid(cursor);
        if let Some(tile) = grid.get_at(hovered) {
            let s = view.world_to_screen(tile.center);
            draw_rectangle_lines(s.x - cell_px / 2.0, s.y - cell_px / 2.0, cell_px, cell_px, 3.0, RED);
        }

        draw_text(&format!("Cursor: world {} cell {}", cursor, hovered), 10.0, 20.0, 20.0, BLACK);
        draw_text(&format!("Changes: {}", changes.get()), 10.0, 40.0, 20.0, BLACK);

        next_frame().await
    }

    grid.dispose();
}
