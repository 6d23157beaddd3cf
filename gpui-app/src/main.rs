mod actions;
mod app;
mod keybindings;
mod mode;
mod theme;
mod ui;
mod views;

use gpui::*;
use tallysheet_engine::grid::{HEIGHT, WIDTH};

use app::{Spreadsheet, CELL_HEIGHT, CELL_WIDTH, HEADER_WIDTH, STATUS_BAR_HEIGHT};

fn main() {
    Application::new().run(|cx: &mut App| {
        keybindings::register(cx);

        // Fixed-size window: header column + grid, header row + grid + status bar
        let width = HEADER_WIDTH + WIDTH as f32 * CELL_WIDTH + 2.0;
        let height = (HEIGHT as f32 + 1.0) * CELL_HEIGHT + STATUS_BAR_HEIGHT + 2.0;

        let bounds = Bounds {
            origin: Point::new(px(200.0), px(200.0)),
            size: Size {
                width: px(width),
                height: px(height),
            },
        };

        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |window, cx| cx.new(|cx| Spreadsheet::new(window, cx)),
        )
        .unwrap();
    });
}
