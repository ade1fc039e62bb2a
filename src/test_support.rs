//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::screen::ScreenId;
use crate::core::state::App;

/// Creates an App already sitting on `screen`, with no timers involved.
pub fn app_on(screen: ScreenId) -> App {
    let mut app = App::default();
    app.navigation.active_screen = screen;
    app
}

/// Draws once into a `TestBackend` and returns the buffer as one line per row.
pub fn render_to_string(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
