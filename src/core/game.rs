/// Core game interface for the memterm engine
use std::time::Duration;

use crossterm::event::KeyEvent;

/// Main game trait the engine loop drives.
///
/// A game is a passive state machine: the engine polls the terminal,
/// forwards key presses, delivers ticks and asks the game to draw
/// itself. Quit handling (Esc / `q`) belongs to the engine, not here.
pub trait Game {
    /// How often `on_tick` should fire. `None` disables ticking for
    /// games that only react to input.
    fn tick_rate(&self) -> Option<Duration>;

    /// Game heartbeat, with the measured elapsed milliseconds since the
    /// previous tick.
    fn on_tick(&mut self, dt: u32);

    /// A key press from the terminal.
    fn handle_input(&mut self, event: KeyEvent);

    /// Draw the current state into the Ratatui frame.
    fn render(&self, frame: &mut ratatui::Frame);
}
