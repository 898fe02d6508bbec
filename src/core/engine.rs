use crate::core::game::Game;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| self.game.render(f))?;

            // INPUT: poll only until the next tick deadline, so the loop
            // stays responsive without busy-waiting. Games without ticks
            // get a small idle timeout instead of a tight loop.
            let tick_rate = self.game.tick_rate();
            let idle = tick_rate.unwrap_or(Duration::from_millis(16));
            let timeout = idle.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match key.code {
                            KeyCode::Esc | KeyCode::Char('q') => break,
                            _ => self.game.handle_input(key),
                        }
                    }
                }
            }

            // TICK: game heartbeat with measured elapsed millis.
            if let Some(rate) = tick_rate {
                if last_tick.elapsed() >= rate {
                    let dt = last_tick.elapsed().as_millis() as u32;
                    last_tick = Instant::now();
                    self.game.on_tick(dt);
                }
            } else {
                last_tick = Instant::now();
            }
        }

        Ok(())
    }
}
