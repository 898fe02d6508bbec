use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::core::game::Game;
use super::renderer;
use super::sequence::Direction;
use super::turn::{Turn, TurnEngine};

/// How long a player keypress lights its pad, in ms.
const PLAYER_FLASH_MS: u32 = 150;

/// Result of the last evaluated round, kept around for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Correct,
    Wrong,
}

/// The memory game as the engine loop sees it.
///
/// Wraps the [`TurnEngine`] state machine with everything timing- and
/// input-shaped: the show/gap alternation of the system playback (so two
/// identical moves in a row read as separate blinks), the elapsed-ms
/// gate between moves, and the arrow-key-to-direction mapping.
pub struct MemoryGame {
    engine: TurnEngine,
    tick_rate: Duration,
    /// Inter-move display delay: a pad stays lit this long, then stays
    /// dark this long before the next one.
    move_time: u32,
    elapsed: u32,
    /// Pad currently lit by system playback.
    lit: Option<Direction>,
    /// Pad lit by a player keypress, with remaining ms.
    flash: Option<(Direction, u32)>,
    outcome: Option<RoundOutcome>,
}

impl MemoryGame {
    pub fn new(fps: u32, move_time: Duration, seed: Option<u64>) -> Self {
        let engine = match seed {
            Some(seed) => TurnEngine::with_seed(seed),
            None => TurnEngine::new(),
        };
        Self {
            engine,
            tick_rate: Duration::from_millis(1000 / u64::from(fps.max(1))),
            move_time: move_time.as_millis() as u32,
            elapsed: 0,
            lit: None,
            flash: None,
            outcome: None,
        }
    }

    pub fn turn_engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// Completed rounds, shown as the score (the original counted the
    /// same way: current level minus one).
    pub fn score(&self) -> u32 {
        self.engine.level() - 1
    }

    pub fn turn(&self) -> Turn {
        self.engine.turn()
    }

    pub fn lit(&self) -> Option<Direction> {
        self.lit
    }

    pub fn flash(&self) -> Option<Direction> {
        self.flash.map(|(dir, _)| dir)
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Moves the player has entered so far this round.
    pub fn progress(&self) -> (usize, usize) {
        (
            self.engine.player_moves().len(),
            self.engine.system_moves().len(),
        )
    }
}

impl Game for MemoryGame {
    fn tick_rate(&self) -> Option<Duration> {
        Some(self.tick_rate)
    }

    fn on_tick(&mut self, dt: u32) {
        if let Some((_, remaining)) = &mut self.flash {
            *remaining = remaining.saturating_sub(dt);
            if *remaining == 0 {
                self.flash = None;
            }
        }

        if self.engine.turn() != Turn::System {
            return;
        }

        self.elapsed += dt;
        if self.elapsed < self.move_time {
            return;
        }
        self.elapsed = 0;

        match self.lit.take() {
            // A pad was showing: go dark for one gap.
            Some(_) => {}
            // Gap over: light the next move, or hand over to the player
            // once the sequence is exhausted.
            None => self.lit = self.engine.advance_playback(),
        }
    }

    fn handle_input(&mut self, event: KeyEvent) {
        // The system turn ignores input, like the original draining the
        // event queue during playback.
        if self.engine.turn() != Turn::Player {
            return;
        }

        let dir = match event.code {
            KeyCode::Up => Direction::Up,
            KeyCode::Right => Direction::Right,
            KeyCode::Down => Direction::Down,
            KeyCode::Left => Direction::Left,
            _ => return,
        };

        self.engine.record_move(dir);
        self.flash = Some((dir, PLAYER_FLASH_MS));

        if self.engine.round_complete() {
            let correct = self.engine.check_solution();
            self.outcome = Some(if correct {
                RoundOutcome::Correct
            } else {
                RoundOutcome::Wrong
            });
            debug!(correct, level = self.engine.level(), "round finished");
            // Fresh delay before the next round's first blink.
            self.elapsed = 0;
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        renderer::draw(frame, self);
    }
}
