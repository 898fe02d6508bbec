use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::sequence::{Direction, SequenceGenerator};

/// Whose half of the round is running: the system blinking its sequence,
/// or the player echoing it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    System,
    Player,
}

impl Turn {
    pub fn toggled(self) -> Self {
        match self {
            Turn::System => Turn::Player,
            Turn::Player => Turn::System,
        }
    }
}

/// The round state machine.
///
/// Owns the level, the system sequence, the player's recorded moves and
/// the playback cursor. All timing lives in the caller: the engine only
/// exposes `advance_playback` and lets the loop step through it at
/// whatever pace it wants.
pub struct TurnEngine {
    level: u32,
    turn: Turn,
    system_moves: Vec<Direction>,
    player_moves: Vec<Direction>,
    playback: usize,
    rng: StdRng,
}

impl TurnEngine {
    /// New game at level 1, sequences seeded from the process-wide RNG.
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// New game whose sequences are reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        let mut engine = Self {
            level: 1,
            turn: Turn::System,
            system_moves: Vec::new(),
            player_moves: Vec::new(),
            playback: 0,
            rng: StdRng::seed_from_u64(seed),
        };
        engine.begin_round();
        engine
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn system_moves(&self) -> &[Direction] {
        &self.system_moves
    }

    pub fn player_moves(&self) -> &[Direction] {
        &self.player_moves
    }

    /// Hand the next system move to the presentation layer.
    ///
    /// Returns `None` once the sequence is exhausted, flipping the turn
    /// to the player. Calls outside the system turn yield `None` without
    /// touching anything.
    pub fn advance_playback(&mut self) -> Option<Direction> {
        if self.turn != Turn::System {
            return None;
        }
        match self.system_moves.get(self.playback).copied() {
            Some(dir) => {
                self.playback += 1;
                Some(dir)
            }
            None => {
                self.turn = self.turn.toggled();
                debug!(level = self.level, "playback finished, player turn");
                None
            }
        }
    }

    /// Record one player move. A no-op outside the player turn or once
    /// the player has already matched the sequence length.
    pub fn record_move(&mut self, dir: Direction) {
        if self.turn != Turn::Player || self.player_moves.len() >= self.system_moves.len() {
            return;
        }
        self.player_moves.push(dir);
    }

    /// True once the player has entered as many moves as the system.
    pub fn round_complete(&self) -> bool {
        self.player_moves.len() == self.system_moves.len()
    }

    /// Evaluate the round: a perfect echo bumps the level, anything else
    /// resets it to 1. Either way both sequences are cleared, the turn
    /// flips back to the system and the next round's sequence is ready.
    pub fn check_solution(&mut self) -> bool {
        let correct = self.player_moves == self.system_moves;
        if correct {
            self.level += 1;
        } else {
            self.level = 1;
        }
        debug!(correct, level = self.level, "round evaluated");
        self.player_moves.clear();
        self.turn = Turn::System;
        self.begin_round();
        correct
    }

    /// Generate this level's sequence and rewind the playback cursor.
    fn begin_round(&mut self) {
        self.system_moves = SequenceGenerator::generate_with(&mut self.rng, self.level as usize);
        self.playback = 0;
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}
