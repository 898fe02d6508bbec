/// Memory game: echo back a growing sequence of pad blinks.
pub mod game;
pub mod renderer;
pub mod sequence;
pub mod turn;

pub use game::{MemoryGame, RoundOutcome};
pub use sequence::{Direction, SequenceGenerator};
pub use turn::{Turn, TurnEngine};
