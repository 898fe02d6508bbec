use rand::Rng;

/// One directional move, in the pad order the board lays them out:
/// top, right, bottom, left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in pad-index order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
}

/// Produces the random move sequences the player has to echo back.
pub struct SequenceGenerator;

impl SequenceGenerator {
    /// Draw `len` uniform directions from the process-wide RNG.
    pub fn generate(len: usize) -> Vec<Direction> {
        Self::generate_with(&mut rand::rng(), len)
    }

    /// Same draw against an explicit generator, so a seeded game replays
    /// the exact same sequences.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<Direction> {
        (0..len)
            .map(|_| Direction::ALL[rng.random_range(0..Direction::ALL.len())])
            .collect()
    }
}
