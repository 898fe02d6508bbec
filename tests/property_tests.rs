//! Property-based tests for the sequence generator and the round state
//! machine, using proptest to cover seeds, lengths and corruption points
//! the scenario tests pick by hand.

use proptest::prelude::*;

use memterm::games::memory::{Direction, SequenceGenerator, Turn, TurnEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn drain_playback(engine: &mut TurnEngine) -> Vec<Direction> {
    let mut shown = Vec::new();
    while let Some(dir) = engine.advance_playback() {
        shown.push(dir);
    }
    shown
}

// =============================================================================
// Sequence generation
// =============================================================================

proptest! {
    /// A generated sequence has exactly the requested length, and every
    /// element is one of the four directions.
    #[test]
    fn generation_has_requested_length_and_domain(seed in any::<u64>(), len in 0usize..64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let moves = SequenceGenerator::generate_with(&mut rng, len);
        prop_assert_eq!(moves.len(), len);
        for dir in moves {
            prop_assert!(Direction::ALL.contains(&dir));
        }
    }

    /// The same seed always produces the same sequence.
    #[test]
    fn generation_is_deterministic_per_seed(seed in any::<u64>(), len in 0usize..64) {
        let mut a = StdRng::seed_from_u64(seed);
        let mut b = StdRng::seed_from_u64(seed);
        prop_assert_eq!(
            SequenceGenerator::generate_with(&mut a, len),
            SequenceGenerator::generate_with(&mut b, len)
        );
    }
}

// =============================================================================
// Round evaluation
// =============================================================================

proptest! {
    /// A perfect echo succeeds at every level, and the level climbs by
    /// one each time.
    #[test]
    fn perfect_echo_always_succeeds(seed in any::<u64>(), rounds in 1u32..6) {
        let mut engine = TurnEngine::with_seed(seed);
        for round in 1..=rounds {
            prop_assert_eq!(engine.level(), round);
            let shown = drain_playback(&mut engine);
            prop_assert_eq!(shown.len(), round as usize);
            for dir in shown {
                engine.record_move(dir);
            }
            prop_assert!(engine.round_complete());
            prop_assert!(engine.check_solution());
        }
        prop_assert_eq!(engine.level(), rounds + 1);
    }

    /// Corrupting any single position makes the round fail and resets
    /// the level to one.
    #[test]
    fn any_corruption_fails_the_round(seed in any::<u64>(), level in 1u32..6, idx_raw in any::<usize>()) {
        let mut engine = TurnEngine::with_seed(seed);
        for _ in 1..level {
            let shown = drain_playback(&mut engine);
            for dir in shown {
                engine.record_move(dir);
            }
            prop_assert!(engine.check_solution());
        }

        let shown = drain_playback(&mut engine);
        let idx = idx_raw % shown.len();
        for (i, dir) in shown.iter().enumerate() {
            let dir = if i == idx {
                // Any direction other than the right one.
                Direction::ALL.into_iter().find(|d| d != dir).unwrap()
            } else {
                *dir
            };
            engine.record_move(dir);
        }
        prop_assert!(engine.round_complete());
        prop_assert!(!engine.check_solution());
        prop_assert_eq!(engine.level(), 1);
    }

    /// Whatever the outcome, evaluation leaves a clean slate: empty
    /// player moves, system turn, and a fresh sequence matching the new
    /// level.
    #[test]
    fn evaluation_always_resets_the_round(seed in any::<u64>(), fail in any::<bool>()) {
        let mut engine = TurnEngine::with_seed(seed);
        let shown = drain_playback(&mut engine);
        let first = shown[0];
        let recorded = if fail {
            Direction::ALL.into_iter().find(|d| *d != first).unwrap()
        } else {
            first
        };
        engine.record_move(recorded);
        prop_assert_eq!(engine.check_solution(), !fail);

        prop_assert!(engine.player_moves().is_empty());
        prop_assert_eq!(engine.turn(), Turn::System);
        prop_assert_eq!(engine.system_moves().len(), engine.level() as usize);
    }

    /// Extra input after the sequence is matched never changes the
    /// recorded moves.
    #[test]
    fn surplus_moves_are_dropped(seed in any::<u64>(), extra in 1usize..8) {
        let mut engine = TurnEngine::with_seed(seed);
        let shown = drain_playback(&mut engine);
        for dir in &shown {
            engine.record_move(*dir);
        }
        for _ in 0..extra {
            engine.record_move(Direction::Up);
        }
        prop_assert_eq!(engine.player_moves().len(), shown.len());
    }
}
