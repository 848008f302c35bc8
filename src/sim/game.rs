//! Game context: engine state plus the random source that drives it

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::command::Command;
use super::event::EventSink;
use super::state::GameState;
use super::tick::execute;

/// A running game
///
/// Owns the single random source used for Wumpus movement, bat transport and
/// map generation. Seed it (or inject any other [`Rng`]) for reproducible
/// play.
#[derive(Debug, Clone)]
pub struct Game<R = Pcg32> {
    pub state: GameState,
    rng: R,
}

impl Game<Pcg32> {
    /// Create an empty game with a seeded PCG generator
    pub fn new(seed: u64) -> Self {
        log::info!("New game with seed {}", seed);
        Self::with_rng(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: GameState::new(),
            rng,
        }
    }

    /// Execute a command, reporting everything that happens to `sink`
    pub fn execute<S: EventSink>(&mut self, command: Command, sink: &mut S) {
        execute(command, &mut self.state, &mut self.rng, sink);
    }

    /// Borrow state and random source together (for setup code)
    pub fn parts_mut(&mut self) -> (&mut GameState, &mut R) {
        (&mut self.state, &mut self.rng)
    }
}
