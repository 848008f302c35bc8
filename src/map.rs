//! Random map generation
//!
//! Builds a cave system through the engine's public setup calls only: caverns
//! with flavor names, two-way passages, hazards and the player's kit.

use rand::Rng;
use thiserror::Error;

use crate::settings::{Settings, SettingsError};
use crate::sim::{CavernId, Direction, Game, GameState};

const ENVIRONMENTS: [&str; 10] = [
    "bright", "humid", "dry", "creepy", "ugly", "foggy", "hot", "cold", "drafty", "dreadful",
];

const SHAPES: [&str; 9] = [
    "round", "square", "oval", "irregular", "long", "craggy", "rough", "tall", "narrow",
];

const KINDS: [&str; 10] = [
    "cavern", "room", "chamber", "catacomb", "crevasse", "cell", "tunnel", "passageway", "hall", "expanse",
];

const ADORNMENTS: [&str; 12] = [
    "smelling of sulphur",
    "with engravings on the walls",
    "with a bumpy floor",
    "",
    "littered with garbage",
    "spattered with guano",
    "with piles of Wumpus droppings",
    "with bones scattered around",
    "with a corpse on the floor",
    "that seems to vibrate",
    "that feels stuffy",
    "that fills you with dread",
];

/// Number of distinct cavern names the word lists can produce
pub const NAME_COMBINATIONS: usize = ENVIRONMENTS.len() * SHAPES.len() * KINDS.len() * ADORNMENTS.len();

#[derive(Error, Debug)]
pub enum MapError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("cannot name {requested} caverns uniquely (only {available} names exist)")]
    TooManyCaverns { requested: usize, available: usize },
}

fn pick<'a, R: Rng>(rng: &mut R, words: &[&'a str]) -> &'a str {
    words[rng.random_range(0..words.len())]
}

/// A random flavor name such as "A foggy oval hall with a bumpy floor."
pub fn cavern_name<R: Rng>(rng: &mut R) -> String {
    let environment = pick(rng, &ENVIRONMENTS);
    let shape = pick(rng, &SHAPES);
    let kind = pick(rng, &KINDS);
    let adornment = pick(rng, &ADORNMENTS);
    format!("A {environment} {shape} {kind} {adornment}.")
}

fn any_cavern<'a, R: Rng>(rng: &mut R, caverns: &'a [CavernId]) -> &'a CavernId {
    &caverns[rng.random_range(0..caverns.len())]
}

/// Any cavern except `cavern` (needs at least two caverns)
fn any_other<'a, R: Rng>(rng: &mut R, caverns: &'a [CavernId], cavern: &CavernId) -> &'a CavernId {
    loop {
        let other = any_cavern(rng, caverns);
        if other != cavern {
            return other;
        }
    }
}

/// Add `from -direction-> to` unless that side of `from` is already taken
fn connect_if_available(state: &mut GameState, from: &CavernId, direction: Direction, to: &CavernId) {
    if state.find_destination(from.as_str(), direction).is_none() {
        state.connect_cavern(from, to, direction);
    }
}

/// Generate a fresh map into `game`, returning every cavern created
///
/// Caverns that end up with no passages are still returned but are unknown to
/// the engine's graph.
pub fn generate<R: Rng>(settings: &Settings, game: &mut Game<R>) -> Result<Vec<CavernId>, MapError> {
    settings.validate()?;
    if settings.max_caverns > NAME_COMBINATIONS {
        return Err(MapError::TooManyCaverns {
            requested: settings.max_caverns,
            available: NAME_COMBINATIONS,
        });
    }

    let (state, rng) = game.parts_mut();

    let count = rng.random_range(settings.min_caverns..=settings.max_caverns);
    let mut caverns: Vec<CavernId> = Vec::with_capacity(count);
    while caverns.len() < count {
        let name = CavernId::new(cavern_name(rng));
        if !caverns.contains(&name) {
            state.set_arrows_in(&name, 0);
            caverns.push(name);
        }
    }

    for cavern in &caverns {
        for direction in Direction::ALL {
            if rng.random_bool(settings.connection_chance) {
                let other = any_other(rng, &caverns, cavern);
                connect_if_available(state, cavern, direction, other);
                connect_if_available(state, other, direction.opposite(), cavern);
            }
        }
    }

    let player = any_cavern(rng, &caverns).clone();
    state.set_player_cavern(&player);
    state.set_wumpus_cavern(any_other(rng, &caverns, &player));
    for _ in 0..settings.bat_caverns {
        state.add_bat_cavern(any_other(rng, &caverns, &player));
    }
    for _ in 0..settings.pit_caverns {
        state.add_pit_cavern(any_other(rng, &caverns, &player));
    }

    state.set_quiver(settings.starting_quiver);
    state.set_arrow_step_limit(settings.arrow_step_limit);

    log::info!(
        "Generated {} caverns with {} passages",
        caverns.len(),
        state.graph().connections().len()
    );
    Ok(caverns)
}
