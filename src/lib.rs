//! Hunt the Wumpus - a cave exploration game
//!
//! Core modules:
//! - `sim`: Deterministic game engine (cavern graph, hazards, commands, arrows)
//! - `map`: Random map generation
//! - `console`: Text rendering of game events and keyboard input parsing
//! - `settings`: Data-driven game parameters

pub mod console;
pub mod map;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{Command, Direction, Game, GameEvent, GameState};

/// Game configuration constants
pub mod consts {
    /// Cavern count range for generated maps
    pub const MIN_CAVERNS: usize = 10;
    pub const MAX_CAVERNS: usize = 40;
    /// Chance that a generated cavern gets a passage on a given side
    pub const CONNECTION_CHANCE: f64 = 0.8;

    /// Hazards placed on a generated map
    pub const BAT_CAVERNS: usize = 3;
    pub const PIT_CAVERNS: usize = 3;

    /// Player defaults
    pub const STARTING_QUIVER: u32 = 5;
    pub const HIT_POINTS: i32 = 10;
    pub const PIT_DAMAGE: i32 = 4;
    pub const SELF_SHOT_DAMAGE: i32 = 3;

    /// Caverns an arrow may enter before dropping (guards against cycles)
    pub const ARROW_STEP_LIMIT: usize = 100;
}
