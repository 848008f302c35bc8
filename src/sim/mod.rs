//! Cave simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Randomness only from the injected `Rng`
//! - Stable iteration order (connections by insertion, hazard sets by name)
//! - No console or platform dependencies; events go out through `EventSink`

pub mod command;
pub mod direction;
pub mod event;
pub mod game;
pub mod graph;
pub mod state;
pub mod tick;

pub use command::Command;
pub use direction::Direction;
pub use event::{EventSink, GameEvent};
pub use game::Game;
pub use graph::{CavernGraph, CavernId, Connection};
pub use state::GameState;
pub use tick::{ArrowFlight, execute, trace_arrow};
