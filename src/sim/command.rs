//! Player commands
//!
//! A command is a plain value. Executing it (see [`super::tick::execute`])
//! consumes it, so the same command can never run twice.

use super::direction::Direction;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Stay put and let the Wumpus wander
    Rest,
    /// Walk through the passage in the given direction
    Move(Direction),
    /// Loose an arrow along the given direction
    Shoot(Direction),
}
