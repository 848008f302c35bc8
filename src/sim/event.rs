//! Notifications emitted while a command executes

use super::direction::Direction;

/// Everything the engine can tell the outside world about a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Tried to move where no passage leads
    NoPassage,
    /// A neighboring cavern holds bats
    HearBats,
    /// A neighboring cavern holds a pit
    HearPit,
    /// The Wumpus is in a neighboring cavern
    SmellWumpus,
    /// A passage leaves the player's cavern in this direction
    Passage(Direction),
    NoArrows,
    ArrowShot,
    /// The arrow came back around and hit the shooter
    PlayerShotSelf,
    WumpusKilled,
    /// The arrow never left the player's cavern
    PlayerShotWall,
    ArrowsFound(u32),
    FellInPit,
    PlayerWalkedIntoWumpus,
    WumpusFoundPlayer,
    BatsTransport,
}

/// Receiver of game events
///
/// Called synchronously, in order, while a command runs. The engine never
/// looks at anything the sink does in response.
pub trait EventSink {
    fn notify(&mut self, event: GameEvent);
}

/// Recording sink, handy for tests and replays
impl EventSink for Vec<GameEvent> {
    fn notify(&mut self, event: GameEvent) {
        self.push(event);
    }
}
