//! Game state and setup operations
//!
//! Holds the cavern graph, hazard registry and the positions of the player,
//! the Wumpus and every arrow. All mutation during play goes through
//! [`super::tick::execute`].

use std::collections::{BTreeSet, HashMap};

use super::command::Command;
use super::direction::Direction;
use super::graph::{CavernGraph, CavernId};
use crate::consts::ARROW_STEP_LIMIT;

/// Complete engine state
///
/// Locations start out unset; queries report `None` until the map has been
/// set up.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) graph: CavernGraph,
    pub(crate) bat_caverns: BTreeSet<CavernId>,
    pub(crate) pit_caverns: BTreeSet<CavernId>,
    pub(crate) player: Option<CavernId>,
    pub(crate) wumpus: Option<CavernId>,
    pub(crate) quiver: u32,
    /// Arrows lying on the floor, by cavern
    pub(crate) arrows_in: HashMap<CavernId, u32>,
    /// Maximum caverns a single arrow may enter
    pub(crate) arrow_step_limit: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            graph: CavernGraph::new(),
            bat_caverns: BTreeSet::new(),
            pit_caverns: BTreeSet::new(),
            player: None,
            wumpus: None,
            quiver: 0,
            arrows_in: HashMap::new(),
            arrow_step_limit: ARROW_STEP_LIMIT,
        }
    }

    // === Cavern graph ===

    pub fn connect_cavern(&mut self, from: impl Into<CavernId>, to: impl Into<CavernId>, direction: Direction) {
        self.graph.connect(from, to, direction);
    }

    pub fn find_destination(&self, cavern: &str, direction: Direction) -> Option<&CavernId> {
        self.graph.find_destination(cavern, direction)
    }

    pub fn graph(&self) -> &CavernGraph {
        &self.graph
    }

    // === Hazards ===

    pub fn add_bat_cavern(&mut self, cavern: impl Into<CavernId>) {
        self.bat_caverns.insert(cavern.into());
    }

    pub fn add_pit_cavern(&mut self, cavern: impl Into<CavernId>) {
        self.pit_caverns.insert(cavern.into());
    }

    pub fn is_bat_cavern(&self, cavern: &str) -> bool {
        self.bat_caverns.contains(cavern)
    }

    pub fn is_pit_cavern(&self, cavern: &str) -> bool {
        self.pit_caverns.contains(cavern)
    }

    /// Bat caverns, sorted by name
    pub fn bat_caverns(&self) -> impl Iterator<Item = &CavernId> {
        self.bat_caverns.iter()
    }

    /// Pit caverns, sorted by name
    pub fn pit_caverns(&self) -> impl Iterator<Item = &CavernId> {
        self.pit_caverns.iter()
    }

    // === Placement ===

    pub fn set_player_cavern(&mut self, cavern: impl Into<CavernId>) {
        self.player = Some(cavern.into());
    }

    pub fn player_cavern(&self) -> Option<&CavernId> {
        self.player.as_ref()
    }

    pub fn set_wumpus_cavern(&mut self, cavern: impl Into<CavernId>) {
        self.wumpus = Some(cavern.into());
    }

    pub fn wumpus_cavern(&self) -> Option<&CavernId> {
        self.wumpus.as_ref()
    }

    // === Arrows ===

    pub fn set_quiver(&mut self, arrows: u32) {
        self.quiver = arrows;
    }

    pub fn quiver(&self) -> u32 {
        self.quiver
    }

    pub fn set_arrows_in(&mut self, cavern: impl Into<CavernId>, arrows: u32) {
        self.arrows_in.insert(cavern.into(), arrows);
    }

    /// Arrows resting in `cavern` (0 if none were ever recorded)
    pub fn arrows_in(&self, cavern: &str) -> u32 {
        self.arrows_in.get(cavern).copied().unwrap_or(0)
    }

    pub fn set_arrow_step_limit(&mut self, limit: usize) {
        self.arrow_step_limit = limit;
    }

    pub fn arrow_step_limit(&self) -> usize {
        self.arrow_step_limit
    }

    // === Commands ===

    pub fn make_rest_command(&self) -> Command {
        Command::Rest
    }

    pub fn make_move_command(&self, direction: Direction) -> Command {
        Command::Move(direction)
    }

    pub fn make_shoot_command(&self, direction: Direction) -> Command {
        Command::Shoot(direction)
    }

    /// True if any passage out of `cavern` leads somewhere matching `test`
    pub(crate) fn any_neighbor(&self, cavern: &str, test: impl Fn(&CavernId) -> bool) -> bool {
        self.graph.connections_from(cavern).any(|c| test(&c.to))
    }
}
