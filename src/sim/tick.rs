//! Turn execution
//!
//! Every command runs the same template: the command's own action, then the
//! Wumpus wanders, then the collision check, then a status report of the
//! player's surroundings.

use rand::Rng;

use super::command::Command;
use super::direction::Direction;
use super::event::{EventSink, GameEvent};
use super::graph::CavernId;
use super::state::GameState;

/// Where a shot arrow ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrowFlight {
    /// Hit the shooter or the Wumpus; the arrow is gone
    Hit,
    /// Came to rest in this cavern
    Rested(CavernId),
    /// Nowhere to fly from (player not placed)
    Lost,
}

/// Run one command to completion
pub fn execute<R: Rng, S: EventSink>(command: Command, state: &mut GameState, rng: &mut R, sink: &mut S) {
    log::debug!("Executing {:?} from {:?}", command, state.player);

    match command {
        Command::Rest => {}
        Command::Move(direction) => move_player(state, direction, rng, sink),
        Command::Shoot(direction) => shoot_arrow(state, direction, sink),
    }

    move_wumpus(state, rng);

    if state.player.is_some() && state.player == state.wumpus {
        sink.notify(GameEvent::WumpusFoundPlayer);
    }

    report_status(state, sink);
}

fn move_player<R: Rng, S: EventSink>(state: &mut GameState, direction: Direction, rng: &mut R, sink: &mut S) {
    let destination = state
        .player
        .as_ref()
        .and_then(|player| state.graph.find_destination(player.as_str(), direction))
        .cloned();

    let Some(destination) = destination else {
        sink.notify(GameEvent::NoPassage);
        return;
    };

    if state.wumpus.as_ref() == Some(&destination) {
        sink.notify(GameEvent::PlayerWalkedIntoWumpus);
    }
    if state.is_pit_cavern(destination.as_str()) {
        sink.notify(GameEvent::FellInPit);
    }
    let bats = state.is_bat_cavern(destination.as_str());
    state.player = Some(destination);

    if bats {
        sink.notify(GameEvent::BatsTransport);
        transport_player(state, rng);
    }

    collect_arrows(state, sink);
}

/// Drop the player in a random known cavern other than the current one
fn transport_player<R: Rng>(state: &mut GameState, rng: &mut R) {
    let current = state.player.clone();
    let choices: Vec<&CavernId> = state
        .graph
        .caverns()
        .iter()
        .filter(|c| Some(*c) != current.as_ref())
        .collect();

    if choices.is_empty() {
        log::debug!("Bats found nowhere to take the player");
        return;
    }

    let landing = choices[rng.random_range(0..choices.len())].clone();
    log::debug!("Bats carried player from {:?} to {}", current, landing);
    state.player = Some(landing);
}

fn collect_arrows<S: EventSink>(state: &mut GameState, sink: &mut S) {
    let Some(player) = state.player.clone() else {
        return;
    };

    let found = state.arrows_in(player.as_str());
    if found > 0 {
        sink.notify(GameEvent::ArrowsFound(found));
        state.quiver = state.quiver.saturating_add(found);
        state.arrows_in.insert(player, 0);
    }
}

fn shoot_arrow<S: EventSink>(state: &mut GameState, direction: Direction, sink: &mut S) {
    if state.quiver == 0 {
        sink.notify(GameEvent::NoArrows);
        return;
    }

    sink.notify(GameEvent::ArrowShot);
    state.quiver -= 1;

    match trace_arrow(state, direction, sink) {
        ArrowFlight::Rested(cavern) => {
            log::debug!("Arrow came to rest in {}", cavern);
            let resting = state.arrows_in.entry(cavern).or_insert(0);
            *resting = resting.saturating_add(1);
        }
        ArrowFlight::Hit | ArrowFlight::Lost => {}
    }
}

/// Follow an arrow from the player's cavern until it hits something or stops
///
/// Emits the self-hit, kill and wall events along the way but leaves the
/// arrow bookkeeping to the caller.
pub fn trace_arrow<S: EventSink>(state: &GameState, direction: Direction, sink: &mut S) -> ArrowFlight {
    let Some(player) = state.player.as_ref() else {
        return ArrowFlight::Lost;
    };

    let mut cavern = player;
    let mut steps = 0;
    while let Some(next) = state.graph.find_destination(cavern.as_str(), direction) {
        cavern = next;

        if cavern == player {
            sink.notify(GameEvent::PlayerShotSelf);
            return ArrowFlight::Hit;
        }
        if state.wumpus.as_ref() == Some(cavern) {
            sink.notify(GameEvent::WumpusKilled);
            return ArrowFlight::Hit;
        }

        steps += 1;
        if steps >= state.arrow_step_limit {
            log::debug!("Arrow flight stopped after {} caverns", steps);
            return ArrowFlight::Rested(cavern.clone());
        }
    }

    if cavern == player {
        sink.notify(GameEvent::PlayerShotWall);
    }
    ArrowFlight::Rested(cavern.clone())
}

/// The Wumpus either stays or takes one of its exits, all equally likely
fn move_wumpus<R: Rng>(state: &mut GameState, rng: &mut R) {
    let Some(wumpus) = state.wumpus.as_ref() else {
        return;
    };

    let mut choices: Vec<&CavernId> = state
        .graph
        .connections_from(wumpus.as_str())
        .map(|c| &c.to)
        .collect();
    choices.push(wumpus);

    let next = choices[rng.random_range(0..choices.len())].clone();
    if next != *wumpus {
        log::debug!("Wumpus moved from {} to {}", wumpus, next);
    }
    state.wumpus = Some(next);
}

fn report_status<S: EventSink>(state: &GameState, sink: &mut S) {
    let Some(player) = state.player.as_ref() else {
        return;
    };
    let here = player.as_str();

    for connection in state.graph.connections_from(here) {
        sink.notify(GameEvent::Passage(connection.direction));
    }
    if state.any_neighbor(here, |c| state.is_bat_cavern(c.as_str())) {
        sink.notify(GameEvent::HearBats);
    }
    if state.any_neighbor(here, |c| state.is_pit_cavern(c.as_str())) {
        sink.notify(GameEvent::HearPit);
    }
    if state.any_neighbor(here, |c| state.wumpus.as_ref() == Some(c)) {
        sink.notify(GameEvent::SmellWumpus);
    }
}
