//! Console front end
//!
//! Turns keyboard input into commands and game events into text. The
//! [`Narrator`] also keeps the player's hit points and decides when the game
//! is over; the engine itself knows nothing about either.

use crate::settings::Settings;
use crate::sim::{Command, Direction, EventSink, GameEvent};

/// One line of player input
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Quit,
}

/// Map a line of input to a command
///
/// `w/a/s/d` move, `sw/sa/ss/sd` shoot, `r` rests and `q` quits. Full
/// direction names work too: `up` moves, `shoot up` shoots. Anything else is
/// treated as resting.
pub fn parse_input(line: &str) -> Input {
    let command = match line.trim() {
        "w" => Command::Move(Direction::Up),
        "a" => Command::Move(Direction::Left),
        "s" => Command::Move(Direction::Down),
        "d" => Command::Move(Direction::Right),
        "sw" => Command::Shoot(Direction::Up),
        "sa" => Command::Shoot(Direction::Left),
        "ss" => Command::Shoot(Direction::Down),
        "sd" => Command::Shoot(Direction::Right),
        "q" => return Input::Quit,
        other => match other.split_once(char::is_whitespace) {
            Some((verb, dir)) if verb.eq_ignore_ascii_case("shoot") => {
                Direction::from_str(dir.trim()).map_or(Command::Rest, Command::Shoot)
            }
            Some(_) => Command::Rest,
            None => Direction::from_str(other).map_or(Command::Rest, Command::Move),
        },
    };
    Input::Command(command)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    WalkedIntoWumpus,
    FoundByWumpus,
    Wounds,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Died(DeathCause),
}

/// Event sink that narrates the game as text
#[derive(Debug)]
pub struct Narrator {
    hit_points: i32,
    pit_damage: i32,
    self_shot_damage: i32,
    outcome: Option<Outcome>,
    lines: Vec<String>,
}

impl Narrator {
    pub fn new(settings: &Settings) -> Self {
        Self {
            hit_points: settings.hit_points,
            pit_damage: settings.pit_damage,
            self_shot_damage: settings.self_shot_damage,
            outcome: None,
            lines: Vec::new(),
        }
    }

    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    /// Set once the game is over; later events are ignored
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Take the text produced since the last call
    pub fn drain_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    fn say(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn hit(&mut self, points: i32) {
        self.hit_points -= points;
        if self.hit_points <= 0 {
            self.say("You have died of your wounds.");
            self.outcome = Some(Outcome::Died(DeathCause::Wounds));
        }
    }
}

impl EventSink for Narrator {
    fn notify(&mut self, event: GameEvent) {
        if self.outcome.is_some() {
            return;
        }
        log::trace!("Event: {:?}", event);

        match event {
            GameEvent::NoPassage => self.say("No Passage."),
            GameEvent::HearBats => self.say("You hear chirping."),
            GameEvent::HearPit => self.say("You hear wind."),
            GameEvent::SmellWumpus => self.say("There is a terrible smell."),
            GameEvent::Passage(direction) => self.say(format!("You can go {direction}.")),
            GameEvent::NoArrows => self.say("You have no arrows."),
            GameEvent::ArrowShot => self.say("Thwang!"),
            GameEvent::PlayerShotSelf => {
                self.say("Ow! You shot yourself in the back.");
                self.hit(self.self_shot_damage);
            }
            GameEvent::WumpusKilled => {
                self.say("You killed the Wumpus.");
                self.outcome = Some(Outcome::Victory);
            }
            GameEvent::PlayerShotWall => self.say("You shot a wall."),
            GameEvent::ArrowsFound(count) => {
                let plural = if count == 1 { "" } else { "s" };
                self.say(format!("You found {count} arrow{plural}."));
            }
            GameEvent::FellInPit => {
                self.say("You fell in a pit and hurt yourself.");
                self.hit(self.pit_damage);
            }
            GameEvent::PlayerWalkedIntoWumpus => {
                self.say("You walked into the waiting arms of the Wumpus.");
                self.outcome = Some(Outcome::Died(DeathCause::WalkedIntoWumpus));
            }
            GameEvent::WumpusFoundPlayer => {
                self.say("The Wumpus has found you.");
                self.outcome = Some(Outcome::Died(DeathCause::FoundByWumpus));
            }
            GameEvent::BatsTransport => self.say("Some bats carried you away."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrate(events: &[GameEvent]) -> Narrator {
        let mut narrator = Narrator::new(&Settings::default());
        for event in events {
            narrator.notify(*event);
        }
        narrator
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("w"), Input::Command(Command::Move(Direction::Up)));
        assert_eq!(parse_input(" d\n"), Input::Command(Command::Move(Direction::Right)));
        assert_eq!(parse_input("ss"), Input::Command(Command::Shoot(Direction::Down)));
        assert_eq!(parse_input("sa"), Input::Command(Command::Shoot(Direction::Left)));
        assert_eq!(parse_input("r"), Input::Command(Command::Rest));
        assert_eq!(parse_input("q"), Input::Quit);
        assert_eq!(parse_input("xyzzy"), Input::Command(Command::Rest));
    }

    #[test]
    fn test_parse_direction_names() {
        assert_eq!(parse_input("up"), Input::Command(Command::Move(Direction::Up)));
        assert_eq!(parse_input("Left\n"), Input::Command(Command::Move(Direction::Left)));
        assert_eq!(parse_input("shoot down"), Input::Command(Command::Shoot(Direction::Down)));
        assert_eq!(parse_input("SHOOT  right"), Input::Command(Command::Shoot(Direction::Right)));
        assert_eq!(parse_input("shoot"), Input::Command(Command::Rest));
        assert_eq!(parse_input("shoot sideways"), Input::Command(Command::Rest));
        assert_eq!(parse_input("walk up"), Input::Command(Command::Rest));
    }

    #[test]
    fn test_narration_text() {
        let mut narrator = narrate(&[
            GameEvent::Passage(Direction::Left),
            GameEvent::ArrowsFound(1),
            GameEvent::ArrowsFound(3),
            GameEvent::HearBats,
        ]);
        assert_eq!(
            narrator.drain_lines(),
            vec![
                "You can go Left.",
                "You found 1 arrow.",
                "You found 3 arrows.",
                "You hear chirping.",
            ]
        );
        assert!(narrator.drain_lines().is_empty());
        assert_eq!(narrator.outcome(), None);
    }

    #[test]
    fn test_injuries() {
        let narrator = narrate(&[GameEvent::FellInPit, GameEvent::PlayerShotSelf]);
        assert_eq!(narrator.hit_points(), 10 - 4 - 3);
        assert_eq!(narrator.outcome(), None);
    }

    #[test]
    fn test_death_by_wounds() {
        let mut narrator = narrate(&[GameEvent::FellInPit, GameEvent::FellInPit, GameEvent::FellInPit]);
        assert_eq!(narrator.outcome(), Some(Outcome::Died(DeathCause::Wounds)));
        assert_eq!(narrator.drain_lines().last().map(String::as_str), Some("You have died of your wounds."));
    }

    #[test]
    fn test_victory_silences_rest_of_turn() {
        let mut narrator = narrate(&[
            GameEvent::ArrowShot,
            GameEvent::WumpusKilled,
            GameEvent::Passage(Direction::Up),
        ]);
        assert_eq!(narrator.outcome(), Some(Outcome::Victory));
        assert_eq!(narrator.drain_lines(), vec!["Thwang!", "You killed the Wumpus."]);
    }

    #[test]
    fn test_wumpus_deaths() {
        let narrator = narrate(&[GameEvent::PlayerWalkedIntoWumpus, GameEvent::WumpusFoundPlayer]);
        assert_eq!(narrator.outcome(), Some(Outcome::Died(DeathCause::WalkedIntoWumpus)));

        let narrator = narrate(&[GameEvent::WumpusFoundPlayer]);
        assert_eq!(narrator.outcome(), Some(Outcome::Died(DeathCause::FoundByWumpus)));
    }
}
