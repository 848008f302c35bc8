//! Hunt the Wumpus entry point
//!
//! Builds a random map and runs the read-line game loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;

use hunt_the_wumpus::console::{Input, Narrator, Outcome, parse_input};
use hunt_the_wumpus::{Game, Settings, map};

#[derive(Parser, Debug)]
#[command(name = "hunt-the-wumpus")]
#[command(version, about = "Hunt the Wumpus - find it before it finds you", long_about = None)]
struct Args {
    /// Seed for the map and every random event (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log where the Wumpus and hazards are (needs RUST_LOG=info)
    #[arg(long)]
    reveal: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => Settings::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Settings::default(),
    };

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    });

    let mut game = Game::new(seed);
    map::generate(&settings, &mut game).context("generating map")?;
    if args.reveal {
        reveal(&game);
    }

    let mut narrator = Narrator::new(&settings);
    let rest = game.state.make_rest_command();
    game.execute(rest, &mut narrator);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        for line in narrator.drain_lines() {
            println!("{line}");
        }
        if let Some(outcome) = narrator.outcome() {
            log::info!("Game over: {:?}", outcome);
            return Ok(match outcome {
                Outcome::Victory => ExitCode::SUCCESS,
                Outcome::Died(_) => ExitCode::FAILURE,
            });
        }

        if let Some(cavern) = game.state.player_cavern() {
            println!("{cavern}");
        }
        println!("Health: {} arrows: {}", narrator.hit_points(), game.state.quiver());
        print!(">");
        stdout.flush().context("writing prompt")?;

        let Some(line) = lines.next() else {
            // End of input counts as quitting
            return Ok(ExitCode::SUCCESS);
        };
        let line = line.context("reading input")?;

        match parse_input(&line) {
            Input::Quit => return Ok(ExitCode::SUCCESS),
            Input::Command(command) => game.execute(command, &mut narrator),
        }
    }
}

fn reveal(game: &Game) {
    let state = &game.state;
    log::info!("Player: {:?}", state.player_cavern());
    log::info!("Wumpus: {:?}", state.wumpus_cavern());
    for cavern in state.bat_caverns() {
        log::info!("Bats: {}", cavern);
    }
    for cavern in state.pit_caverns() {
        log::info!("Pit: {}", cavern);
    }
}
