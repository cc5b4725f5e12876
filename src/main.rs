//! Detective Quest binary
//!
//! Interactive by default. `--script` replays fixed inputs, `--wander`
//! lets a random walker play; both still print the game to the terminal.

use anyhow::Context;
use clap::Parser;
use detective_quest::*;
use detective_quest::game::Detective;
use detective_quest::game::Event;
use detective_quest::game::Session;
use detective_quest::mansion::Room;
use detective_quest::mansion::Scenario;
use detective_quest::players::Human;
use detective_quest::players::Scripted;
use detective_quest::players::Wanderer;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON scenario to play instead of the classic mansion.
    #[arg(long)]
    scenario: Option<std::path::PathBuf>,
    /// Navigation inputs separated by commas, e.g. "l,l,r,e".
    #[arg(long, conflicts_with = "wander")]
    script: Option<String>,
    /// Name to accuse when playing a script or wandering.
    #[arg(long)]
    accuse: Option<String>,
    /// Let a random walker play.
    #[arg(long)]
    wander: bool,
    /// Seed for the random walker.
    #[arg(long, requires = "wander")]
    seed: Option<u64>,
    /// Steps before the random walker stops exploring.
    #[arg(long, requires = "wander", default_value_t = WANDER_STEPS)]
    steps: usize,
}

/// Plays non-interactively but shows the game like a human would see it.
struct Narrated<D>(D);

impl<D: Detective> Detective for Narrated<D> {
    fn navigate(&mut self, room: &Room) -> anyhow::Result<String> {
        let input = self.0.navigate(room)?;
        println!("> {}", input);
        Ok(input)
    }
    fn accuse(&mut self, suspects: &[&str]) -> anyhow::Result<String> {
        let accused = self.0.accuse(suspects)?;
        println!("> accuse {:?}", accused);
        Ok(accused)
    }
    fn notify(&mut self, event: &Event) {
        self.0.notify(event);
        Human.notify(event);
    }
}

fn main() -> anyhow::Result<()> {
    log()?;
    let args = Args::parse();
    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::classic(),
    };
    let accused = args.accuse.clone().unwrap_or_default();
    let mut player: Box<dyn Detective> = match (&args.script, args.wander) {
        (Some(script), _) => Box::new(Narrated(Scripted::parse(script, &accused))),
        (None, true) => {
            let wanderer = match args.seed {
                Some(seed) => Wanderer::seeded(seed),
                None => Wanderer::default(),
            }
            .steps(args.steps);
            match args.accuse {
                Some(ref name) => Box::new(Narrated(wanderer.accusing(name))),
                None => Box::new(Narrated(wanderer)),
            }
        }
        (None, false) => Box::new(Human),
    };
    let outcome = Session::new(&scenario)
        .run(player.as_mut())
        .context("session aborted")?;
    log::info!(
        "session finished with {} clues, verdict {:?}",
        outcome.clues.len(),
        outcome.verdict.as_ref().map(|v| v.sustained())
    );
    Ok(())
}
