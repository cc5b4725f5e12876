//! Detective Quest.
//!
//! A mansion of rooms laid out as a binary tree, a search tree of collected
//! clues, and a chained hash table from clue to suspect. The player walks
//! the mansion, the ledger fills up in sorted order, and an accusation is
//! sustained when enough collected clues point at the accused.
#![allow(dead_code)]

pub mod explore;
pub mod game;
pub mod ledger;
pub mod mansion;
pub mod players;
pub mod suspects;
pub mod verdict;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Number of collected clues implicating a suspect.
pub type Tally = usize;
/// Index of a bucket in the suspect table.
pub type Bucket = usize;

// ============================================================================
// POLICY
// ============================================================================
/// Collected clues required to sustain an accusation.
pub const ACCUSATION_THRESHOLD: Tally = 2;
/// Default bucket count of the suspect table (prime).
pub const HASH_BUCKETS: usize = 101;
/// Seed of the multiplicative string hash.
pub const HASH_SEED: u64 = 5381;
/// Longest room name kept, in characters.
pub const NAME_LIMIT: usize = 49;
/// Longest clue kept, in characters.
pub const CLUE_LIMIT: usize = 119;
/// Steps a wandering player takes before ending exploration.
pub const WANDER_STEPS: usize = 32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and random play.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Writes DEBUG level to `logs/<secs>.log`, WARN to terminal so the game
/// text stays readable.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
