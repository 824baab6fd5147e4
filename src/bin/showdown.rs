use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use showdown_rs::duel::{Outcome, Tally};
use showdown_rs::records::{read_records, GameRecord};

#[derive(Debug, Parser)]
#[command(version, about = "Score five-card poker duels from game records.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score every game in a record file and print the final tally.
    Tally {
        /// Path to the records, one game of ten card tokens per line.
        file: PathBuf,
    },
    /// Deal random game records to stdout, one per line.
    Deal {
        /// Number of records to deal.
        #[clap(long, default_value_t = 100)]
        games: usize,
        /// RNG seed for a reproducible batch.
        #[clap(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Tally { file } => tally(&file),
        Command::Deal { games, seed } => deal(games, seed),
    }
}

fn tally(path: &Path) -> Result<()> {
    let start = Instant::now();
    let file =
        File::open(path).with_context(|| format!("cannot open records at {}", path.display()))?;

    let mut tally = Tally::default();
    for (game, record) in read_records(BufReader::new(file)).enumerate() {
        let record = record.with_context(|| format!("game {game}"))?;
        let outcome = record.play();
        if outcome == Outcome::Undecided {
            warn!("manually decide game {game}: {record}");
        }
        tally.record(game, outcome);
    }

    info!("scored {} games in {:.2?}", tally.games(), start.elapsed());
    println!(
        "player 1 wins: {}  player 2 wins: {}  undecided: {}",
        tally.player_one,
        tally.player_two,
        tally.undecided().len()
    );
    Ok(())
}

fn deal(games: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };
    for _ in 0..games {
        println!("{}", GameRecord::deal(&mut rng));
    }
    Ok(())
}
