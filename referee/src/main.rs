use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use referee::{replay, serve, simulate, GameRecording, Recorder};
use tracing::{error, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info", global = true)]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    /// Run one game session, reading JSON requests from stdin and answering on stdout
    Serve {
        /// Record the games as JSON files into this directory
        #[arg(short, long)]
        record_games_to_directory: Option<PathBuf>,
    },
    /// Check that recorded games are legal and ended as recorded
    Replay {
        /// Paths to the recorded games
        #[arg(required = true)]
        recordings: Vec<PathBuf>,
    },
    /// Play games with random legal moves for both players
    Simulate {
        /// How many games to play
        #[arg(short, long, default_value_t = 100)]
        num_games: usize,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    match args.command {
        Command::Serve {
            record_games_to_directory,
        } => {
            let mut recorder = if let Some(dir_path) = record_games_to_directory {
                Some(Recorder::new(dir_path)?)
            } else {
                None
            };
            let stdin = std::io::stdin().lock();
            let stdout = std::io::stdout().lock();
            serve(stdin, stdout, &mut recorder)
        }
        Command::Replay { recordings } => {
            let mut num_failed = 0;
            for path in &recordings {
                match GameRecording::load(path).and_then(|rec| replay(&rec)) {
                    Ok(game) => {
                        info!(path = %path.display(), status = ?game.status(), moves = game.path().len(), "Replayed");
                    }
                    Err(err) => {
                        error!(path = %path.display(), "{:#}", err);
                        num_failed += 1;
                    }
                }
            }
            eprintln!(
                "End result:\n- {} recordings replayed\n- {} failed",
                recordings.len() - num_failed,
                num_failed
            );
            if num_failed > 0 {
                anyhow::bail!("{} of {} recordings failed", num_failed, recordings.len());
            }
            Ok(())
        }
        Command::Simulate { num_games, seed } => {
            // Get a random seed
            let seed = seed.unwrap_or_else(rand::random);
            info!(seed);
            let mut rng = StdRng::seed_from_u64(seed);

            let score = simulate(&mut rng, num_games)?;
            eprintln!(
                "End result:\n- Player 1: {} goals, {} blocks\n- Player 2: {} goals, {} blocks\n- {:.1} moves per game",
                score.wins_by_goal[0],
                score.wins_by_block[0],
                score.wins_by_goal[1],
                score.wins_by_block[1],
                score.num_moves as f32 / score.num_games().max(1) as f32
            );
            Ok(())
        }
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Stdout is reserved for the protocol
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
