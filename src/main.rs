//! # gameday CLI
//!
//! ```bash
//! # every game stored locally for a date range
//! gameday files 2015-04-05 2015-04-12 ./gd2
//!
//! # one game from the remote service
//! gameday url 2015-04-05 NYY BOS 1
//! ```
//!
//! Game output goes to stdout; logs go to stderr (`RUST_LOG` or `--verbose`).

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gameday::config::{self, Config};
use gameday::game::BoxscoreGameBuilder;
use gameday::pipeline::games_from_files;
use gameday::remote::{fetch_game, GameIdentifier, HttpFetcher, RemoteOutcome};
use gameday::render::{write_game, write_games, OutputFormat};
use gameday::teams::TeamRegistry;

/// Build baseball game records from Gameday boxscore, roster and
/// play-by-play XML.
#[derive(Parser)]
#[command(name = "gameday", version)]
struct Cli {
    /// Path to a TOML configuration file. Built-in defaults apply without it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Print one JSON object per game instead of the text rendering.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve every game stored in a local Gameday mirror for a date range.
    ///
    /// Expects `<INPUT_DIR>/<YEAR>/month_<MM>/day_<DD>/gid_*/` folders holding
    /// `boxscore.xml`, `players.xml` and `inning/inning_all.xml`.
    Files {
        /// First date to scan (inclusive).
        start: String,
        /// Last date to scan (inclusive).
        end: String,
        /// Root of the local mirror.
        input_dir: PathBuf,
        /// Number of batches / worker threads. Overrides `pipeline.workers`.
        #[arg(long)]
        workers: Option<usize>,
    },

    /// Fetch a single game from the Gameday service.
    Url {
        date: String,
        /// Away team identifier, e.g. `NYY`.
        away: String,
        /// Home team identifier, e.g. `BOS`.
        home: String,
        /// Game number within the day, `1` unless a doubleheader.
        game_number: String,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut cfg = config::load_config(cli.config.as_deref())
        .with_context(|| "Failed to load configuration")?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match cli.command {
        Commands::Files {
            start,
            end,
            input_dir,
            workers,
        } => {
            if let Some(workers) = workers {
                cfg.pipeline.workers = workers;
            }
            run_files(&cfg, &start, &end, &input_dir, format)?;
        }
        Commands::Url {
            date,
            away,
            home,
            game_number,
        } => {
            // Not-found is informational and does not change the exit status.
            let found = run_url(&cfg, &date, &away, &home, &game_number, format)?;
            debug!(found, "url run complete");
        }
    }

    Ok(())
}

fn run_files(
    cfg: &Config,
    start: &str,
    end: &str,
    input_dir: &Path,
    format: OutputFormat,
) -> Result<()> {
    let workers = cfg.workers()?;
    let result = games_from_files(start, end, input_dir, workers, &BoxscoreGameBuilder)?;
    write_games(&mut io::stdout().lock(), &result.games, format)?;
    Ok(())
}

fn run_url(
    cfg: &Config,
    date: &str,
    away: &str,
    home: &str,
    game_number: &str,
    format: OutputFormat,
) -> Result<bool> {
    let ident = GameIdentifier::new(date, away, home, game_number, TeamRegistry::mlb())?;
    let fetcher = HttpFetcher::new(&cfg.remote)?;

    match fetch_game(&ident, &fetcher, &BoxscoreGameBuilder, &cfg.remote)? {
        RemoteOutcome::Found(resolved) => {
            write_game(&mut io::stdout().lock(), &resolved, format)?;
            Ok(true)
        }
        RemoteOutcome::NotFound => {
            println!("No data found for {date} {away} {home} {game_number}");
            Ok(false)
        }
        RemoteOutcome::Unbuildable => {
            println!("No game could be built for {date} {away} {home} {game_number}");
            Ok(false)
        }
    }
}
