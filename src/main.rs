use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::backend::CrosstermBackend;
use scopeguard::defer;

use dungeon::GameConfig;
use error::handle_error;
use tile_dungeon::{ConsoleInput, Game, GameLoop, RatatuiRenderer};

/// Explore procedurally generated dungeons one turn at a time
#[derive(Parser, Debug)]
#[command(name = "tile_dungeon")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file overriding the default game constants
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the dungeon generator; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Append log records to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the first level as JSON and exit
    #[arg(long)]
    dump_snapshot: bool,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref(), args.verbose)?;

    let config = match &args.config {
        Some(path) => GameConfig::load(path).map_err(|e| anyhow::anyhow!(handle_error(&e)))?,
        None => GameConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(time_seed);
    log::info!("starting with seed {}", seed);

    let game = Game::new(config, seed);

    if args.dump_snapshot {
        let json = game
            .snapshot()
            .to_json()
            .map_err(|e| anyhow::anyhow!(handle_error(&e)))?;
        println!("{}", json);
        return Ok(());
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    defer! {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
    execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let renderer = RatatuiRenderer::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")?;
    let mut game_loop = GameLoop::new(game, renderer, ConsoleInput::new());
    game_loop.run()
}

/// Logs go to a file because stderr shares the screen with the game.
/// Without one, logging stays off unless `RUST_LOG` asks for it.
fn init_logging(log_file: Option<&PathBuf>, verbosity: u8) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .filter_level(match verbosity {
                    0 => log::LevelFilter::Info,
                    1 => log::LevelFilter::Debug,
                    _ => log::LevelFilter::Trace,
                })
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.parse_default_env();
    builder.init();
    Ok(())
}

fn time_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    (nanos ^ std::process::id() as u128) as u64
}
