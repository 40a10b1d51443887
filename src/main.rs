//! Terminal session driver: reads a line, hands it to the engine, prints the
//! message, and stops once the game is over.
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};

use heist::world::{self, World};
use heist::{GameState, interpret};

#[derive(Parser)]
#[command(name = "heist")]
#[command(about = "A small text adventure: break into the bank and crack the vault")]
#[command(version)]
struct Cli {
    /// Play a custom world from a TOML file instead of the built-in bank
    #[arg(short, long)]
    world: Option<PathBuf>,

    /// Verbose logging to stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_world(path: Option<&PathBuf>) -> Result<World> {
    match path {
        Some(path) => {
            let world = world::load_world_from_file(path)
                .with_context(|| format!("failed to load world file '{}'", path.display()))?;
            info!("using world file {}", path.display());
            Ok(world)
        }
        None => Ok(world::bank_heist()),
    }
}

/// Read-interpret-print until the game ends. End of input and unreadable
/// input both count as quitting; only write failures are returned.
fn play<R: BufRead, W: Write>(
    mut state: GameState,
    input: R,
    out: &mut W,
) -> io::Result<GameState> {
    writeln!(out, "{}", state.message())?;

    let mut lines = input.lines();

    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                warn!("input error: {e}");
                writeln!(out, "\nGoodbye.")?;
                break;
            }
            None => {
                debug!("input closed");
                writeln!(out, "\nGoodbye.")?;
                break;
            }
        };

        state = interpret(&state, &line);
        writeln!(out, "{}", state.message())?;

        if state.is_game_over() {
            break;
        }
    }

    Ok(state)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let world = load_world(cli.world.as_ref())?;

    println!("Welcome to {}!", world.name);
    if !world.desc.trim().is_empty() {
        println!("{}", world.desc.trim());
    }
    println!("Type 'help' for a list of commands.\n");

    let state = GameState::new(world);
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(state, stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
