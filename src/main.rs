use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four_engine::{Game, GameConfig, Outcome, PlayerId};

/// Replay a Connect Four game from a list of columns.
#[derive(Parser)]
#[command(name = "connect4", about = "Replay a Connect Four game and print the result")]
struct Cli {
    /// Columns to play, alternating between Player1 (X) and Player2 (O)
    columns: Vec<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Print the board after every move
    #[arg(long)]
    verbose: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config).context("serializing config")?);
        return Ok(());
    }

    let mut game = Game::try_new(config).context("invalid game configuration")?;
    let players = [PlayerId::new_v4(), PlayerId::new_v4()];
    for player in players {
        game.register(player).context("registering players")?;
    }

    for (i, &column) in cli.columns.iter().enumerate() {
        let player = players[i % 2];
        let outcome = game
            .play(column, player)
            .with_context(|| format!("move {} (column {column})", i + 1))?;
        if cli.verbose {
            println!("{}\n", game.board());
        }
        if outcome != Outcome::Ongoing {
            if i + 1 < cli.columns.len() {
                tracing::warn!(
                    ignored = cli.columns.len() - i - 1,
                    "game ended before all moves were played"
                );
            }
            break;
        }
    }

    if !cli.verbose {
        println!("{}\n", game.board());
    }
    println!("{}", game.status());
    Ok(())
}
