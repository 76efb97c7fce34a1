use anyhow::Context;
use clap::{Parser, ValueEnum};
use othello::Player;
use othello_cli::connectors::{ComputerConnector, Connector, HumanConnector};
use othello_cli::game;
use othello_search::{LeafPerspective, SearchConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "othello", about = "Play Othello against a minimax opponent")]
struct Args {
    /// Your color: b or w. Asked interactively when omitted
    #[arg(long)]
    color: Option<Player>,

    /// JSON search config; the flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Plies the computer searches ahead (at least 1)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
    depth: Option<u8>,

    /// Time budget per computer move in milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Which side leaf positions are scored for
    #[arg(long, value_enum)]
    perspective: Option<Perspective>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Perspective {
    SideToMove,
    Balance,
}

impl From<Perspective> for LeafPerspective {
    fn from(perspective: Perspective) -> Self {
        match perspective {
            Perspective::SideToMove => LeafPerspective::SideToMove,
            Perspective::Balance => LeafPerspective::Balance,
        }
    }
}

impl Args {
    fn search_config(&self) -> anyhow::Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::load_from_file(path)
                .with_context(|| format!("loading search config from {}", path.display()))?,
            None => SearchConfig::default(),
        };

        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(time_limit_ms) = self.time_limit_ms {
            config.time_limit_ms = time_limit_ms;
        }
        if let Some(perspective) = self.perspective {
            config.perspective = perspective.into();
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.search_config()?;
    tracing::info!(?config, "starting game");

    let mut out = io::stdout().lock();
    let mut input = io::stdin().lock();

    let human = match args.color {
        Some(color) => color,
        None => game::prompt_color(&mut input, &mut out)?,
    };

    let mut person = HumanConnector::new(input);
    let mut computer = ComputerConnector::new(config);
    let (black, white): (&mut dyn Connector, &mut dyn Connector) = match human {
        Player::Black => (&mut person, &mut computer),
        Player::White => (&mut computer, &mut person),
    };

    game::play_game(black, white, &mut out)?;
    Ok(())
}
