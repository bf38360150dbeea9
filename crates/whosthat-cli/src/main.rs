//! whosthat CLI — play the silhouette quiz in a terminal.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "whosthat", version, about = "Guess the creature from its silhouette")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where to load creatures from. Flags override the config file.
#[derive(Args, Clone)]
pub struct SourceArgs {
    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Creature API endpoint
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// Local JSON file with creature records
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz
    Play {
        #[command(flatten)]
        source: SourceArgs,

        /// Stop after this many rounds
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,

        /// RNG seed for reproducible rounds
        #[arg(long)]
        seed: Option<u64>,

        /// Write a JSON session summary to this path
        #[arg(long)]
        summary: Option<PathBuf>,
    },

    /// List the creatures the source serves
    List {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Create starter config and sample creature file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("whosthat=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            source,
            rounds,
            seed,
            summary,
        } => commands::play::execute(source, rounds, seed, summary).await,
        Commands::List { source } => commands::list::execute(source).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
