use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueHint};

use speakcards::card::SENTENCE_KIND;
use speakcards::commands::{check, study};
use speakcards::loader;

#[derive(Parser, Debug)]
#[command(
    name = "speakcards",
    version,
    about = "Speaking-practice flashcards for the terminal.",
    long_about = None,
    propagate_version = true,
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Study cards in a full-screen session
    Study {
        /// Path to a deck file. Without one, data.json is probed in the
        /// current directory, then its parent, then the platform data
        /// directory.
        #[arg(value_name = "PATH", value_hint = ValueHint::FilePath)]
        path: Option<PathBuf>,
        /// Card type selected when the session starts.
        #[arg(long, value_name = "KIND", default_value = SENTENCE_KIND)]
        kind: String,
    },
    /// Show a summary of the deck that would be studied
    Check {
        #[arg(value_name = "PATH", value_hint = ValueHint::FilePath)]
        path: Option<PathBuf>,
    },
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("{:?}", err);
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // No subcommand starts a study session with the defaults.
    let command = cli.command.unwrap_or(Command::Study {
        path: None,
        kind: SENTENCE_KIND.to_string(),
    });

    match command {
        Command::Study { path, kind } => {
            let deck = loader::load_deck(path.as_deref());
            study::run(deck, kind)?;
        }
        Command::Check { path } => {
            let deck = loader::load_deck(path.as_deref());
            check::run(&deck);
        }
    }

    Ok(())
}
