//! Command-line moderator for Fake Artist, the drawing game with one impostor.

mod commands;
mod logging;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fake-artist",
    about = "Fake Artist: deal secret words for a game of drawing and bluffing",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    play: PlayArgs,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

// Arguments for dealing a round, the default command.
#[derive(Args)]
struct PlayArgs {
    /// Number of players around the table
    #[arg(allow_negative_numbers = true)]
    players: Option<i64>,

    /// JSON file mapping categories to word lists
    words: Option<PathBuf>,

    /// Remove the played word and save the remaining pool
    #[arg(long)]
    consume: bool,

    /// Where to save the remaining pool (default: shortened.json)
    #[arg(long, value_name = "PATH", requires = "consume")]
    out: Option<PathBuf>,

    /// RNG seed for a reproducible deal
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively add words to a word file
    Add {
        /// Word file to extend (created if missing)
        file: PathBuf,
    },

    /// List the categories in a word file
    Categories {
        /// Word file to inspect
        file: PathBuf,
    },

    /// Explain how to play
    Rules,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Some(Commands::Add { file }) => commands::add::run(&file),
        Some(Commands::Categories { file }) => commands::categories::run(&file),
        Some(Commands::Rules) => commands::rules::run(),
        None => {
            let PlayArgs {
                players,
                words,
                consume,
                out,
                seed,
            } = cli.play;
            match (players, words) {
                (None, _) => {
                    println!("Player count not specified!");
                    Ok(())
                }
                (Some(_), None) => {
                    println!("json file with words not specified!");
                    Ok(())
                }
                (Some(players), Some(words)) => {
                    let options = commands::play::PlayOptions {
                        consume,
                        out,
                        seed,
                    };
                    commands::play::run(players, &words, options)
                }
            }
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
