//! Lingo - CLI
//!
//! Word-guessing game: five attempts per word, progressive hints, and
//! 5/6/7-letter rounds until elimination.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lingo::commands::{run_play, run_word};
use lingo::wordlists::WordBank;

#[derive(Parser)]
#[command(
    name = "lingo",
    about = "Lingo word-guessing game: five attempts per word, score until you miss",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a word file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play mode (default)
    Play {
        /// Draw each round's word length uniformly from {5, 6, 7}
        /// instead of cycling 5 -> 6 -> 7
        #[arg(short, long)]
        random_length: bool,
    },

    /// Print one random word of the requested length
    Word {
        /// Word length to fetch
        #[arg(short, long, default_value = "5")]
        length: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let bank = load_word_bank(&cli.wordlist)?;

    match cli.command {
        Some(Commands::Word { length }) => run_word(bank, length),
        Some(Commands::Play { random_length }) => run_play(bank, random_length),
        None => run_play(bank, false),
    }
}

/// Resolve the -w flag into a word bank
fn load_word_bank(wordlist: &str) -> Result<WordBank> {
    match wordlist {
        "embedded" => Ok(WordBank::embedded()),
        path => {
            let bank = WordBank::from_file(path)
                .with_context(|| format!("failed to load wordlist from {path}"))?;
            anyhow::ensure!(bank.word_count() > 0, "wordlist {path} contains no words");
            Ok(bank)
        }
    }
}
