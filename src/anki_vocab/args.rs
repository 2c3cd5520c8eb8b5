use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Examples:
  anki-vocab input.csv
  anki-vocab input.csv -o my_deck.apkg
  anki-vocab input.csv -n \"My Custom Deck Name\"";

#[derive(Parser, Debug)]
#[command(name = "anki-vocab", version)]
#[command(about = "Convert vocabulary CSV to Anki deck", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Input CSV file (columns: text, type, pos/structure, definition, lemma)
    pub input: PathBuf,

    /// Output Anki deck file [default: vocab_deck.apkg]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Deck name [default: English Vocabulary Phrases]
    #[arg(short, long)]
    pub name: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
