use anki_vocab::api::VocabApi;
use anki_vocab::commands::{CmdMessage, MessageLevel};
use anki_vocab::config::GeneratorConfig;
use anki_vocab::error::{Result, VocabError};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use log::LevelFilter;
use std::path::Path;

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        print_messages(&[error_message(&e)]);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if !cli.input.exists() {
        print_messages(&[CmdMessage::error(format!(
            "❌ Error: Input file '{}' not found!",
            cli.input.display()
        ))]);
        std::process::exit(1);
    }

    let config = load_config();
    let output = config.resolve_output(cli.output);
    let deck_name = config.resolve_deck_name(cli.name);

    let mut api = VocabApi::from_config(&config);
    api.create_anki_deck_reporting(
        &cli.input,
        Path::new(&output),
        &deck_name,
        &mut |message: &CmdMessage| print_messages(std::slice::from_ref(message)),
    )?;
    Ok(())
}

/// Reads the per-user config, falling back to built-in defaults.
fn load_config() -> GeneratorConfig {
    let Some(dirs) = ProjectDirs::from("com", "anki-vocab", "anki-vocab") else {
        log::debug!("no config directory, using defaults");
        return GeneratorConfig::default();
    };

    match GeneratorConfig::load(dirs.config_dir()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring config in {}: {}", dirs.config_dir().display(), e);
            GeneratorConfig::default()
        }
    }
}

fn error_message(e: &VocabError) -> CmdMessage {
    let content = match e {
        VocabError::Parse(cause) => format!("Error parsing CSV: {}", cause),
        VocabError::Package(cause) => format!("Error writing package: {}", cause),
        other => format!("Error: {}", other),
    };
    CmdMessage::error(content)
}

// Errors go to stdout along with everything else.
fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
