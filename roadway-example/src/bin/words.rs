//! Word splitter example.
//! Shows how a caller builds a tiny scanner on top of a framed roadway cursor.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use roadway::{Cursor, CursorConfig, Text, TextSlice};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Split text into whitespace-separated words, one frame per line.
#[derive(Parser, Debug)]
#[command(name = "roadway-words")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Text to split.
    #[arg(default_value = "riders on the storm")]
    text: String,

    /// Optional TOML file with cursor options.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Collects every run of non-whitespace characters as a frame.
fn split_words(cursor: &mut Cursor<Text>) -> roadway::Result<Vec<TextSlice>> {
    let mut words = Vec::new();

    while !cursor.eof(0) {
        // Skip separators
        while cursor.peek(0).is_some_and(char::is_whitespace) {
            cursor.next(0);
        }

        cursor.record()?;
        while cursor.peek(0).is_some_and(|ch| !ch.is_whitespace()) {
            cursor.next(0);
        }

        let word = cursor.flush()?;
        if !word.is_empty() {
            tracing::debug!(word = %word, end = cursor.position(), "word");
            words.push(word);
        }
    }

    Ok(words)
}

fn load_config(path: Option<&PathBuf>) -> Result<CursorConfig> {
    let Some(path) = path else {
        return Ok(CursorConfig::default());
    };

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    Ok(CursorConfig::from_toml_str(&source)?)
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_ref())?;
    if !config.framed {
        tracing::info!("enabling framing for word extraction");
        config.framed = true;
    }

    let mut cursor = Cursor::new(Some(Text::new(cli.text.as_str())), config)
        .context("input text must not be empty")?;

    for word in split_words(&mut cursor)? {
        println!("{word}");
    }
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
