//! Console shell for the ATLAS 2160 text adventure.

mod console;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use atlas_fiction::{Chapter, EngineConfig};

#[derive(Parser)]
#[command(
    name = "atlas",
    about = "ATLAS 2160 - a narrative text adventure across three eras",
    version
)]
struct Cli {
    /// Player name (asked on startup when omitted)
    #[arg(short, long)]
    name: Option<String>,

    /// JSON engine configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start directly in chapter 1, 2 or 3
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    chapter: Option<u8>,

    /// Skip the opening cinematic
    #[arg(long)]
    no_intro: bool,

    /// Never wait for Enter between scenes
    #[arg(long)]
    no_pause: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn build_config(cli: &Cli) -> Result<EngineConfig, String> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path).map_err(|e| e.to_string())?,
        None => EngineConfig::default(),
    };
    if let Some(n) = cli.chapter {
        config = config.with_start_chapter(Chapter::try_from(n)?);
    }
    if cli.no_intro {
        config = config.with_intro(false);
    }
    if cli.no_pause {
        config = config.with_pauses(false);
    }
    Ok(config)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = build_config(&cli).and_then(|config| console::run(cli.name.as_deref(), config));

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
