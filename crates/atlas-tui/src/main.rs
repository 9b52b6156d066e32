//! Standalone TUI binary for ATLAS 2160.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use atlas_fiction::{Chapter, EngineConfig};

#[derive(Parser)]
#[command(
    name = "atlas-tui",
    about = "ATLAS 2160 in a terminal window",
    version
)]
struct Args {
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

    /// Directory containing `<room name>.txt` art files
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Write log output to this file (the screen belongs to the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(path: &Path) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("cannot open log file: {e}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn build_config(args: &Args) -> Result<EngineConfig, String> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path).map_err(|e| e.to_string())?,
        None => EngineConfig::default(),
    };
    if let Some(n) = args.chapter {
        config = config.with_start_chapter(Chapter::try_from(n)?);
    }
    if args.no_intro {
        config = config.with_intro(false);
    }
    Ok(config)
}

fn main() {
    let args = Args::parse();

    let result = args
        .log_file
        .as_deref()
        .map_or(Ok(()), init_tracing)
        .and_then(|()| build_config(&args))
        .and_then(|config| {
            let app = atlas_tui::app::TuiApp::new(args.name.as_deref(), config, args.assets.clone());
            atlas_tui::terminal::run(app)
        });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
