//! tabsplit TUI entry point.

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use tabsplit_tui::{Runtime, TerminalDriver};

/// Terminal bill-splitting calculator
#[derive(Parser, Debug)]
#[command(name = "tabsplit")]
#[command(about = "Split a bill and tip across a party, interactively")]
#[command(version)]
struct Args {
    /// Write tracing output to this file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = args.log_file {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    let driver = TerminalDriver::new()?;
    let runtime = Runtime::new(driver);
    Ok(runtime.run().await?)
}
