use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use wayback::config::Config;
use wayback::host::Session;
use wayback::replay::host::RecordingHost;
use wayback::replay::parser::parse_script;
use wayback::replay::replay;

/// Wayback - replay editor events through the navigation history engine
#[derive(Parser)]
#[command(name = "wayback")]
#[command(version)]
#[command(about = "Replay an editor event script through the navigation history engine", long_about = None)]
struct Cli {
    /// Event script to replay
    script: PathBuf,

    /// Config file (default: ~/.config/wayback/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the line threshold for cursor movement
    #[arg(short, long)]
    threshold: Option<usize>,

    /// Print the final history as JSON
    #[arg(long)]
    json: bool,

    /// Only print the final state
    #[arg(short, long)]
    quiet: bool,
}

/// Sends logs to stderr, filtered by `RUST_LOG` (default: `wayback=info`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wayback=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    if let Some(threshold) = cli.threshold {
        config.line_threshold = threshold;
    }

    let source = std::fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script {}", cli.script.display()))?;
    let script = parse_script(&source)
        .with_context(|| format!("Invalid script {}", cli.script.display()))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start runtime")?;

    runtime.block_on(async {
        let mut session = Session::activate(&config, RecordingHost::new());
        let reports = replay(&mut session, &script).await;

        if !cli.quiet {
            for report in &reports {
                println!("{:>4}: {}", report.line, report.status);
            }
        }

        if cli.json {
            let snapshot = session.engine().snapshot();
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        } else if cli.quiet {
            if let Some(report) = reports.last() {
                println!("{}", report.status);
            }
        }

        session.deactivate();
        Ok::<(), anyhow::Error>(())
    })
}
