//! Stickytab - headless runner for sticky header scroll scenarios
//!
//! ```text
//! stickytab simulate scenarios/profile.toml --format json
//! stickytab defaults > stickytab.toml
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use stickytab_cli::{Scenario, ScenarioRunner};
use stickytab_layout::StickyConfig;
use tracing_subscriber::EnvFilter;

/// Drive the sticky header coordinator without a UI
#[derive(Parser, Debug)]
#[command(name = "stickytab")]
#[command(about = "Headless runner for sticky header scroll scenarios")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a scenario and print the frames after each step
    Simulate {
        /// Scenario TOML file
        scenario: PathBuf,

        /// Engine configuration (defaults when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the default engine configuration as TOML
    Defaults,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            scenario,
            config,
            format,
        } => cmd_simulate(scenario, config, format),
        Commands::Defaults => cmd_defaults(),
    }
}

fn cmd_simulate(path: PathBuf, config: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let config = match config {
        Some(path) => StickyConfig::load(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => StickyConfig::default(),
    };
    let scenario = Scenario::from_path(&path)?;

    tracing::info!("simulating {}", path.display());
    let report = ScenarioRunner::new(&scenario, config)?.run(&scenario)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => report.write_text(&mut out)?,
        OutputFormat::Json => report.write_to_writer(&mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn cmd_defaults() -> Result<()> {
    let toml = StickyConfig::default().to_toml()?;
    print!("{toml}");
    Ok(())
}
