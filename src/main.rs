use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::{fs::File, path::PathBuf, sync::Mutex};
use term_snake::game::GameConfig;
use term_snake::modes::{HeadlessMode, HumanMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "term_snake")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// Game mode
    #[arg(long, value_enum, default_value = "human")]
    mode: Mode,

    /// JSON config file; the flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Simulation steps per second
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Seed for target placement
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate in headless mode
    #[arg(long, default_value = "500")]
    ticks: u64,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Play with the keyboard
    Human,
    /// Let the autopilot play without a terminal and print a JSON report
    Headless,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(rate) = self.tick_rate {
            config.tick_rate_hz = rate;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

/// The human mode owns the terminal, so it only logs when given a file
fn init_tracing(log_file: Option<&PathBuf>, mode: Mode) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match (log_file, mode) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        (None, Mode::Headless) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
        (None, Mode::Human) => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref(), cli.mode)?;

    let config = cli.game_config()?;
    info!(
        width = config.grid_width,
        height = config.grid_height,
        tick_rate = config.tick_rate_hz,
        "Starting term_snake"
    );

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config)?;
            human_mode.run().await?;
        }
        Mode::Headless => {
            let report = HeadlessMode::new(config, cli.ticks)?.run()?;
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{json}");
        }
    }

    Ok(())
}
