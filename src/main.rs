use anyhow::{Context, Result};
use clap::Parser;
use snake_game::game::{FoodPlacement, GameConfig, GameEngine};
use snake_game::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake_game")]
#[command(version, about = "Classic grid Snake in the terminal")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of one cell, in board units
    #[arg(long, env = "SNAKE_GRID_SIZE")]
    grid_size: Option<u32>,

    /// Board width, in board units
    #[arg(long, env = "SNAKE_WIDTH")]
    width: Option<u32>,

    /// Board height, in board units
    #[arg(long, env = "SNAKE_HEIGHT")]
    height: Option<u32>,

    /// Milliseconds between ticks
    #[arg(long, env = "SNAKE_TICK_MS")]
    tick_ms: Option<u64>,

    /// Never spawn food on the snake
    #[arg(long)]
    avoid_snake: bool,

    /// Seed for food placement
    #[arg(long, env = "SNAKE_SEED")]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(height) = self.height {
            config.board_height = height;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_period_ms = tick_ms;
        }
        if self.avoid_snake {
            config.food_placement = FoodPlacement::AvoidSnake;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file));
    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = cli.game_config()?;
    tracing::info!(?config, seed = ?cli.seed, "configuration loaded");

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    };

    let mut human_mode = HumanMode::new(engine);
    human_mode.run().await?;

    Ok(())
}
