mod render;

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::style::Color;
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use common::{config::MazeConfig, maze::Maze};
use render::{JsonRenderer, Renderer, TextRenderer};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Generates a maze with a few loops punched into it and prints it.
///
/// Settings fall back to the MAZE_COLS, MAZE_ROWS, MAZE_RANDOMNESS and MAZE_BREAK_CHANCE
/// environment variables (a .env file is read too), then to a 20x20 maze.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Width of the maze in cells
    #[arg(long)]
    cols: Option<usize>,

    /// Height of the maze in cells
    #[arg(long)]
    rows: Option<usize>,

    /// Chance, at a dead end, of resuming from a random earlier cell instead of the latest one
    #[arg(long)]
    randomness: Option<f64>,

    /// Chance of each cell punching an extra wall after generation
    #[arg(long)]
    break_chance: Option<f64>,

    /// Seed for a reproducible maze
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print walls without color
    #[arg(long)]
    plain: bool,
}

impl Args {
    fn apply(&self, config: MazeConfig) -> MazeConfig {
        MazeConfig {
            cols: self.cols.unwrap_or(config.cols),
            rows: self.rows.unwrap_or(config.rows),
            randomness: self.randomness.unwrap_or(config.randomness),
            break_chance: self.break_chance.unwrap_or(config.break_chance),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = MazeConfig::from_env().context("invalid maze settings in the environment")?;
    let config = args.apply(config);
    config.validate().context("invalid maze settings")?;

    let maze = match args.seed {
        Some(seed) => Maze::new(&config, &mut StdRng::seed_from_u64(seed)),
        None => Maze::new(&config, &mut rand::rng()),
    }
    .context("failed to generate maze")?;

    info!(
        "Generated {}x{} maze from {:?} with {} loops.",
        maze.grid.cols(),
        maze.grid.rows(),
        maze.generation.start,
        maze.loop_count()
    );

    let mut stdout = io::stdout().lock();
    match args.format {
        Format::Text => {
            let wall_color = (!args.plain).then_some(Color::DarkYellow);
            TextRenderer { wall_color }.render(&maze, &mut stdout)
        }
        Format::Json => JsonRenderer.render(&maze, &mut stdout),
    }
    .context("failed to write maze")?;

    Ok(())
}
