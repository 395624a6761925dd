//! CLI for maze generation

use clap::Parser;
use log::{debug, log_enabled, Level};
use recursive_maze::{maze_generator::MazeGenerator, paths::MazeGraph, Grid};

/// Recursive division maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width and height, must be odd
    #[arg(long, default_value_t = 35)]
    size: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of mazes to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,
}

/// Generate mazes, print them separated by blank lines
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed);
    for i in 0..args.count {
        let grid = gen.generate(args.size)?;
        if log_enabled!(Level::Debug) {
            if let Some(path) = MazeGraph::from_grid(&grid).shortest_path(Grid::START, grid.exit())
            {
                debug!("Maze {} shortest path is {} steps", i, path.len() - 1);
            }
        }
        if i > 0 {
            println!();
        }
        println!("{}", grid);
    }
    Ok(())
}
