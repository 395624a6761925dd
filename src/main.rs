//! CLI for walking through a generated maze

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use recursive_maze::{
    maze_generator::MazeGenerator, paths::MazeGraph, viewport::Viewport, Direction, Grid,
    Navigator,
};

/// Find the way out of a randomly generated maze
///
/// Type directions (`up`, `down`, `left`, `right` or `w`, `a`, `s`, `d`)
/// and press enter. Several keys may be given on one line. `q` quits.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width and height, must be odd
    #[arg(long, default_value_t = 35)]
    size: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Width and height of the visible window
    #[arg(short, long, default_value_t = Viewport::RANGE)]
    range: usize,

    /// Print the length of the shortest way out before starting
    #[arg(long)]
    solve: bool,
}

fn draw(viewport: &Viewport, grid: &Grid, hero: &Navigator, steps: usize) {
    print!("\x1B[2J\x1B[1;1H");
    println!("{}", viewport.render(grid, hero.position()));
    println!("Position {}, {} steps", hero.position(), steps);
}

/// Split an input line into directions
///
/// Whole words are tried first, then every character as a single key.
fn parse_line(line: &str) -> Vec<anyhow::Result<Direction>> {
    line.split_whitespace()
        .flat_map(|word| match word.parse::<Direction>() {
            Ok(direction) => vec![Ok(direction)],
            Err(_) => word
                .chars()
                .map(|c| c.to_string().parse::<Direction>())
                .collect(),
        })
        .collect()
}

/// Generate maze, read moves from stdin until the exit is reached
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let grid = MazeGenerator::new(args.seed).generate(args.size)?;
    let viewport = Viewport::new(args.range);
    let mut hero = Navigator::at_start();
    let mut steps = 0;

    if args.solve {
        let graph = MazeGraph::from_grid(&grid);
        let path = graph
            .shortest_path(Grid::START, grid.exit())
            .context("Generated maze has no way out")?;
        println!("The shortest path is {} steps.", path.len() - 1);
    }

    draw(&viewport, &grid, &hero, steps);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Could not read from stdin")?;
        if line.trim() == "q" {
            info!("Quit after {} steps", steps);
            return Ok(());
        }

        for direction in parse_line(&line) {
            match direction {
                Ok(direction) => {
                    if hero.step(direction, &grid) {
                        steps += 1;
                    }
                }
                Err(e) => warn!("{}", e),
            }
            if hero.at_exit(&grid) {
                break;
            }
        }
        draw(&viewport, &grid, &hero, steps);

        if hero.at_exit(&grid) {
            println!("You found the way out in {} steps.", steps);
            return Ok(());
        }
        io::stdout().flush()?;
    }
    Ok(())
}
