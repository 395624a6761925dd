//! Generate a maze by recursive division and walk through it one step at a time
//!
//! # Examples
//! ## Generate and walk
//! ```
//! use recursive_maze::{maze_generator::MazeGenerator, Direction, Navigator, Point};
//!
//! let mut gen = MazeGenerator::new(Some(13));
//! let grid = gen.generate(5).unwrap();
//! assert_eq!(grid.exit(), Point::new(4, 3));
//!
//! let mut hero = Navigator::at_start();
//! assert_eq!(hero.position(), Point::new(0, 1));
//!
//! // Nothing to the left of the start square
//! assert!(!hero.step(Direction::Left, &grid));
//! // The first interior square is always open
//! assert!(hero.step(Direction::Right, &grid));
//! assert_eq!(hero.position(), Point::new(1, 1));
//! ```
//!
//! ## Shortest way out
//! ```
//! use recursive_maze::{maze_generator::MazeGenerator, paths::MazeGraph, Grid};
//!
//! let grid = MazeGenerator::new(Some(0)).generate(15).unwrap();
//! let graph = MazeGraph::from_grid(&grid);
//! let path = graph.shortest_path(Grid::START, grid.exit()).unwrap();
//! assert_eq!(path.first(), Some(&Grid::START));
//! assert_eq!(path.last(), Some(&grid.exit()));
//! println!("{grid}");
//! ```

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

pub mod grid;
pub mod maze_generator;
pub mod navigator;
pub mod paths;
pub mod viewport;

pub use grid::{Cell, Grid};
pub use navigator::Navigator;

/// Location in the maze
///
/// `x` grows to the right, `y` grows downwards.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Adjacent point in `direction`, or `None` if it would have a negative
    /// coordinate.
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// Manhattan distance to `other`
    pub fn distance(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Single-step movement direction
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Coordinate change `(dx, dy)` of one step
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    /// Parse direction from a word, an arrow name or a `wasd`/`hjkl` key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let direction = match s.trim().to_lowercase().as_str() {
            "up" | "arrowup" | "w" | "k" => Direction::Up,
            "down" | "arrowdown" | "s" | "j" => Direction::Down,
            "left" | "arrowleft" | "a" | "h" => Direction::Left,
            "right" | "arrowright" | "d" | "l" => Direction::Right,
            other => bail!("Unknown direction `{}`", other),
        };
        Ok(direction)
    }
}
