//! Agent movement

use log::debug;

use crate::{Cell, Direction, Grid, Point};

/// Single agent walking on a [Grid]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    position: Point,
}

impl Navigator {
    pub fn new(position: Point) -> Self {
        Self { position }
    }

    /// Agent standing on [Grid::START]
    pub fn at_start() -> Self {
        Self::new(Grid::START)
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Take one step in `direction`
    ///
    /// The step is refused if the target square is outside `grid` or a wall.
    /// Returns whether the agent moved.
    pub fn step(&mut self, direction: Direction, grid: &Grid) -> bool {
        let target = self
            .position
            .neighbor(direction)
            .filter(|p| grid.cell(*p).is_some_and(Cell::is_open));

        match target {
            Some(p) => {
                self.position = p;
                true
            }
            None => {
                debug!("Cannot move {:?} from {}", direction, self.position);
                false
            }
        }
    }

    /// Whether the agent has reached the exit square
    pub fn at_exit(&self, grid: &Grid) -> bool {
        grid.cell(self.position) == Some(Cell::Exit)
    }
}
