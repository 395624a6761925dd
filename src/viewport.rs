//! Camera window over the maze

use itertools::Itertools;

use crate::{Grid, Point};

/// Square window of `range × range` squares, centred on the agent
pub struct Viewport {
    range: usize,
}

impl Viewport {
    /// Default width and height of the window
    pub const RANGE: usize = 9;

    const S_PLAYER: char = '🏃';
    const S_VOID: char = '⬛';

    pub fn new(range: usize) -> Self {
        Self { range }
    }

    pub fn range(&self) -> usize {
        self.range
    }

    /// Render the squares around `player`, one text line per row
    ///
    /// Squares outside the grid are drawn as void, so the agent stays in the
    /// centre even at the border.
    pub fn render(&self, grid: &Grid, player: Point) -> String {
        let half = (self.range / 2) as isize;
        let offsets = -half..(self.range as isize - half);

        offsets
            .clone()
            .map(|dy| {
                offsets
                    .clone()
                    .map(|dx| {
                        let square = player
                            .x
                            .checked_add_signed(dx)
                            .zip(player.y.checked_add_signed(dy))
                            .map(|(x, y)| Point::new(x, y));
                        match square {
                            Some(p) if p == player => Self::S_PLAYER,
                            Some(p) => grid.cell(p).map_or(Self::S_VOID, |c| c.to_char()),
                            None => Self::S_VOID,
                        }
                    })
                    .join("")
            })
            .join("\n")
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Self::RANGE)
    }
}
