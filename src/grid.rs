//! Maze grid and recursive division

use std::fmt;

use itertools::Itertools;
use log::{debug, trace};
use rand::Rng;

use crate::Point;

/// Classification of a single square
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Start,
    Exit,
}

impl Cell {
    const S_EMPTY: char = '🟩';
    const S_WALL: char = '🟫';
    const S_START: char = '🚪';
    const S_EXIT: char = '❎';

    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => Self::S_EMPTY,
            Cell::Wall => Self::S_WALL,
            Cell::Start => Self::S_START,
            Cell::Exit => Self::S_EXIT,
        }
    }

    /// Whether an agent may stand on this square
    pub const fn is_open(self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

/// Square grid of [Cell]s, indexed `[x][y]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

/// Rectangle `[min_x, max_x) × [min_y, max_y)` still to be divided
#[derive(Clone, Copy, Debug)]
struct Slice {
    min_x: usize,
    max_x: usize,
    min_y: usize,
    max_y: usize,
}

impl Slice {
    fn width(&self) -> usize {
        self.max_x.saturating_sub(self.min_x)
    }

    fn height(&self) -> usize {
        self.max_y.saturating_sub(self.min_y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Orientation {
    /// Wall along a row, `y` fixed
    Horizontal,
    /// Wall along a column, `x` fixed
    Vertical,
}

impl Grid {
    /// Where the agent enters the maze
    pub const START: Point = Point::new(0, 1);

    /// Create grid of `size × size` empty squares
    pub fn new(size: usize) -> Self {
        let mut grid = Self {
            size,
            cells: Vec::new(),
        };
        grid.empty_grid();
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Columns of the grid; `cells()[x][y]`
    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Where the maze is left, on the right edge
    pub fn exit(&self) -> Point {
        Point::new(self.size.saturating_sub(1), self.size.saturating_sub(2))
    }

    /// Cell at `point`, `None` outside the grid
    pub fn cell(&self, point: Point) -> Option<Cell> {
        self.cells.get(point.x)?.get(point.y).copied()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.size && point.y < self.size
    }

    /// Overwrite a cell. Points outside the grid are ignored.
    pub fn set(&mut self, point: Point, cell: Cell) {
        if let Some(c) = self
            .cells
            .get_mut(point.x)
            .and_then(|column| column.get_mut(point.y))
        {
            *c = cell;
        }
    }

    /// All points holding `cell`, column by column
    pub fn positions(&self, cell: Cell) -> impl Iterator<Item = Point> + '_ {
        (0..self.size)
            .cartesian_product(0..self.size)
            .map(|(x, y)| Point::new(x, y))
            .filter(move |p| self.cell(*p) == Some(cell))
    }

    /// Reset every square to [Cell::Empty]
    pub fn empty_grid(&mut self) {
        self.cells = vec![vec![Cell::Empty; self.size]; self.size];
    }

    /// Reset the grid and surround it with a one square thick wall
    pub fn enclose(&mut self) {
        if self.size < 1 {
            return;
        }
        self.empty_grid();

        let last = self.size - 1;
        for i in 0..self.size {
            self.cells[0][i] = Cell::Wall;
            self.cells[last][i] = Cell::Wall;
            self.cells[i][0] = Cell::Wall;
            self.cells[i][last] = Cell::Wall;
        }
    }

    /// Generate maze by recursive division
    ///
    /// The grid is enclosed, then the interior is split by a wall with a
    /// single gap, and both halves are split again until they are too
    /// narrow. Finally [Self::START] and [Self::exit] are cut into the
    /// enclosure.
    ///
    /// Walls are always placed at an odd offset from the slice they divide
    /// and gaps at an even offset. With an odd `size` every wall then lies on
    /// an even coordinate and every gap on an odd one, so a later wall can
    /// never block an earlier gap and all open squares stay connected. Even
    /// sizes produce a grid, but not necessarily a solvable one.
    pub fn generate_maze<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.enclose();

        if self.size >= 3 {
            self.divide(
                Slice {
                    min_x: 1,
                    max_x: self.size - 1,
                    min_y: 1,
                    max_y: self.size - 1,
                },
                rng,
            );
        }

        self.set(Self::START, Cell::Start);
        let exit = self.exit();
        self.set(exit, Cell::Exit);

        debug!(
            "Generated {0}x{0} maze with {1} wall squares",
            self.size,
            self.positions(Cell::Wall).count()
        );
    }

    fn divide<R: Rng + ?Sized>(&mut self, slice: Slice, rng: &mut R) {
        let (width, height) = (slice.width(), slice.height());
        if width < 3 || height < 3 {
            return;
        }

        let orientation = if height > width {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };

        let (first, second) = match orientation {
            Orientation::Horizontal => {
                let wall_y = slice.min_y + odd_offset(rng, height);
                let gap_x = slice.min_x + even_offset(rng, width);
                trace!("Horizontal wall y={} gap x={} in {:?}", wall_y, gap_x, slice);

                for x in (slice.min_x..slice.max_x).filter(|x| *x != gap_x) {
                    self.cells[x][wall_y] = Cell::Wall;
                }
                (
                    Slice {
                        max_y: wall_y,
                        ..slice
                    },
                    Slice {
                        min_y: wall_y + 1,
                        ..slice
                    },
                )
            }
            Orientation::Vertical => {
                let wall_x = slice.min_x + odd_offset(rng, width);
                let gap_y = slice.min_y + even_offset(rng, height);
                trace!("Vertical wall x={} gap y={} in {:?}", wall_x, gap_y, slice);

                for y in (slice.min_y..slice.max_y).filter(|y| *y != gap_y) {
                    self.cells[wall_x][y] = Cell::Wall;
                }
                (
                    Slice {
                        max_x: wall_x,
                        ..slice
                    },
                    Slice {
                        min_x: wall_x + 1,
                        ..slice
                    },
                )
            }
        };

        self.divide(first, rng);
        self.divide(second, rng);
    }
}

/// Random odd offset in `[1, span - 2]`; `span` is at least 3
fn odd_offset<R: Rng + ?Sized>(rng: &mut R, span: usize) -> usize {
    let mut offset = rng.gen_range(0..span);
    if offset % 2 == 0 {
        offset = if rng.gen_bool(0.5) {
            offset + 1
        } else {
            offset.saturating_sub(1)
        };
    }
    offset.clamp(1, span - 2)
}

/// Random even offset in `[0, span - 1]`
///
/// For an even `span` the upper clamp may yield an odd offset.
fn even_offset<R: Rng + ?Sized>(rng: &mut R, span: usize) -> usize {
    let mut offset = rng.gen_range(0..span);
    if offset % 2 == 1 {
        offset = if rng.gen_bool(0.5) {
            offset + 1
        } else {
            offset - 1
        };
    }
    offset.min(span - 1)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = (0..self.size)
            .map(|y| (0..self.size).map(|x| self.cells[x][y].to_char()).join(""))
            .join("\n");
        write!(f, "{}", rows)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{rngs::StdRng, SeedableRng};

    use super::{even_offset, odd_offset};
    use crate::{Cell, Grid, Point};

    fn generated(size: usize, seed: u64) -> Grid {
        let mut grid = Grid::new(size);
        grid.generate_maze(&mut StdRng::seed_from_u64(seed));
        grid
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.cells().len(), 4);
        assert!(grid.cells().iter().flatten().all(|c| *c == Cell::Empty));
        assert!(Grid::new(0).cells().is_empty());
    }

    #[test]
    fn enclose_draws_hollow_square() {
        let mut grid = Grid::new(5);
        grid.enclose();
        let expected = "
🟫🟫🟫🟫🟫
🟫🟩🟩🟩🟫
🟫🟩🟩🟩🟫
🟫🟩🟩🟩🟫
🟫🟫🟫🟫🟫"
            .trim();
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn enclose_and_empty_are_idempotent() {
        let mut once = Grid::new(7);
        once.enclose();
        let mut twice = once.clone();
        twice.enclose();
        assert_eq!(once, twice);

        once.empty_grid();
        twice.empty_grid();
        twice.empty_grid();
        assert_eq!(once, twice);
        assert_eq!(once, Grid::new(7));
    }

    #[test]
    fn enclose_replaces_previous_maze() {
        let mut grid = generated(9, 3);
        grid.enclose();
        let mut fresh = Grid::new(9);
        fresh.enclose();
        assert_eq!(grid, fresh);
    }

    #[test]
    fn enclose_on_empty_grid_is_noop() {
        let mut grid = Grid::new(0);
        grid.enclose();
        assert!(grid.cells().is_empty());
    }

    #[test]
    fn border_is_wall_except_start_and_exit() {
        for size in (5..=31).step_by(2) {
            for seed in 0..20 {
                let grid = generated(size, seed);
                let last = size - 1;
                let border = (0..size)
                    .cartesian_product(0..size)
                    .map(|(x, y)| Point::new(x, y))
                    .filter(|p| p.x == 0 || p.y == 0 || p.x == last || p.y == last);
                for p in border {
                    let expected = if p == Grid::START {
                        Cell::Start
                    } else if p == grid.exit() {
                        Cell::Exit
                    } else {
                        Cell::Wall
                    };
                    assert_eq!(grid.cell(p), Some(expected), "size={size} seed={seed} at {p}");
                }
            }
        }
    }

    #[test]
    fn exactly_one_start_and_exit() {
        for size in (5..=41).step_by(2) {
            let grid = generated(size, size as u64);
            assert_eq!(grid.positions(Cell::Start).collect_vec(), vec![Point::new(0, 1)]);
            assert_eq!(
                grid.positions(Cell::Exit).collect_vec(),
                vec![Point::new(size - 1, size - 2)]
            );
        }
    }

    #[test]
    fn walls_on_even_lines_only() {
        for seed in 0..50 {
            let grid = generated(21, seed);
            for x in 1..20 {
                for y in 1..20 {
                    let cell = grid.cell(Point::new(x, y)).unwrap();
                    if x % 2 == 1 && y % 2 == 1 {
                        assert_eq!(cell, Cell::Empty, "room at ({x}, {y})");
                    }
                    if x % 2 == 0 && y % 2 == 0 {
                        assert_eq!(cell, Cell::Wall, "pillar at ({x}, {y})");
                    }
                }
            }
        }
    }

    #[test]
    fn no_open_two_by_two_blocks() {
        for size in (5..=25).step_by(2) {
            for seed in 0..10 {
                let grid = generated(size, seed);
                for (x, y) in (0..size - 1).cartesian_product(0..size - 1) {
                    let open = [(x, y), (x + 1, y), (x, y + 1), (x + 1, y + 1)]
                        .into_iter()
                        .all(|(x, y)| grid.cell(Point::new(x, y)).unwrap().is_open());
                    assert!(!open, "open block at ({x}, {y}) size={size} seed={seed}");
                }
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        assert_eq!(generated(25, 42), generated(25, 42));
    }

    #[test]
    fn smallest_maze_is_a_corridor() {
        let grid = generated(3, 0);
        let expected = "
🟫🟫🟫
🚪🟩❎
🟫🟫🟫"
            .trim();
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn degenerate_sizes_do_not_panic() {
        for size in [0, 1, 2, 4, 6, 10] {
            let grid = generated(size, 1);
            assert_eq!(grid.size(), size);
        }
    }

    #[test]
    fn out_of_bounds_queries() {
        let mut grid = Grid::new(3);
        assert_eq!(grid.cell(Point::new(3, 0)), None);
        assert_eq!(grid.cell(Point::new(0, 3)), None);
        assert!(!grid.contains(Point::new(3, 1)));
        grid.set(Point::new(5, 5), Cell::Wall);
        assert_eq!(grid, Grid::new(3));
    }

    #[test]
    fn offsets_respect_parity() {
        let mut rng = StdRng::seed_from_u64(7);
        for span in (3..=15).step_by(2) {
            for _ in 0..200 {
                let odd = odd_offset(&mut rng, span);
                assert_eq!(odd % 2, 1);
                assert!((1..=span - 2).contains(&odd));

                let even = even_offset(&mut rng, span);
                assert_eq!(even % 2, 0);
                assert!(even < span);
            }
        }
    }
}
