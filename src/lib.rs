//! Find a way through a text maze with a wall-following walker
//!
//! Maze files give the dimensions, the start and end squares and the grid
//! itself, `0` for floor and `1` for wall. Edges wrap around: leaving the
//! grid on one side re-enters it on the other.
//!
//! # Examples
//! ```
//! use maze_solver::{EndingCondition, Maze};
//!
//! let text = "
//! 5 5
//! 1 1
//! 3 3
//! 1 1 1 1 1
//! 1 0 0 0 1
//! 1 0 1 0 1
//! 1 0 1 0 1
//! 1 1 1 1 1";
//! let maze = Maze::parse(text.trim()).unwrap();
//! let solution = maze.solve();
//! assert_eq!(solution.ending_condition, EndingCondition::Solved);
//! maze.print_report(&solution);
//! ```
//!
//! A maze whose goal cannot be reached is reported as unsolvable:
//! ```
//! use maze_solver::{EndingCondition, Maze};
//!
//! let text = "
//! 3 3
//! 0 0
//! 2 2
//! 0 1 1
//! 1 1 1
//! 1 1 0";
//! let maze = Maze::parse(text.trim()).unwrap();
//! assert_eq!(maze.solve().ending_condition, EndingCondition::Unsolvable);
//! ```

use std::fs;
use std::io;
use std::path::Path;
use std::thread;
use std::time::Duration;

use itertools::Itertools;
use log::info;

pub mod error;
pub mod grid;
#[cfg(feature = "mapgen")]
pub mod maze_generator;
pub mod moves;
pub mod render;
pub mod solver;

pub use error::{MazeError, Result};
pub use grid::{Cell, Grid, Position};
pub use moves::{Direction, Outcome};
pub use solver::{MoveHistory, SolveState, Solver};

/// Maze with its start and end squares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    /// Layout, with start and end squares marked
    grid: Grid,
    /// Where the walker begins
    start: Position,
    /// Location of the final target
    end: Position,
}

/// Solution to the maze
#[derive(Debug, Clone)]
pub struct MazeSolution {
    /// Squares between start and end, in walking order.
    ///
    /// Empty when the maze is unsolvable or start and end coincide.
    pub route: Vec<Position>,
    /// Number of distinct squares the walker stepped into
    pub visited: usize,
    /// Number of engine transitions taken
    pub steps: usize,
    /// How the attempt ended
    pub ending_condition: EndingCondition,
}

/// How the solve attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndingCondition {
    /// Walker reached the end square
    Solved,
    /// Walker gave up
    Unsolvable,
}

impl Maze {
    const C_FLOOR: char = '0';
    const C_WALL: char = '1';

    /// Maze from a grid of floors and walls.
    ///
    /// The start and end squares are marked on the grid, overriding whatever
    /// was there. Returns error if either lies outside the grid, or if the
    /// grid already has a start or end square of its own.
    pub fn new(mut grid: Grid, start: Position, end: Position) -> Result<Self> {
        let (width, height) = grid.dimensions();
        for (name, position) in [("start", start), ("end", end)] {
            if !grid.contains(position) {
                return Err(MazeError::InvalidLayout(format!(
                    "{name} {position} is outside the {width}x{height} maze"
                )));
            }
        }
        if let Some(stray) = grid
            .positions_of(Cell::Start)
            .chain(grid.positions_of(Cell::End))
            .next()
        {
            return Err(MazeError::InvalidLayout(format!(
                "grid already marks {stray} as {:?}",
                grid.cell_at(stray)
            )));
        }
        grid.set_cell(start, Cell::Start);
        grid.set_cell(end, Cell::End);
        Ok(Self { grid, start, end })
    }

    /// Parse maze from its text description
    ///
    /// - line 1: `width height`
    /// - line 2: `start_column start_row`
    /// - line 3: `end_column end_row`
    /// - `height` lines of `width` digits, `0` floor and `1` wall. Spaces
    ///   between digits are ignored.
    ///
    /// Returns [MazeError::MalformedMazeFile] on the first problem found.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

        let (width, height) = Self::parse_pair(lines.next(), 1, "maze dimensions")?;
        if width == 0 || height == 0 {
            return Err(MazeError::malformed(
                1,
                format!("maze dimensions must be positive, got {width}x{height}"),
            ));
        }
        let (column, row) = Self::parse_pair(lines.next(), 2, "start coordinates")?;
        let start = Position::new(column, row);
        let (column, row) = Self::parse_pair(lines.next(), 3, "end coordinates")?;
        let end = Position::new(column, row);

        for (line, name, position) in [(2, "start", start), (3, "end", end)] {
            if position.column >= width || position.row >= height {
                return Err(MazeError::malformed(
                    line,
                    format!("{name} {position} is outside the {width}x{height} maze"),
                ));
            }
        }

        let mut rows = Vec::new();
        for _ in 0..height {
            let Some((number, line)) = lines.next() else {
                return Err(MazeError::malformed(
                    3 + rows.len() + 1,
                    format!("expected {height} maze rows, found {}", rows.len()),
                ));
            };
            rows.push(Self::parse_row(line, number, width)?);
        }
        if let Some((number, _)) = lines.find(|(_, line)| !line.trim().is_empty()) {
            return Err(MazeError::malformed(
                number,
                format!("expected {height} maze rows, found more"),
            ));
        }

        let grid = Grid::from_rows(rows)
            .ok_or_else(|| MazeError::malformed(4, "maze has no squares"))?;
        let maze = Self::new(grid, start, end)?;
        info!(
            "Parsed {width}x{height} maze, start {}, end {}",
            maze.start, maze.end
        );
        Ok(maze)
    }

    /// Read and parse maze file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => MazeError::FileNotFound(path.to_path_buf()),
            _ => MazeError::Io(err),
        })?;
        Self::parse(&text)
    }

    fn parse_pair(
        line: Option<(usize, &str)>,
        number: usize,
        what: &str,
    ) -> Result<(usize, usize)> {
        let (number, line) =
            line.ok_or_else(|| MazeError::malformed(number, format!("missing {what}")))?;
        let values: Vec<&str> = line.split_whitespace().collect();
        let [a, b] = values[..] else {
            return Err(MazeError::malformed(
                number,
                format!("expected two numbers for {what}, got `{line}`"),
            ));
        };
        let parse = |value: &str| {
            value.parse::<usize>().map_err(|_| {
                MazeError::malformed(number, format!("invalid number `{value}` in {what}"))
            })
        };
        Ok((parse(a)?, parse(b)?))
    }

    fn parse_row(line: &str, number: usize, width: usize) -> Result<Vec<Cell>> {
        let row = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                Self::C_FLOOR => Ok(Cell::Floor),
                Self::C_WALL => Ok(Cell::Wall),
                other => Err(MazeError::malformed(
                    number,
                    format!("unexpected character `{other}`"),
                )),
            })
            .collect::<Result<Vec<_>>>()?;
        if row.len() != width {
            return Err(MazeError::malformed(
                number,
                format!("expected {width} squares, found {}", row.len()),
            ));
        }
        Ok(row)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Solve maze
    ///
    /// Walk from the start square with the backtracking wall-follower until
    /// the end square is reached or the walker gives up.
    pub fn solve(&self) -> MazeSolution {
        let mut solver = Solver::new(&self.grid, self.start, self.end);
        let ending_condition = match solver.run() {
            SolveState::Solved => EndingCondition::Solved,
            _ => EndingCondition::Unsolvable,
        };
        let visited = solver.history().len();
        let steps = solver.steps();
        let route = match ending_condition {
            EndingCondition::Solved => solver.into_route(),
            EndingCondition::Unsolvable => Vec::new(),
        };
        info!(
            "{:?} after {} steps, route of {} squares",
            ending_condition,
            steps,
            route.len()
        );
        MazeSolution {
            route,
            visited,
            steps,
            ending_condition,
        }
    }

    /// Copy of the grid with the solution route drawn on it.
    ///
    /// Returns `None` if the maze was not solved.
    pub fn draw_solution(&self, solution: &MazeSolution) -> Option<Grid> {
        match solution.ending_condition {
            EndingCondition::Solved => {
                let mut grid = self.grid.clone();
                grid.overlay_path(&solution.route);
                Some(grid)
            }
            EndingCondition::Unsolvable => None,
        }
    }

    /// Print outcome and, if solved, the maze with the route drawn on it
    pub fn print_report(&self, solution: &MazeSolution) {
        println!("{}", solution.summary());
        if let Some(grid) = self.draw_solution(solution) {
            println!();
            println!("{}", render::render(&grid));
        }
    }

    /// Draw the solution route on the terminal one square at a time
    ///
    /// ## Arguments
    /// - `solution`: Solution to the maze.
    /// - `step_ms`: Time step for each frame, milliseconds.
    pub fn playback(&self, solution: &MazeSolution, step_ms: usize) {
        fn print_grid(grid: &Grid) {
            print!("\x1B[2J\x1B[1;1H");
            println!("{}", render::render(grid));
        }

        let mut grid = self.grid.clone();
        print_grid(&grid);
        if solution.ending_condition == EndingCondition::Unsolvable {
            println!("{}", solution.summary());
            return;
        }
        for position in &solution.route {
            thread::sleep(Duration::from_millis(step_ms as u64));
            grid.overlay_path(std::slice::from_ref(position));
            print_grid(&grid);
        }
        println!("{}", solution.summary());
    }

    /// Write maze back in the text format read by [Self::parse]
    pub fn to_text(&self) -> String {
        let (width, height) = self.grid.dimensions();
        let rows = self.grid.rows().map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Wall => Self::C_WALL,
                    Cell::Floor | Cell::Start | Cell::End | Cell::Path => Self::C_FLOOR,
                })
                .join(" ")
        });
        [
            format!("{width} {height}"),
            format!("{} {}", self.start.column, self.start.row),
            format!("{} {}", self.end.column, self.end.row),
        ]
        .into_iter()
        .chain(rows)
        .join("\n")
    }
}

impl MazeSolution {
    /// One-line description of the outcome
    pub fn summary(&self) -> &'static str {
        match self.ending_condition {
            EndingCondition::Solved => "Maze has been solved. Solution below:",
            EndingCondition::Unsolvable => "Maze is not solveable",
        }
    }
}
