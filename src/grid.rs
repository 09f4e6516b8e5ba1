//! Cell grid of the maze

use std::fmt;

/// State of a single maze square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Open square
    Floor,
    /// Impassable square
    Wall,
    /// Where the walker begins
    Start,
    /// The goal
    End,
    /// Square on the drawn solution route
    Path,
}

/// Location in the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Fixed-size grid of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Grid of `width` x `height` cells, all set to `fill`
    pub fn new(width: usize, height: usize, fill: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Build grid from rows of cells.
    ///
    /// Returns `None` if the rows are empty or not all of the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Option<Self> {
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let height = rows.len();
        Some(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether `position` lies inside the grid
    pub fn contains(&self, position: Position) -> bool {
        position.column < self.width && position.row < self.height
    }

    /// Cell at `position`.
    ///
    /// Panics if the position is outside the grid.
    pub fn cell_at(&self, position: Position) -> Cell {
        self.cells[self.index(position)]
    }

    /// Overwrite the cell at `position`.
    ///
    /// Only the solution overlay writes into a grid after construction, and
    /// it never touches walls or the start and end squares.
    pub fn set_cell(&mut self, position: Position, cell: Cell) {
        let index = self.index(position);
        debug_assert!(
            cell != Cell::Path
                || !matches!(self.cells[index], Cell::Wall | Cell::Start | Cell::End),
            "path drawn over {:?} at {}",
            self.cells[index],
            position
        );
        self.cells[index] = cell;
    }

    /// Mark every floor square of `route` as [Cell::Path].
    ///
    /// Squares that are not floor (the start square can appear in a route
    /// that wrapped back onto it) are left untouched.
    pub fn overlay_path(&mut self, route: &[Position]) {
        for &position in route {
            if self.cell_at(position) == Cell::Floor {
                self.set_cell(position, Cell::Path);
            }
        }
    }

    /// Positions of all cells with the given state, row-major
    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == cell)
            .map(|(i, _)| Position::new(i % self.width, i / self.width))
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    fn index(&self, position: Position) -> usize {
        assert!(
            self.contains(position),
            "position {} outside {}x{} grid",
            position,
            self.width,
            self.height
        );
        position.row * self.width + position.column
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Grid, Position};

    #[test]
    fn from_rows_is_row_major() {
        let grid = Grid::from_rows(vec![
            vec![Cell::Floor, Cell::Wall, Cell::Floor],
            vec![Cell::Start, Cell::Floor, Cell::End],
        ])
        .unwrap();

        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.cell_at(Position::new(1, 0)), Cell::Wall);
        assert_eq!(grid.cell_at(Position::new(0, 1)), Cell::Start);
        assert_eq!(grid.cell_at(Position::new(2, 1)), Cell::End);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        assert!(Grid::from_rows(vec![vec![Cell::Floor; 3], vec![Cell::Floor; 2]]).is_none());
        assert!(Grid::from_rows(vec![]).is_none());
        assert!(Grid::from_rows(vec![vec![]]).is_none());
    }

    #[test]
    fn overlay_marks_only_floor() {
        let mut grid = Grid::new(3, 1, Cell::Floor);
        grid.set_cell(Position::new(0, 0), Cell::Start);
        grid.set_cell(Position::new(2, 0), Cell::End);

        grid.overlay_path(&[Position::new(0, 0), Position::new(1, 0)]);

        assert_eq!(grid.cell_at(Position::new(0, 0)), Cell::Start);
        assert_eq!(grid.cell_at(Position::new(1, 0)), Cell::Path);
        assert_eq!(grid.cell_at(Position::new(2, 0)), Cell::End);
    }

    #[test]
    fn positions_of_finds_cells() {
        let mut grid = Grid::new(4, 3, Cell::Floor);
        grid.set_cell(Position::new(3, 2), Cell::End);

        let ends: Vec<_> = grid.positions_of(Cell::End).collect();
        assert_eq!(ends, vec![Position::new(3, 2)]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_access_panics() {
        let grid = Grid::new(2, 2, Cell::Floor);
        grid.cell_at(Position::new(2, 0));
    }
}
