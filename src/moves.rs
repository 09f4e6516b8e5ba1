//! Moving between squares on a wrap-around grid
//!
//! The maze is a torus: walking off one edge re-enters from the opposite
//! edge. Only walls block movement.

use crate::grid::{Cell, Grid, Position};

/// Compass direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Rotation order in which the walker tries directions
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position one square in this direction, wrapping around the edges
    pub fn advance(self, position: Position, width: usize, height: usize) -> Position {
        let Position { column, row } = position;
        match self {
            Direction::North => Position::new(column, if row == 0 { height - 1 } else { row - 1 }),
            Direction::East => Position::new(if column + 1 == width { 0 } else { column + 1 }, row),
            Direction::South => Position::new(column, if row + 1 == height { 0 } else { row + 1 }),
            Direction::West => Position::new(if column == 0 { width - 1 } else { column - 1 }, row),
        }
    }
}

/// Result of an attempted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Destination is a wall
    Blocked,
    /// Destination is passable
    Moved(Position),
}

/// Try to move from `position` one square in `direction`
pub fn step(grid: &Grid, position: Position, direction: Direction) -> Outcome {
    let (width, height) = grid.dimensions();
    let target = direction.advance(position, width, height);
    match grid.cell_at(target) {
        Cell::Wall => Outcome::Blocked,
        Cell::Floor | Cell::Start | Cell::End | Cell::Path => Outcome::Moved(target),
    }
}
