//! Map generation

use anyhow::{bail, Context};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::grid::{Cell, Grid, Position};
use crate::Maze;

/// Maze generator for additional maps.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    const DIRECTIONS: [(isize, isize); 4] = [(0, 2), (2, 0), (0, -2), (-2, 0)];
    const MIN_SIZE: usize = 5;

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate simple imperfect maze (maze with loops)
    ///
    /// Passages are carved between odd squares, so the outer border stays
    /// walled. Start and end are placed on two distinct carved squares.
    pub fn generate_maze(&mut self, width: usize, height: usize) -> anyhow::Result<Maze> {
        if width < Self::MIN_SIZE || height < Self::MIN_SIZE {
            bail!(
                "Maze must be at least {0}x{0}, got {width}x{height}",
                Self::MIN_SIZE
            );
        }
        let mut grid = Grid::new(width, height, Cell::Wall);

        // Odd squares inside the border
        let odd_cells: Vec<Position> = (1..height - 1)
            .step_by(2)
            .flat_map(|row| {
                (1..width - 1)
                    .step_by(2)
                    .map(move |column| Position::new(column, row))
            })
            .collect();

        let origin = *odd_cells
            .choose(&mut self.random)
            .context("No room to carve a maze")?;
        grid.set_cell(origin, Cell::Floor);
        self.build_maze(&mut grid, origin);

        let mut endpoints = odd_cells.choose_multiple(&mut self.random, 2);
        let (Some(&start), Some(&end)) = (endpoints.next(), endpoints.next()) else {
            bail!("No room for both start and end in {width}x{height} maze");
        };
        Ok(Maze::new(grid, start, end)?)
    }

    /// Build maze recursively
    ///
    /// From current position, go into random directions. Carve out walls
    /// if there is wall behind carved area (or at random, skip this check).
    /// This randomness allows creation of imperfect mazes.
    fn build_maze(&mut self, grid: &mut Grid, position: Position) {
        let mut directions = Self::DIRECTIONS;
        directions.shuffle(&mut self.random);

        let (width, height) = grid.dimensions();
        for (dx, dy) in directions {
            let (Some(nx), Some(ny)) = (
                position.column.checked_add_signed(dx),
                position.row.checked_add_signed(dy),
            ) else {
                continue;
            };
            let next = Position::new(nx, ny);

            if nx < width - 1
                && ny < height - 1
                && (grid.cell_at(next) == Cell::Wall || self.random.gen_bool(0.05))
            {
                // Remove wall between current cell and neighbor
                let between = Position::new(
                    position.column.wrapping_add_signed(dx / 2),
                    position.row.wrapping_add_signed(dy / 2),
                );
                grid.set_cell(between, Cell::Floor);
                let fresh = grid.cell_at(next) == Cell::Wall;
                grid.set_cell(next, Cell::Floor);

                // Recurse to continue generating maze
                if fresh {
                    self.build_maze(grid, next);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{maze_generator::MazeGenerator, Cell, EndingCondition, Maze, Position};

    #[test]
    fn generate_parseable_maze() {
        let mut gen = MazeGenerator::new(Some(0));
        let maze = gen.generate_maze(15, 15).unwrap();

        let parsed = Maze::parse(&maze.to_text()).unwrap();
        assert_eq!(parsed, maze);
    }

    #[test]
    fn same_seed_same_maze() {
        let a = MazeGenerator::new(Some(7)).generate_maze(11, 9).unwrap();
        let b = MazeGenerator::new(Some(7)).generate_maze(11, 9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn border_stays_walled() {
        let maze = MazeGenerator::new(Some(3)).generate_maze(9, 7).unwrap();
        let grid = maze.grid();
        for column in 0..9 {
            assert_eq!(grid.cell_at(Position::new(column, 0)), Cell::Wall);
            assert_eq!(grid.cell_at(Position::new(column, 6)), Cell::Wall);
        }
        assert_ne!(maze.start(), maze.end());
    }

    #[test]
    fn generated_mazes_terminate() {
        for seed in 0..20 {
            let maze = MazeGenerator::new(Some(seed)).generate_maze(13, 11).unwrap();
            let solution = maze.solve();
            if solution.ending_condition == EndingCondition::Solved {
                assert!(maze.draw_solution(&solution).is_some());
            }
        }
    }

    #[test]
    fn rejects_tiny_maze() {
        assert!(MazeGenerator::new(Some(0)).generate_maze(4, 9).is_err());
    }
}
