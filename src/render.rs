//! Text rendering of the maze

use itertools::Itertools;

use crate::grid::{Cell, Grid};

/// Display glyph of a cell
pub fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Floor => ' ',
        Cell::Wall => '#',
        Cell::Start => 'S',
        Cell::End => 'E',
        Cell::Path => 'X',
    }
}

/// Render grid row by row, one line per row
pub fn render(grid: &Grid) -> String {
    grid.rows()
        .map(|row| row.iter().copied().map(glyph).join(""))
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::grid::{Cell, Grid};

    #[test]
    fn renders_all_glyphs() {
        let grid = Grid::from_rows(vec![
            vec![Cell::Start, Cell::Path, Cell::Wall],
            vec![Cell::Floor, Cell::Path, Cell::End],
        ])
        .unwrap();

        assert_eq!(render(&grid), "SX#\n XE");
    }
}
