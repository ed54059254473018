//! Grid storage: the board words are written into, the neighbor cache, and the final filler pass.

use array2d::Array2D;
use rand::Rng;
use serde::Serialize;

use crate::direction::Offset;

/// The letters used to fill cells that no word passes through.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A cell on the grid. `x` is the column and `y` the row, both starting at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    /// The column.
    pub x: usize,

    /// The row.
    pub y: usize,
}

impl Position {
    /// Creates a position from a column and a row.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The `(row, column)` pair used to index an [Array2D].
    pub fn index(self) -> (usize, usize) {
        (self.y, self.x)
    }

    /// Steps by `offset`, returning [Option::None] if the result leaves a grid of the given size.
    pub fn step(self, offset: Offset, num_rows: usize, num_columns: usize) -> Option<Self> {
        let x = self.x.checked_add_signed(offset.dx)?;
        let y = self.y.checked_add_signed(offset.dy)?;

        (x < num_columns && y < num_rows).then_some(Self { x, y })
    }
}

/// The grid while words are being placed. Cells hold a letter once some word passes through them.
#[derive(Clone, Debug)]
pub(crate) struct Board {
    cells: Array2D<Option<char>>,
}

impl Board {
    pub fn new(num_rows: usize, num_columns: usize) -> Self {
        Self {
            cells: Array2D::filled_with(None, num_rows, num_columns),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.cells.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.cells.num_columns()
    }

    pub fn num_cells(&self) -> usize {
        self.cells.num_elements()
    }

    /// Every position on the board in row-major order.
    pub fn positions(&self) -> Vec<Position> {
        let num_columns = self.num_columns();

        (0..self.num_rows())
            .flat_map(|y| (0..num_columns).map(move |x| Position::new(x, y)))
            .collect()
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells[pos.index()]
    }

    /// Whether `letter` may be written at `pos`: the cell is empty or already holds it.
    pub fn accepts(&self, pos: Position, letter: char) -> bool {
        match self.get(pos) {
            Some(existing) => existing == letter,
            None => true,
        }
    }

    pub fn set(&mut self, pos: Position, letter: char) {
        self.cells[pos.index()] = Some(letter);
    }

    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Consumes the board, giving every empty cell a uniformly random letter.
    pub fn fill<R: Rng + ?Sized>(self, rng: &mut R) -> Array2D<char> {
        let mut grid = Array2D::filled_with(' ', self.num_rows(), self.num_columns());

        for (row, cells) in self.cells.rows_iter().enumerate() {
            for (column, cell) in cells.enumerate() {
                grid[(row, column)] = match cell {
                    Some(letter) => *letter,
                    None => random_letter(rng),
                };
            }
        }

        grid
    }

    #[cfg(test)]
    pub fn cells(&self) -> &Array2D<Option<char>> {
        &self.cells
    }
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    ALPHABET[rng.gen_range(0..ALPHABET.len())] as char
}

/// For every cell, the in-bounds cells reachable with one step along the allowed offsets.
///
/// Built once per generation run and never changed afterwards.
#[derive(Clone, Debug)]
pub struct NeighborCache {
    neighbors: Array2D<Vec<Position>>,
}

impl NeighborCache {
    /// Computes the neighbors of every cell in a `num_rows` x `num_columns` grid.
    pub fn new(num_rows: usize, num_columns: usize, offsets: &[Offset]) -> Self {
        let mut neighbors = Array2D::filled_with(Vec::new(), num_rows, num_columns);

        for y in 0..num_rows {
            for x in 0..num_columns {
                let pos = Position::new(x, y);

                neighbors[pos.index()] = offsets
                    .iter()
                    .filter_map(|&offset| pos.step(offset, num_rows, num_columns))
                    .collect();
            }
        }

        Self { neighbors }
    }

    /// The neighbors of `pos`, in the order the offsets were given.
    pub fn neighbors(&self, pos: Position) -> &[Position] {
        &self.neighbors[pos.index()]
    }

    /// The number of rows the cache was built for.
    pub fn num_rows(&self) -> usize {
        self.neighbors.num_rows()
    }

    /// The number of columns the cache was built for.
    pub fn num_columns(&self) -> usize {
        self.neighbors.num_columns()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::mock::StepRng, rngs::StdRng, SeedableRng};

    use super::*;
    use crate::direction::{resolve_offsets, Direction};

    #[test]
    fn corner_has_three_neighbors_with_all_directions() {
        let cache = NeighborCache::new(3, 3, &resolve_offsets(&Direction::ALL));

        assert_eq!(cache.neighbors(Position::new(0, 0)).len(), 3);
        assert_eq!(cache.neighbors(Position::new(2, 2)).len(), 3);
        assert_eq!(cache.neighbors(Position::new(1, 1)).len(), 8);
        assert_eq!(cache.neighbors(Position::new(1, 0)).len(), 5);
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let cache = NeighborCache::new(2, 5, &resolve_offsets(&Direction::ALL));

        for y in 0..2 {
            for x in 0..5 {
                for n in cache.neighbors(Position::new(x, y)) {
                    assert!(n.x < 5 && n.y < 2);
                }
            }
        }
    }

    #[test]
    fn horizontal_only_neighbors() {
        let cache = NeighborCache::new(3, 3, &resolve_offsets(&[Direction::E]));

        assert_eq!(
            cache.neighbors(Position::new(1, 1)),
            &[Position::new(2, 1), Position::new(0, 1)]
        );
        assert_eq!(cache.neighbors(Position::new(0, 2)), &[Position::new(1, 2)]);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let cache = NeighborCache::new(1, 1, &resolve_offsets(&Direction::ALL));

        assert!(cache.neighbors(Position::new(0, 0)).is_empty());
    }

    #[test]
    fn step_rejects_out_of_bounds() {
        let origin = Position::new(0, 0);

        assert_eq!(origin.step(Offset { dx: -1, dy: 0 }, 3, 3), None);
        assert_eq!(origin.step(Offset { dx: 1, dy: 1 }, 3, 3), Some(Position::new(1, 1)));
        assert_eq!(Position::new(2, 0).step(Offset { dx: 1, dy: 0 }, 3, 3), None);
    }

    #[test]
    fn fill_keeps_placed_letters() {
        let mut board = Board::new(2, 3);
        board.set(Position::new(2, 1), 'Q');

        let grid = board.fill(&mut StdRng::seed_from_u64(7));

        assert_eq!(grid.num_rows(), 2);
        assert_eq!(grid.num_columns(), 3);
        assert_eq!(grid[(1, 2)], 'Q');
        assert!(grid.elements_row_major_iter().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn fill_uses_the_given_rng() {
        let grid = Board::new(2, 2).fill(&mut StepRng::new(0, 0));

        assert!(grid.elements_row_major_iter().all(|&c| c == 'A'));
    }

    #[test]
    fn accepts_empty_or_matching_cells() {
        let mut board = Board::new(1, 2);
        let pos = Position::new(0, 0);

        assert!(board.accepts(pos, 'X'));
        board.set(pos, 'X');
        assert!(board.accepts(pos, 'X'));
        assert!(!board.accepts(pos, 'Y'));
        board.clear(pos);
        assert_eq!(board.get(pos), None);
    }
}
