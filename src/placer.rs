//! Backtracking search for a path of adjacent cells that can spell a word.

use array2d::Array2D;
use rand::{seq::SliceRandom, Rng};

use crate::grid::{Board, NeighborCache, Position};

/// How many randomized passes over the start cells are made for one word before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 200;

/// Tries to write `letters` onto the board along a path of adjacent cells.
///
/// Cells already holding a letter can be reused only if the letter matches. On success the word stays written on
/// the board and its path is returned. On failure the board is left exactly as it was.
pub(crate) fn place_word<R: Rng + ?Sized>(
    letters: &[char],
    board: &mut Board,
    cache: &NeighborCache,
    rng: &mut R,
    max_attempts: usize,
) -> Option<Vec<Position>> {
    let first = *letters.first()?;

    if letters.len() > board.num_cells() {
        return None;
    }

    let mut starts = board.positions();
    let mut search = Search {
        letters,
        visited: Array2D::filled_with(false, board.num_rows(), board.num_columns()),
        path: Vec::with_capacity(letters.len()),
        board,
        cache,
        rng,
    };

    for attempt in 0..max_attempts {
        starts.shuffle(&mut *search.rng);

        for &start in &starts {
            if !search.board.accepts(start, first) {
                continue;
            }

            if search.extend(start, 0) {
                return Some(search.path.iter().map(|step| step.pos).collect());
            }
        }

        log::trace!("attempt {} found no path for {:?}", attempt + 1, letters);
    }

    None
}

#[derive(Clone, Copy, Debug)]
struct Step {
    pos: Position,
    // Whether this step wrote the letter, as opposed to reusing a matching one.
    wrote: bool,
}

struct Search<'a, R: ?Sized> {
    letters: &'a [char],
    board: &'a mut Board,
    cache: &'a NeighborCache,
    rng: &'a mut R,
    visited: Array2D<bool>,
    path: Vec<Step>,
}

impl<R: Rng + ?Sized> Search<'_, R> {
    /// Depth-first search placing `letters[index..]` starting at `pos`.
    ///
    /// Returns false with the board, `visited` and `path` restored to their state on entry.
    fn extend(&mut self, pos: Position, index: usize) -> bool {
        let letter = self.letters[index];

        if self.visited[pos.index()] || !self.board.accepts(pos, letter) {
            return false;
        }

        let wrote = self.board.get(pos).is_none();

        self.visited[pos.index()] = true;
        self.path.push(Step { pos, wrote });

        if wrote {
            self.board.set(pos, letter);
        }

        if index + 1 == self.letters.len() {
            return true;
        }

        let mut neighbors = self.cache.neighbors(pos).to_vec();
        neighbors.shuffle(&mut *self.rng);

        for next in neighbors {
            if self.extend(next, index + 1) {
                return true;
            }
        }

        if wrote {
            self.board.clear(pos);
        }

        self.visited[pos.index()] = false;
        self.path.pop();

        false
    }
}
