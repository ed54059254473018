#![warn(missing_docs)]

//! # Boggle grids
//!
//! A crate that generates boggle-style word grids. Each word is spelled along a path of adjacent cells, which may
//! bend in any of the allowed directions, and words may cross each other wherever they share a letter. Cells no
//! word passes through are filled with random letters.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let words = [String::from("cat"), String::from("tack")];
//! let config = boggle::BoggleConfig {
//!     num_rows: 4,
//!     num_columns: 4,
//!     ..boggle::BoggleConfig::new(&words)
//! };
//!
//! let boggle = boggle::Boggle::new(&config, &mut StdRng::seed_from_u64(1));
//!
//! assert_eq!(boggle.num_rows(), 4);
//! assert!(boggle.words().len() <= 2);
//! ```

use std::{fmt::Display, ops::Index};

use array2d::Array2D;
use rand::Rng;
use serde::{Serialize, Serializer};

pub mod dictionary;
pub mod direction;
pub mod errors;
pub mod grid;
pub mod log;
mod placer;

pub use dictionary::{clamp_dimension, load_dictionary, normalize_word, parse_dimension};
pub use direction::{resolve_labels, resolve_offsets, Direction, Offset};
pub use errors::Error;
pub use grid::{NeighborCache, Position};
pub use placer::DEFAULT_MAX_ATTEMPTS;

use grid::Board;

/// The configuration for a boggle grid. See [`Boggle::new`] for details.
#[derive(Clone, Debug)]
pub struct BoggleConfig<'a> {
    /// The number of rows. Clamped to `1..=50`.
    pub num_rows: usize,

    /// The number of columns. Clamped to `1..=50`.
    pub num_columns: usize,

    /// The dictionary. Entries are placed in order; those that aren't placed are left out of the result.
    pub words: &'a [String],

    /// The directions a path may step in. Each direction also allows its opposite. When empty, all eight
    /// directions are allowed.
    pub directions: &'a [Direction],

    /// How many randomized passes over the grid are made for each word before giving up on it.
    pub max_attempts_per_word: usize,
}

impl<'a> BoggleConfig<'a> {
    /// A 15 row by 20 column configuration for `words`, with every direction allowed.
    pub fn new(words: &'a [String]) -> Self {
        Self {
            num_rows: 15,
            num_columns: 20,
            words,
            directions: &Direction::ALL,
            max_attempts_per_word: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// A word that was placed in the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWord {
    /// The word as spelled in the grid: uppercase letters only.
    pub word: String,

    /// The dictionary entry the word came from.
    pub original_word: String,

    /// The cell of each letter, in order.
    pub path: Vec<Position>,
}

/// A boggle grid: a fully filled grid of letters and the words hidden in it.
#[derive(Clone, Debug)]
pub struct Boggle {
    grid: Array2D<char>,
    words: Vec<PlacedWord>,
}

impl Boggle {
    /// Generates a boggle grid, drawing every random choice from `rng`.
    ///
    /// Dictionary entries are normalized with [normalize_word]; entries left empty are skipped. Each remaining word
    /// is then searched for in dictionary order, sharing cells with earlier words only where the letters agree.
    /// Words longer than the grid has cells, or for which no path is found within
    /// `config.max_attempts_per_word` passes, are left out. Not finding room for a word isn't an error: compare
    /// [Boggle::words] to the dictionary to see what was dropped.
    ///
    /// Given the same configuration and an identically seeded `rng`, the result is always the same.
    pub fn new<R: Rng + ?Sized>(config: &BoggleConfig<'_>, rng: &mut R) -> Self {
        let num_rows = clamp_dimension(config.num_rows);
        let num_columns = clamp_dimension(config.num_columns);

        let offsets = resolve_offsets(config.directions);
        let cache = NeighborCache::new(num_rows, num_columns, &offsets);
        let mut board = Board::new(num_rows, num_columns);

        let mut words = Vec::new();

        for original in config.words {
            let word = normalize_word(original);

            if word.is_empty() {
                ::log::debug!("skipping {original:?}: no letters");
                continue;
            }

            let letters: Vec<char> = word.chars().collect();

            match placer::place_word(&letters, &mut board, &cache, rng, config.max_attempts_per_word) {
                Some(path) => {
                    ::log::debug!("placed {word} at {path:?}");

                    words.push(PlacedWord {
                        word,
                        original_word: original.clone(),
                        path,
                    });
                }
                None => ::log::debug!("could not place {word}"),
            }
        }

        ::log::debug!(
            "placed {} of {} words in a {num_rows}x{num_columns} grid",
            words.len(),
            config.words.len()
        );

        Self {
            grid: board.fill(rng),
            words,
        }
    }

    /// Generates a boggle grid using the thread-local random number generator.
    pub fn generate(config: &BoggleConfig<'_>) -> Self {
        Self::new(config, &mut rand::thread_rng())
    }

    /// The number of rows in the grid.
    pub fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    /// The number of columns in the grid.
    pub fn num_columns(&self) -> usize {
        self.grid.num_columns()
    }

    /// Provides a reference to the inner grid of letters.
    pub fn grid(&self) -> &Array2D<char> {
        &self.grid
    }

    /// Gets the letter at the specified cell, returning [`Option::None`] if it's out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        self.grid.get(row, column).copied()
    }

    /// The placed words, in dictionary order.
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// The index into [Boggle::words] of the word passing through a cell. When several words share the cell, the
    /// last of them is returned.
    pub fn word_index_at(&self, row: usize, column: usize) -> Option<usize> {
        let pos = Position::new(column, row);

        self.words.iter().rposition(|placed| placed.path.contains(&pos))
    }
}

impl Index<(usize, usize)> for Boggle {
    type Output = char;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.grid[index]
    }
}

impl Display for Boggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words_iter = self.words.iter().map(|placed| placed.original_word.as_str());

        for row in self.grid.rows_iter() {
            for &ch in row {
                write!(f, "{} ", ch)?;
            }

            writeln!(f, "| {}", words_iter.next().unwrap_or(""))?;
        }

        // Words that don't fit alongside the rows are listed underneath.
        for word in words_iter {
            writeln!(f, "{:width$}| {}", "", word, width = self.num_columns() * 2)?;
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct BoggleRepr<'a> {
    grid: Vec<Vec<String>>,
    words: &'a [PlacedWord],
}

impl Serialize for Boggle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        BoggleRepr {
            grid: self
                .grid
                .rows_iter()
                .map(|row| row.map(|ch| ch.to_string()).collect())
                .collect(),
            words: &self.words,
        }
        .serialize(serializer)
    }
}
