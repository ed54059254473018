//! Turning caller input into something placeable: word normalization, grid dimensions and dictionary files.

use std::{fs, path::Path};

use crate::Error;

/// The smallest number of rows or columns a grid can have.
pub const MIN_DIMENSION: usize = 1;

/// The largest number of rows or columns a grid can have.
pub const MAX_DIMENSION: usize = 50;

/// Uppercases `word` and drops everything that isn't an ASCII letter.
///
/// ```
/// assert_eq!(boggle::normalize_word("Jack-o'-lantern"), "JACKOLANTERN");
/// assert_eq!(boggle::normalize_word("42!"), "");
/// ```
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Clamps a grid dimension into `MIN_DIMENSION..=MAX_DIMENSION`.
pub fn clamp_dimension(value: usize) -> usize {
    value.clamp(MIN_DIMENSION, MAX_DIMENSION)
}

/// Reads a grid dimension from loosely formatted text and clamps it.
///
/// The leading integer is used and anything after it ignored, so `"12 rows"` gives 12. Text without a leading
/// integer, zero and negative numbers all give [MIN_DIMENSION].
pub fn parse_dimension(input: &str) -> usize {
    let input = input.trim_start();
    let (negative, digits) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let digits_len = digits.bytes().take_while(u8::is_ascii_digit).count();

    if negative || digits_len == 0 {
        return MIN_DIMENSION;
    }

    // Anything too large for a usize is far past the maximum anyway.
    let value = digits[..digits_len].parse().unwrap_or(usize::MAX);

    clamp_dimension(value)
}

/// Loads a dictionary from a text file with one entry per line.
///
/// Lines are trimmed and blank lines skipped. Entries are otherwise kept as written; normalization happens when
/// the grid is generated.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| Error::ReadDictionary {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    log::debug!("loaded {} entries from {}", words.len(), path.display());

    Ok(words)
}
