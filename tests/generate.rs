//! End-to-end tests for grid generation, from dictionary entries to the rendered grid.

use std::collections::HashSet;

use rand::{rngs::mock::StepRng, rngs::StdRng, SeedableRng};

use boggle::{Boggle, BoggleConfig, Direction, PlacedWord, Position};

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn config<'a>(num_rows: usize, num_columns: usize, words: &'a [String]) -> BoggleConfig<'a> {
    BoggleConfig {
        num_rows,
        num_columns,
        ..BoggleConfig::new(words)
    }
}

fn find<'a>(boggle: &'a Boggle, word: &str) -> &'a PlacedWord {
    boggle
        .words()
        .iter()
        .find(|placed| placed.word == word)
        .unwrap_or_else(|| panic!("{word} was not placed"))
}

fn is_adjacent(a: Position, b: Position) -> bool {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);

    dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
}

#[test]
fn places_words_using_adjacent_cells_only() {
    let words = strings(&["cat"]);
    let boggle = Boggle::new(&config(3, 3, &words), &mut StepRng::new(0, 0));
    let placed = find(&boggle, "CAT");

    assert_eq!(placed.original_word, "cat");
    assert_eq!(placed.path.len(), 3);
    assert!(placed.path.windows(2).all(|pair| is_adjacent(pair[0], pair[1])));
    assert_eq!(boggle.num_rows(), 3);
    assert_eq!(boggle.num_columns(), 3);
}

#[test]
fn honors_allowed_directions_by_excluding_diagonals() {
    let words = strings(&["cross"]);
    let directions = [Direction::N, Direction::S, Direction::E, Direction::W];
    let config = BoggleConfig {
        directions: &directions,
        ..config(4, 4, &words)
    };
    let boggle = Boggle::new(&config, &mut StepRng::new(0, 0));
    let placed = find(&boggle, "CROSS");

    let has_diagonal_step = placed
        .path
        .windows(2)
        .any(|pair| pair[0].x.abs_diff(pair[1].x) == 1 && pair[0].y.abs_diff(pair[1].y) == 1);

    assert!(!has_diagonal_step);
}

#[test]
fn does_not_reuse_cells_within_a_word() {
    let words = strings(&["puzzle"]);
    let boggle = Boggle::new(&config(4, 4, &words), &mut StdRng::seed_from_u64(42));
    let placed = find(&boggle, "PUZZLE");

    let distinct: HashSet<_> = placed.path.iter().collect();

    assert_eq!(distinct.len(), 6);
}

#[test]
fn returns_fewer_words_when_a_word_cannot_fit() {
    let words = strings(&["abcde"]);
    let boggle = Boggle::new(&config(2, 2, &words), &mut StepRng::new(0, 0));

    assert!(boggle.words().is_empty());
    assert_eq!(boggle.num_rows(), 2);
    assert_eq!(boggle.num_columns(), 2);
    assert!(boggle.grid().elements_row_major_iter().all(|c| c.is_ascii_uppercase()));
}

#[test]
fn keeps_dictionary_order_among_placed_words() {
    let words = strings(&["zebra", "", "toolongforthisgrid", "ant", "eel"]);
    let boggle = Boggle::new(&config(3, 4, &words), &mut StdRng::seed_from_u64(8));

    let placed: Vec<_> = boggle.words().iter().map(|p| p.word.as_str()).collect();
    let expected: Vec<_> = ["ZEBRA", "ANT", "EEL"]
        .into_iter()
        .filter(|w| placed.contains(w))
        .collect();

    assert_eq!(placed, expected);
    assert!(!placed.contains(&"TOOLONGFORTHISGRID"));
}

#[test]
fn east_only_still_allows_stepping_west() {
    let words = strings(&["abc"]);
    let directions = [Direction::E];
    let config = BoggleConfig {
        directions: &directions,
        ..config(1, 3, &words)
    };

    let forwards = vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)];
    let backwards = vec![Position::new(2, 0), Position::new(1, 0), Position::new(0, 0)];

    let paths: Vec<_> = (0..64)
        .map(|seed| {
            let boggle = Boggle::new(&config, &mut StdRng::seed_from_u64(seed));
            find(&boggle, "ABC").path.clone()
        })
        .collect();

    assert!(paths.iter().all(|path| *path == forwards || *path == backwards));
    assert!(paths.contains(&backwards));
}

#[test]
fn serializes_in_renderer_shape() {
    let words = strings(&["Hi!"]);
    let boggle = Boggle::new(&config(2, 3, &words), &mut StepRng::new(0, 0));
    let json = serde_json::to_value(&boggle).unwrap();

    let grid = json["grid"].as_array().unwrap();
    assert_eq!(grid.len(), 2);
    assert!(grid.iter().all(|row| row.as_array().unwrap().len() == 3));
    assert!(grid[0][0].as_str().unwrap().len() == 1);

    let word = &json["words"][0];
    assert_eq!(word["word"], "HI");
    assert_eq!(word["originalWord"], "Hi!");
    assert_eq!(word["path"].as_array().unwrap().len(), 2);
    assert!(word["path"][0]["x"].is_u64());
    assert!(word["path"][0]["y"].is_u64());
}

#[test]
fn display_renders_every_row() {
    let words = strings(&["tree", "leaf"]);
    let boggle = Boggle::new(&config(4, 4, &words), &mut StdRng::seed_from_u64(1));
    let text = boggle.to_string();

    assert_eq!(text.lines().count(), 4);

    for (row, line) in text.lines().enumerate() {
        let letters: String = line.split('|').next().unwrap().split_whitespace().collect();
        let expected: String = (0..4).map(|column| boggle[(row, column)]).collect();

        assert_eq!(letters, expected);
    }
}
