use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use boggle::{Boggle, BoggleConfig, Direction, Error};

/// Generate a boggle grid: words are hidden along paths of adjacent cells.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Words to hide in the grid, in addition to any from --dictionary
    words: Vec<String>,

    /// File with one word per line
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Number of rows (1-50)
    #[arg(short, long, default_value = "15", value_parser = parse_dimension)]
    rows: usize,

    /// Number of columns (1-50)
    #[arg(short, long, default_value = "20", value_parser = parse_dimension)]
    cols: usize,

    /// Comma-separated compass directions words may step in (N, NE, E, SE, S, SW, W, NW)
    #[arg(long, value_delimiter = ',', default_value = "N,NE,E,SE,S,SW,W,NW")]
    directions: Vec<String>,

    /// Seed for a reproducible grid
    #[arg(short, long)]
    seed: Option<u64>,

    /// Randomized passes over the grid per word before giving up on it
    #[arg(long, default_value_t = boggle::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Print the grid as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn parse_dimension(input: &str) -> Result<usize, String> {
    Ok(boggle::parse_dimension(input))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var("BOGGLE_DEBUG").is_ok();
    boggle::log::init_logger(debug_enabled);

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<(), Error> {
    let mut words = match &cli.dictionary {
        Some(path) => boggle::load_dictionary(path)?,
        None => Vec::new(),
    };
    words.extend(cli.words);

    let directions: Vec<Direction> = boggle::resolve_labels(&cli.directions);

    if directions.len() < cli.directions.len() {
        log::warn!("ignoring unknown directions in {:?}", cli.directions);
    }

    let config = BoggleConfig {
        num_rows: cli.rows,
        num_columns: cli.cols,
        words: &words,
        directions: &directions,
        max_attempts_per_word: cli.max_attempts,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let boggle = Boggle::new(&config, &mut rng);

    if boggle.words().len() < words.len() {
        log::info!("placed {} of {} words", boggle.words().len(), words.len());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&boggle)?);
    } else {
        print!("{}", boggle);
    }

    Ok(())
}
