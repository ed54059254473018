//! Errors from the fallible edges of the crate. Generating a grid never fails; reading input and writing output can.

use std::{io, path::PathBuf};

/// An error that happened while loading input for, or rendering, a boggle grid.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dictionary file couldn't be read.
    #[error("could not read dictionary {}: {}", .path.display(), .source)]
    ReadDictionary {
        /// The file that was being read.
        path: PathBuf,

        /// What went wrong.
        #[source]
        source: io::Error,
    },

    /// The grid couldn't be serialized to JSON.
    #[error("could not serialize grid: {0}")]
    Serialize(#[from] serde_json::Error),
}
