//! Error types and utilities.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
/// Represents an error that can occur while generating logs.
pub enum Error {
    /// An I/O error occurred.
    #[error("i/o error")]
    Io(#[from] std::io::Error),

    /// An I/O error occurred on a known path.
    #[error("i/o error on {}", path.display())]
    IoAt {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No unused filename was found within the retry bound.
    #[error("no unused filename found after {attempts} attempts")]
    NamesExhausted { attempts: usize },

    /// A catalog list that is sampled from is empty.
    #[error("catalog list `{0}` is empty")]
    EmptyCatalog(&'static str),

    #[error("invalid level weights: {0}")]
    InvalidWeights(String),
}

/// A specialized [Result] type for this crate's operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) trait IoContext<T> {
    fn at(self, path: &std::path::Path) -> Result<T>;
}

impl<T> IoContext<T> for std::result::Result<T, std::io::Error> {
    fn at(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|source| Error::IoAt {
            path: path.to_path_buf(),
            source,
        })
    }
}
