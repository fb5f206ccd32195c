//! Error types shared by the solvers, the file formats and the experiment harness.

use thiserror::Error;

/// Errors that can occur while reading instances, solving, or running experiments.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The instance text is short or contains something other than a
    /// non-negative integer where one was expected.
    #[error("Malformed input: {0}")]
    Parse(String),

    /// A matrix row does not have as many entries as the matrix has rows.
    #[error("Matrix of size {size} is not square: row {row} has {found} entries")]
    NotSquare {
        size: usize,
        row: usize,
        found: usize,
    },

    /// The pattern graph cannot be embedded injectively into a smaller target.
    #[error("Pattern graph has {pattern} vertices but target graph only has {target}")]
    PatternTooLarge { pattern: usize, target: usize },

    /// A base permutation is not a permutation of the pattern vertices.
    #[error("Invalid base permutation: {0}")]
    InvalidPermutation(String),

    /// The experiment configuration cannot produce valid trials.
    #[error("Invalid experiment configuration: {0}")]
    Config(String),

    /// Writing the CSV result table failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// The worker thread pool could not be started.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A search finished without scoring a single assignment.
    #[error("Internal: {0} search evaluated no assignment")]
    NoCandidate(&'static str),

    /// A trial slot was left empty after every worker finished.
    #[error("Internal: no record produced for trial {0}")]
    MissingRecord(usize),
}

impl Error {
    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
