//! Error types for maze loading

use std::path::PathBuf;

/// Result type alias
pub type Result<T> = std::result::Result<T, MazeError>;

/// Errors raised before a maze can be solved
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    /// No maze file was given on the command line
    #[error("Please pass file path for the desired maze")]
    MissingArgument,

    /// Maze file does not exist
    #[error("The provided file path `{}` is not valid or does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// Maze description could not be parsed
    #[error("Malformed maze file, line {line}: {reason}")]
    MalformedMazeFile {
        /// 1-based line number where parsing failed
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Grid and endpoints do not form a valid maze
    #[error("Invalid maze layout: {0}")]
    InvalidLayout(String),

    /// Other I/O failure while reading the maze
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MazeError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        MazeError::MalformedMazeFile {
            line,
            reason: reason.into(),
        }
    }
}
