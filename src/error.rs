//! crate-wide error type. Every reader and array helper reports failures through [`SciError`]
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SciError {
    /// file could not be opened or read
    #[error("Cannot open file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// illegal or conflicting combination of options
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
    /// a parsed line holds fewer cells than the highest selected column index
    #[error("Line has not enough columns to index: {line}")]
    NotEnoughColumns { line: String },
    #[error("No columns selected: {0}")]
    NoColumns(String),
    #[error("Variable {name} not in file {file}")]
    UnknownVariable { name: String, file: PathBuf },
    #[error("Cannot parse '{cell}' as number in line {line}")]
    Parse { cell: String, line: usize },
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),
    /// functionality compiled out (missing cargo feature)
    #[error("{0}")]
    Unsupported(String),
    /// failure reported by an HDF backend library
    #[error("HDF error in {file}: {message}")]
    Hdf { file: PathBuf, message: String },
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SciError>;

impl SciError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SciError::Io {
            path: path.into(),
            source,
        }
    }
}
