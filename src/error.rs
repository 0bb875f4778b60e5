use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WorkoutError {
    #[error("Unsupported workout type: {0:?}")]
    UnsupportedType(String),
    #[error("Workout type {tag} expects {expected} values, got {got}")]
    WrongArity {
        tag: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("Invalid {field} = {value}: {reason}")]
    InvalidField {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Data file not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("Invalid JSON in data file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("I/O error on data file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
