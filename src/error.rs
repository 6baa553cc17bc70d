use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum TollError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("reference id {0} not found in the given rows")]
    ReferenceNotFound(String),
    #[error("failed to parse record: {0}")]
    ParseFailure(String),
    #[error("unable to access '{path}': {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("failed to write output: {0}")]
    WriteFailure(#[from] std::io::Error),
}

impl From<csv::Error> for TollError {

    fn from(error: csv::Error) -> Self {
        TollError::InvalidInput(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TollError>;
