use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("HTTP client setup failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
