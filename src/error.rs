use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown census division: {0:?}")]
    UnknownDivision(String),

    #[error("unknown column: {0:?}")]
    UnknownColumn(String),

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("dataset fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("csv decode failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
