use thiserror::Error;

/// Error type that captures common tracker failures.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid month key {0:?}, expected \"YYYY-MM\"")]
    InvalidMonthKey(String),
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
}
