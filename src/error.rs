use thiserror::Error;

/// Engine error types.
///
/// The scoring core itself has no fatal conditions; every degenerate input
/// degrades to a defined sentinel. Errors exist only at the data-provider
/// boundary, and the search loop treats them the same as a series that is
/// too short to score.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("price data unavailable for {0}")]
    DataUnavailable(String),

    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
