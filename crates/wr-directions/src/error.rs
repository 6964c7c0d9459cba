use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectionsError {
    #[error("travel rate must be finite and positive, got {0}")]
    InvalidSpeed(f64),

    #[error("too many decimal places for driving distances: {0}")]
    InvalidDecimals(usize),

    #[error("unknown travel mode '{0}'")]
    UnknownMode(String),

    #[cfg(feature = "serde")]
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type DirectionsResult<T> = Result<T, DirectionsError>;
