use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RarefactionError {
    #[error("the rate is not in range (0, 1]: {value}")]
    InvalidRate { value: f64 },
    #[error("the rate {rate} needs {points:e} sampling points, more than the limit of {limit}")]
    TooManySamplingPoints { rate: f64, points: f64, limit: usize },
    #[error("invalid rate '{value}': {source}")]
    RateParse {
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RarefactionError>;
