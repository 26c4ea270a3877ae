use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("invalid sweep direction: {0:?}")]
    InvalidSweep(char),

    #[error("{what} must be nonnegative, got {value}")]
    NegativeDimension { what: &'static str, value: f64 },

    #[error("hook lengths >= 0 are not implemented, got {0}")]
    UnsupportedHook(f64),

    #[error("asin argument {0} is outside [-1, 1]")]
    AsinDomain(f64),

    #[error("outline styling is not supported for {shape} conductors")]
    UnsupportedStyle { shape: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
