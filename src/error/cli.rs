//! Command line interface error

/* crate use */
use thiserror::Error;

/// Enum to manage error polymorphism
#[derive(Debug, Error)]
pub enum Cli {
    /// Technology isn't illumina or nanopore
    #[error("Technology '{0}' isn't supported, --tech must be one of illumina or nanopore")]
    UnsupportedTechnology(String),

    /// Error rate is a percentage in [0, 100)
    #[error("Error rate {0} is out of range, it must be greater or equal to 0 and lower than 100")]
    ErrorRateOutOfRange(f64),

    /// Read length must be strictly positive
    #[error("Read length must be greater than 0")]
    ReadLengthIsZero,

    /// Read length standard deviation can't be negative
    #[error("Read length standard deviation {0} must be greater or equal to 0")]
    ReadStddevIsNegative(f64),
}
