//! All stuff relate to error

/* crate use */
use thiserror::Error;

/* module declaration */
pub mod cli;
pub mod input;
pub mod simulate;
pub mod variant;

/* reexport for easiest use */
pub use cli::Cli;
pub use input::Input;
pub use simulate::Simulate;
pub use variant::Variant;

/// Enum to manage error polymorphism
#[derive(Debug, Error)]
pub enum Error {
    /// Error related to command line interface
    #[error(transparent)]
    Cli(#[from] Cli),

    /// Error related to input files
    #[error(transparent)]
    Input(#[from] Input),

    /// Error related to read simulation
    #[error(transparent)]
    Simulate(#[from] Simulate),

    /// Error related to variant definitions
    #[error(transparent)]
    Variant(#[from] Variant),
}

#[cfg(test)]
mod t {
    use super::*;

    #[test]
    fn polymorphism() {
        let error: Error = Simulate::TooManySnps {
            requested: 30_001,
            available: 30_000,
        }
        .into();

        assert!(matches!(error, Error::Simulate(_)));
        assert_eq!(
            error.to_string(),
            "Can't introduce 30001 snps in a sequence of 30000 positions"
        );

        let error: Error = Cli::UnsupportedTechnology("pacbio".to_string()).into();
        assert_eq!(
            error.to_string(),
            "Technology 'pacbio' isn't supported, --tech must be one of illumina or nanopore"
        );
    }
}
