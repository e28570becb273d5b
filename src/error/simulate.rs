//! Simulation error

/* crate use */
use thiserror::Error;

/// Enum to manage error polymorphism
#[derive(Debug, Error)]
pub enum Simulate {
    /// Amplicon span and read length are incompatible
    #[error("Amplicon {name} span ({span}) must be greater than read length ({read_length}) and lower than twice read length")]
    AmpliconSpan {
        name: String,
        span: i64,
        read_length: u64,
    },

    /// Amplicon boundary isn't present in working sequence
    #[error("Coordinate {coordinate} of amplicon {name} isn't present in working sequence")]
    MissingCoordinate { name: String, coordinate: i64 },

    /// More snps are requested than position available
    #[error("Can't introduce {requested} snps in a sequence of {available} positions")]
    TooManySnps { requested: usize, available: usize },

    /// Read go past an end of working sequence
    #[error("Read of length {length} from amplicon {name} need more than the {available} bases available in working sequence")]
    ReadOutOfSequence {
        name: String,
        length: usize,
        available: usize,
    },
}
