//! Input files error

/* crate use */
use thiserror::Error;

/// Enum to manage error polymorphism
#[derive(Debug, Error)]
pub enum Input {
    /// Reference file contains no sequence
    #[error("Reference file doesn't contain any sequence")]
    EmptyReference,

    /// Primer scheme without amplicons key
    #[error("Primer definition doesn't contain an 'amplicons' object")]
    MissingAmplicons,

    /// Amplicon end must be after start
    #[error("Amplicon {name} end ({end}) isn't greater than its start ({start})")]
    AmpliconBoundaries { name: String, start: i64, end: i64 },
}
