//! Variant definition error

/* crate use */
use thiserror::Error;

/// Enum to manage error polymorphism
#[derive(Debug, Error)]
pub enum Variant {
    /// A variant name is given without definitions directory
    #[error("A variant name was given without --variant_definitions")]
    MissingDefinitions,

    /// Variant name isn't defined
    #[error("Variant {name} isn't defined in {path}")]
    Unknown { name: String, path: String },

    /// Mutation position is outside reference
    #[error("Mutation at position {position} is outside reference")]
    OutOfReference { position: i64 },

    /// Reference base of mutation didn't match reference
    #[error("Mutation at position {position} expect reference '{expected}' but reference contains '{found}'")]
    ReferenceMismatch {
        position: i64,
        expected: String,
        found: String,
    },

    /// Reference and variant base didn't match mutation type
    #[error("Mutation at position {position} isn't a valid {kind}")]
    Malformed { position: i64, kind: String },
}
