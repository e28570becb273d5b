//! Manage model

/* module declaration */
pub mod error;
pub mod length;

/* reexport for easiest use */
pub use error::Error;
pub use length::Length;
