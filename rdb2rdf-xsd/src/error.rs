//! Error-handling module for the crate

use thiserror::Error;

/// Errors that can occur while resolving a [DataType][crate::DataType]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataTypeError {
    /// Name is neither a local name nor an absolute IRI of a known datatype
    #[error("unknown data type: \"{0}\"")]
    Unknown(String),
}
