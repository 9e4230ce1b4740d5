//! Error-handling module for the crate

use thiserror::Error;

pub use rdb2rdf_xsd::error::DataTypeError;

/// Errors that occur while resolving a raw SQL type designation
#[allow(variant_size_differences)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SqlTypeError {
    /// Integer code does not belong to any standard SQL type
    #[error("unknown SQL type code: {0}")]
    UnknownCode(i32),
    /// Name does not belong to any known SQL type
    #[error("unknown SQL type name: \"{0}\"")]
    UnknownName(String),
}

/// Error-Collection for all the possible Errors occurring in this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unrecognized SQL type
    #[error(transparent)]
    SqlType(#[from] SqlTypeError),
    /// Unrecognized datatype
    #[error(transparent)]
    DataType(#[from] DataTypeError),
}
