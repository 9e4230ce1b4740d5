//! This crate defines the closed set of XML Schema datatypes
//! (plus the GeoSPARQL literal type) that relational values are
//! tagged with when they are materialized as RDF literals.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

pub mod datatype;
pub mod error;
pub mod syntax;

pub use datatype::DataType;
pub use error::DataTypeError;
