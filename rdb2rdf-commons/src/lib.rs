//! Commons of the relational-to-RDF translation: the SQL column types
//! that can be read from a database schema and their equivalent
//! XML Schema datatypes for materialized RDF literals.

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

/// The crate defining the XML Schema datatypes.
pub extern crate rdb2rdf_xsd;

pub mod equivalence;
pub mod error;
pub mod sql;

// datatypes are part of every lookup result, so re-export them here.
pub use rdb2rdf_xsd::DataType;
