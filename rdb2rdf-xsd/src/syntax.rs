//! Constants for strings that are relevant to the syntax of datatype IRIs.
//! These are kept in one location, since they are required both
//! for building absolute IRIs and for parsing them.

/// Namespaces of the supported datatype vocabularies
pub mod namespace {
    /// Initial part of IRI in all XML Schema types
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// Initial part of IRI in all GeoSPARQL types
    pub const GEOSPARQL: &str = "http://www.opengis.net/ont/geosparql#";
}

/// Local names of the supported datatypes
pub mod local_name {
    /// Arbitrary precision integer
    pub const INTEGER: &str = "integer";
    /// Character string
    pub const STRING: &str = "string";
    /// -128 to 127
    pub const BYTE: &str = "byte";
    /// 0 to 255
    pub const UNSIGNED_BYTE: &str = "unsignedByte";
    /// -32768 to 32767
    pub const SHORT: &str = "short";
    /// 0 to 65535
    pub const UNSIGNED_SHORT: &str = "unsignedShort";
    /// -2147483648 to 2147483647
    pub const INT: &str = "int";
    /// 0 to 4294967295
    pub const UNSIGNED_INT: &str = "unsignedInt";
    /// 64bit signed integer
    pub const LONG: &str = "long";
    /// 64bit unsigned integer
    pub const UNSIGNED_LONG: &str = "unsignedLong";
    /// 32bit floating point number
    pub const FLOAT: &str = "float";
    /// 64bit floating point number
    pub const DOUBLE: &str = "double";
    /// Fixed point decimal number
    pub const DECIMAL: &str = "decimal";
    /// Calendar date
    pub const DATE: &str = "date";
    /// Date with time of day
    pub const DATETIME: &str = "dateTime";
    /// Time of day
    pub const TIME: &str = "time";
    /// Gregorian year
    pub const GYEAR: &str = "gYear";
    /// One of a fixed set of values
    pub const ENUMERATION: &str = "enumeration";
    /// Integer greater than zero
    pub const POSITIVE_INTEGER: &str = "positiveInteger";
    /// Hex encoded binary data
    pub const HEXBINARY: &str = "hexBinary";
    /// Truth value
    pub const BOOLEAN: &str = "boolean";
    /// Well-known text geometry
    pub const WKTLITERAL: &str = "wktLiteral";
}
