//! Equivalences between vendor specific SQL types and XML Schema datatypes.
//!
//! See XML Schema Part 2: Datatypes Second Edition
//! (<http://www.w3.org/TR/xmlschema-2/>) for the value spaces of the targets.
//! Standard SQL types are served from the same table as
//! [standard][super::standard], which is re-exported here.

use once_cell::sync::Lazy;
use rdb2rdf_xsd::DataType;

use crate::{equivalence::table::EquivalenceTable, error::SqlTypeError, sql::SqlSpecificType};

pub use super::standard::{
    equivalent_type, equivalent_type_for_code, is_valid_sql_datatype, standard_equivalences,
};

pub(crate) const SPECIFIC_EQUIVALENCES: &[(SqlSpecificType, DataType)] = &[
    // MySQL text types
    (SqlSpecificType::Char, DataType::String),
    (SqlSpecificType::Varchar, DataType::String),
    (SqlSpecificType::TinyText, DataType::String),
    (SqlSpecificType::Text, DataType::String),
    (SqlSpecificType::Blob, DataType::String),
    (SqlSpecificType::MediumText, DataType::String),
    (SqlSpecificType::MediumBlob, DataType::String),
    (SqlSpecificType::LongText, DataType::String),
    (SqlSpecificType::LongBlob, DataType::String),
    // MySQL number types
    (SqlSpecificType::Bit, DataType::Byte),
    (SqlSpecificType::TinyInt, DataType::Byte),
    (SqlSpecificType::UnsignedTinyInt, DataType::UnsignedByte),
    (SqlSpecificType::SmallInt, DataType::Short),
    (SqlSpecificType::UnsignedSmallInt, DataType::UnsignedShort),
    (SqlSpecificType::MediumInt, DataType::Int),
    (SqlSpecificType::UnsignedMediumInt, DataType::Int),
    (SqlSpecificType::Int, DataType::Int),
    (SqlSpecificType::UnsignedInt, DataType::UnsignedInt),
    (SqlSpecificType::BigInt, DataType::Long),
    (SqlSpecificType::UnsignedBigInt, DataType::UnsignedLong),
    (SqlSpecificType::Float, DataType::Float),
    (SqlSpecificType::UnsignedFloat, DataType::Float),
    (SqlSpecificType::Double, DataType::Double),
    (SqlSpecificType::UnsignedDouble, DataType::Double),
    (SqlSpecificType::Decimal, DataType::Decimal),
    (SqlSpecificType::UnsignedDecimal, DataType::Decimal),
    // MySQL date types
    (SqlSpecificType::Date, DataType::Date),
    // values must be rewritten from MySQL's space separated form to the `T` form of xsd:dateTime
    (SqlSpecificType::DateTime, DataType::DateTime),
    (SqlSpecificType::Timestamp, DataType::DateTime),
    (SqlSpecificType::Time, DataType::Time),
    (SqlSpecificType::Year, DataType::GYear),
    // MySQL misc types
    (SqlSpecificType::Enum, DataType::Enumeration),
    (SqlSpecificType::Set, DataType::Enumeration),
    // PostgreSQL
    (SqlSpecificType::Int4, DataType::Integer),
    (SqlSpecificType::Float4, DataType::Float),
    (SqlSpecificType::Point, DataType::String),
    (SqlSpecificType::BigSerial, DataType::Integer),
    (SqlSpecificType::VarBit, DataType::Int),
    (SqlSpecificType::BitVarying, DataType::Int),
    (SqlSpecificType::Bool, DataType::Byte),
    (SqlSpecificType::BpChar, DataType::String),
    (SqlSpecificType::Boolean, DataType::Byte),
    (SqlSpecificType::Box, DataType::String),
    (SqlSpecificType::ByteA, DataType::String),
    (SqlSpecificType::CharacterVarying, DataType::String),
    (SqlSpecificType::Character, DataType::String),
    (SqlSpecificType::Cidr, DataType::String),
    (SqlSpecificType::Circle, DataType::String),
    (SqlSpecificType::DoublePrecision, DataType::Double),
    (SqlSpecificType::Float8, DataType::Float),
    (SqlSpecificType::Inet, DataType::String),
    (SqlSpecificType::Int2, DataType::Integer),
    (SqlSpecificType::Int8, DataType::Integer),
    (SqlSpecificType::Interval, DataType::String),
    (SqlSpecificType::Line, DataType::String),
    (SqlSpecificType::LSeg, DataType::String),
    (SqlSpecificType::MacAddr, DataType::String),
    (SqlSpecificType::Money, DataType::String),
    (SqlSpecificType::Numeric, DataType::Decimal),
    (SqlSpecificType::Path, DataType::String),
    (SqlSpecificType::Polygon, DataType::String),
    (SqlSpecificType::Real, DataType::Float),
    (SqlSpecificType::Serial, DataType::String),
    (SqlSpecificType::Serial4, DataType::Integer),
    (SqlSpecificType::TimeTz, DataType::Float),
    (SqlSpecificType::TimestampTz, DataType::String),
    // catch-all
    (SqlSpecificType::Unknown, DataType::String),
];

static SPECIFIC_TABLE: Lazy<EquivalenceTable<SqlSpecificType>> =
    Lazy::new(|| EquivalenceTable::new("specific", SPECIFIC_EQUIVALENCES));

/// Return the datatype equivalent to the given vendor type, if there is one.
pub fn equivalent_specific_type(specific_type: SqlSpecificType) -> Option<DataType> {
    SPECIFIC_TABLE.get(specific_type)
}

/// Return the datatype equivalent to the vendor type with the given name.
///
/// Fails if the name is not known,
/// returns `Ok(None)` if the vendor type has no equivalent.
pub fn equivalent_specific_type_for_name(name: &str) -> Result<Option<DataType>, SqlTypeError> {
    Ok(equivalent_specific_type(SqlSpecificType::from_name(name)?))
}

/// Return whether the vendor type with the given name has an equivalent datatype.
///
/// Fails if the name is not known.
pub fn is_valid_sql_specific_datatype(name: &str) -> Result<bool, SqlTypeError> {
    Ok(SPECIFIC_TABLE.contains(SqlSpecificType::from_name(name)?))
}

/// Iterate over all vendor specific equivalences in no particular order.
pub fn specific_equivalences() -> impl Iterator<Item = (SqlSpecificType, DataType)> {
    SPECIFIC_TABLE.iter()
}
