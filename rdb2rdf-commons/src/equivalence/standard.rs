//! Equivalences between standard SQL types and XML Schema datatypes.
//!
//! These are coarse by intention: literal typing does not need
//! the precision distinctions of SQL, so for example all integer
//! widths share `xsd:integer`.

use once_cell::sync::Lazy;
use rdb2rdf_xsd::DataType;

use crate::{equivalence::table::EquivalenceTable, error::SqlTypeError, sql::SqlType};

pub(crate) const STANDARD_EQUIVALENCES: &[(SqlType, DataType)] = &[
    (SqlType::Binary, DataType::HexBinary),
    (SqlType::BinaryVarying, DataType::HexBinary),
    (SqlType::BinaryLargeObject, DataType::HexBinary),
    (SqlType::Numeric, DataType::Decimal),
    (SqlType::Decimal, DataType::Decimal),
    (SqlType::SmallInt, DataType::Integer),
    (SqlType::Integer, DataType::Integer),
    (SqlType::BigInt, DataType::Integer),
    (SqlType::Float, DataType::Double),
    (SqlType::Real, DataType::Double),
    (SqlType::DoublePrecision, DataType::Double),
    (SqlType::Boolean, DataType::Boolean),
    (SqlType::Bit, DataType::Boolean),
    (SqlType::TinyInt, DataType::Boolean),
    (SqlType::Date, DataType::Date),
    (SqlType::Time, DataType::Time),
    (SqlType::Timestamp, DataType::DateTime),
    (SqlType::Char, DataType::String),
    (SqlType::Varchar, DataType::String),
    (SqlType::String, DataType::String),
    (SqlType::Unknown, DataType::String),
];

/// The one table of standard equivalences, shared by all mappers
static STANDARD_TABLE: Lazy<EquivalenceTable<SqlType>> =
    Lazy::new(|| EquivalenceTable::new("standard", STANDARD_EQUIVALENCES));

/// Return the datatype equivalent to the given SQL type, if there is one.
pub fn equivalent_type(sql_type: SqlType) -> Option<DataType> {
    STANDARD_TABLE.get(sql_type)
}

/// Return the datatype equivalent to the SQL type with the given JDBC code.
///
/// Fails if the code is not known,
/// returns `Ok(None)` if the SQL type has no equivalent.
pub fn equivalent_type_for_code(code: i32) -> Result<Option<DataType>, SqlTypeError> {
    Ok(equivalent_type(SqlType::from_code(code)?))
}

/// Return whether the SQL type with the given JDBC code has an equivalent datatype.
///
/// Fails if the code is not known.
pub fn is_valid_sql_datatype(code: i32) -> Result<bool, SqlTypeError> {
    Ok(STANDARD_TABLE.contains(SqlType::from_code(code)?))
}

/// Iterate over all standard equivalences in no particular order.
pub fn standard_equivalences() -> impl Iterator<Item = (SqlType, DataType)> {
    STANDARD_TABLE.iter()
}
