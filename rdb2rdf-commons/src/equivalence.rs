//! Equivalences between SQL column types and XML Schema datatypes.
//!
//! Two sets of equivalences exist. The [standard] one is keyed by the
//! portable [SqlType][crate::sql::SqlType] and deliberately coarse, e.g.
//! every integer width becomes `xsd:integer`. The [specific] one is keyed by
//! vendor type names and keeps width and signedness where XML Schema
//! can express it. Use the specific equivalences whenever the exact
//! vendor type of a column is known.

pub mod specific;
pub mod standard;
pub mod table;

pub use table::EquivalenceTable;

use rdb2rdf_xsd::DataType;

use crate::error::Error;

/// Determine the datatype for literals generated from a column of the given vendor type.
///
/// A `declared` datatype (given by display name or absolute IRI) takes precedence
/// over the natural equivalent of the column type, in which case the column type
/// is not inspected at all.
/// Returns `Ok(None)` if the column type is known but has no equivalent datatype.
pub fn literal_datatype(
    column_type: &str,
    declared: Option<&str>,
) -> Result<Option<DataType>, Error> {
    if let Some(datatype) = DataType::from_optional_name(declared)? {
        return Ok(Some(datatype));
    }

    Ok(specific::equivalent_specific_type_for_name(column_type)?)
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::literal_datatype;
    use crate::{
        error::{DataTypeError, Error, SqlTypeError},
        DataType,
    };

    #[test]
    fn natural_datatype() {
        assert_eq!(
            literal_datatype("smallint unsigned", None),
            Ok(Some(DataType::UnsignedShort))
        );
        assert_eq!(literal_datatype("uuid", None), Ok(None));
    }

    #[test]
    fn declared_datatype_wins() {
        assert_eq!(
            literal_datatype("varchar", Some("http://www.w3.org/2001/XMLSchema#date")),
            Ok(Some(DataType::Date))
        );
        assert_eq!(
            literal_datatype("not a type", Some("wktLiteral")),
            Ok(Some(DataType::WktLiteral))
        );
    }

    #[test]
    fn errors_are_kept_apart() {
        assert_eq!(
            literal_datatype("varchar", Some("text")),
            Err(Error::DataType(DataTypeError::Unknown("text".to_string())))
        );
        assert_eq!(
            literal_datatype("number", None),
            Err(Error::SqlType(SqlTypeError::UnknownName("number".to_string())))
        );
    }
}
