//! This module defines [DataType].
#![allow(missing_docs)]

use std::{fmt::Display, str::FromStr};

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::{
    error::DataTypeError,
    syntax::{local_name, namespace},
};

/// Datatypes that a materialized RDF literal can be tagged with
#[derive(
    Assoc, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[func(pub fn namespace(&self) -> &'static str)]
#[func(pub fn local_name(&self) -> &'static str)]
#[serde(try_from = "String", into = "String")]
pub enum DataType {
    /// xsd:integer
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::INTEGER)]
    Integer,
    /// xsd:string
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::STRING)]
    String,
    /// xsd:byte
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::BYTE)]
    Byte,
    /// xsd:unsignedByte
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::UNSIGNED_BYTE)]
    UnsignedByte,
    /// xsd:short
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::SHORT)]
    Short,
    /// xsd:unsignedShort
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::UNSIGNED_SHORT)]
    UnsignedShort,
    /// xsd:int
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::INT)]
    Int,
    /// xsd:unsignedInt
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::UNSIGNED_INT)]
    UnsignedInt,
    /// xsd:long
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::LONG)]
    Long,
    /// xsd:unsignedLong
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::UNSIGNED_LONG)]
    UnsignedLong,
    /// xsd:float
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::FLOAT)]
    Float,
    /// xsd:double
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::DOUBLE)]
    Double,
    /// xsd:decimal
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::DECIMAL)]
    Decimal,
    /// xsd:date
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::DATE)]
    Date,
    /// xsd:dateTime
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::DATETIME)]
    DateTime,
    /// xsd:time
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::TIME)]
    Time,
    /// xsd:gYear
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::GYEAR)]
    GYear,
    /// xsd:enumeration
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::ENUMERATION)]
    Enumeration,
    /// xsd:positiveInteger
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::POSITIVE_INTEGER)]
    PositiveInteger,
    /// xsd:hexBinary
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::HEXBINARY)]
    HexBinary,
    /// xsd:boolean
    #[assoc(namespace = namespace::XSD)]
    #[assoc(local_name = local_name::BOOLEAN)]
    Boolean,
    /// geo:wktLiteral
    #[assoc(namespace = namespace::GEOSPARQL)]
    #[assoc(local_name = local_name::WKTLITERAL)]
    WktLiteral,
}

impl DataType {
    /// Resolve a datatype from its display name.
    ///
    /// Both the bare local name (e.g. `dateTime`) and the
    /// absolute IRI (e.g. `http://www.w3.org/2001/XMLSchema#dateTime`)
    /// are accepted.
    pub fn from_display_name(name: &str) -> Result<Self, DataTypeError> {
        Self::iter()
            .find(|datatype| datatype.matches_display_name(name))
            .ok_or_else(|| DataTypeError::Unknown(name.to_string()))
    }

    /// Variant of [DataType::from_display_name] for names that might be missing.
    ///
    /// A missing name is not an error and results in `Ok(None)`.
    pub fn from_optional_name(name: Option<&str>) -> Result<Option<Self>, DataTypeError> {
        name.map(Self::from_display_name).transpose()
    }

    /// Return the absolute IRI of this datatype.
    pub fn absolute_uri(&self) -> String {
        format!("{}{}", self.namespace(), self.local_name())
    }

    /// Return whether values of this datatype denote a calendar date.
    pub fn is_date_type(&self) -> bool {
        matches!(self, DataType::Date | DataType::DateTime)
    }

    fn matches_display_name(&self, name: &str) -> bool {
        name == self.local_name()
            || name
                .strip_prefix(self.namespace())
                .is_some_and(|rest| rest == self.local_name())
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.local_name())
    }
}

impl FromStr for DataType {
    type Err = DataTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_display_name(s)
    }
}

impl TryFrom<&str> for DataType {
    type Error = DataTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_display_name(value)
    }
}

impl TryFrom<String> for DataType {
    type Error = DataTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_display_name(&value)
    }
}

impl From<DataType> for String {
    fn from(value: DataType) -> Self {
        value.absolute_uri()
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use quickcheck_macros::quickcheck;
    use strum::IntoEnumIterator;
    use test_log::test;

    use super::DataType;
    use crate::{error::DataTypeError, syntax::namespace};

    #[test]
    fn local_name_round_trip() {
        for datatype in DataType::iter() {
            assert_eq!(
                DataType::from_display_name(datatype.local_name()),
                Ok(datatype)
            );
            assert_eq!(DataType::from_display_name(&datatype.to_string()), Ok(datatype));
        }
    }

    #[test]
    fn absolute_uri_round_trip_agrees_with_local_name() {
        for datatype in DataType::iter() {
            let by_uri = DataType::from_display_name(&datatype.absolute_uri());
            let by_name = DataType::from_display_name(datatype.local_name());

            assert_eq!(by_uri, Ok(datatype));
            assert_eq!(by_uri, by_name);
        }
    }

    #[test]
    fn absolute_uri() {
        assert_eq!(
            DataType::Integer.absolute_uri(),
            "http://www.w3.org/2001/XMLSchema#integer"
        );
        assert_eq!(
            DataType::DateTime.absolute_uri(),
            "http://www.w3.org/2001/XMLSchema#dateTime"
        );
        assert_eq!(
            DataType::WktLiteral.absolute_uri(),
            "http://www.opengis.net/ont/geosparql#wktLiteral"
        );
    }

    #[test]
    fn only_wkt_literal_leaves_xml_schema() {
        for datatype in DataType::iter() {
            if datatype == DataType::WktLiteral {
                assert_eq!(datatype.namespace(), namespace::GEOSPARQL);
            } else {
                assert_eq!(datatype.namespace(), namespace::XSD);
            }
        }
    }

    #[test]
    fn iris_are_unique() {
        let iris = DataType::iter()
            .map(|datatype| (datatype.namespace(), datatype.local_name()))
            .collect::<HashSet<_>>();

        assert_eq!(iris.len(), DataType::iter().count());
        assert_eq!(iris.len(), 22);
    }

    #[test]
    fn date_types() {
        let dates = DataType::iter()
            .filter(DataType::is_date_type)
            .collect::<Vec<_>>();

        assert_eq!(dates, vec![DataType::Date, DataType::DateTime]);
        assert!(!DataType::Time.is_date_type());
        assert!(!DataType::GYear.is_date_type());
    }

    #[test]
    fn unknown_names() {
        assert_eq!(
            DataType::from_display_name("varchar"),
            Err(DataTypeError::Unknown("varchar".to_string()))
        );
        // local names are case sensitive
        assert!(DataType::from_display_name("DateTime").is_err());
        // the namespace alone names nothing
        assert!(DataType::from_display_name(namespace::XSD).is_err());
        // wktLiteral lives outside of XML Schema
        assert!(DataType::from_display_name("http://www.w3.org/2001/XMLSchema#wktLiteral").is_err());
        assert!(DataType::from_display_name("").is_err());
    }

    #[test]
    fn missing_names() {
        assert_eq!(DataType::from_optional_name(None), Ok(None));
        assert_eq!(
            DataType::from_optional_name(Some("gYear")),
            Ok(Some(DataType::GYear))
        );
        assert!(DataType::from_optional_name(Some("year")).is_err());
    }

    #[test]
    fn from_str() {
        assert_eq!("hexBinary".parse::<DataType>(), Ok(DataType::HexBinary));
        assert!("hexbinary".parse::<DataType>().is_err());
    }

    #[test]
    fn serde_uses_absolute_uri() {
        let json = serde_json::to_string(&DataType::UnsignedShort).unwrap();
        assert_eq!(json, "\"http://www.w3.org/2001/XMLSchema#unsignedShort\"");

        let parsed: Vec<DataType> =
            serde_json::from_str(r#"["decimal", "http://www.w3.org/2001/XMLSchema#boolean"]"#)
                .unwrap();
        assert_eq!(parsed, vec![DataType::Decimal, DataType::Boolean]);

        assert!(serde_json::from_str::<DataType>("\"number\"").is_err());
    }

    #[quickcheck]
    fn resolved_names_denote_the_datatype(name: String) -> bool {
        match DataType::from_display_name(&name) {
            Ok(datatype) => name == datatype.local_name() || name == datatype.absolute_uri(),
            Err(DataTypeError::Unknown(unknown)) => unknown == name,
        }
    }
}
