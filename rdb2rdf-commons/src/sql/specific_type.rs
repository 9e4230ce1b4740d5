//! This module defines [SqlSpecificType].
#![allow(missing_docs)]

use std::{fmt::Display, str::FromStr};

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::error::SqlTypeError;

/// Column types as named by a specific database vendor
///
/// Unlike [SqlType][super::SqlType], these keep the distinctions
/// between signed and unsigned integers of different widths.
#[derive(
    Assoc, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[func(pub fn name(&self) -> &'static str)]
#[serde(try_from = "String", into = "String")]
pub enum SqlSpecificType {
    // MySQL
    /// Fixed length string
    #[assoc(name = "char")]
    Char,
    /// Variable length string
    #[assoc(name = "varchar")]
    Varchar,
    /// String of up to 255 characters
    #[assoc(name = "tinytext")]
    TinyText,
    /// String of up to 65535 characters
    #[assoc(name = "text")]
    Text,
    /// Binary data of up to 65535 bytes
    #[assoc(name = "blob")]
    Blob,
    /// String of up to 16777215 characters
    #[assoc(name = "mediumtext")]
    MediumText,
    /// Binary data of up to 16777215 bytes
    #[assoc(name = "mediumblob")]
    MediumBlob,
    /// String of up to 4294967295 characters
    #[assoc(name = "longtext")]
    LongText,
    /// Binary data of up to 4294967295 bytes
    #[assoc(name = "longblob")]
    LongBlob,
    /// 0 or 1
    #[assoc(name = "bit")]
    Bit,
    /// -128 to 127
    #[assoc(name = "tinyint")]
    TinyInt,
    /// 0 to 255
    #[assoc(name = "tinyint unsigned")]
    UnsignedTinyInt,
    /// -32768 to 32767
    #[assoc(name = "smallint")]
    SmallInt,
    /// 0 to 65535
    #[assoc(name = "smallint unsigned")]
    UnsignedSmallInt,
    /// -8388608 to 8388607
    #[assoc(name = "mediumint")]
    MediumInt,
    /// 0 to 16777215
    #[assoc(name = "mediumint unsigned")]
    UnsignedMediumInt,
    /// -2147483648 to 2147483647
    #[assoc(name = "int")]
    Int,
    /// 0 to 4294967295
    #[assoc(name = "int unsigned")]
    UnsignedInt,
    /// -9223372036854775808 to 9223372036854775807
    #[assoc(name = "bigint")]
    BigInt,
    /// 0 to 18446744073709551615
    #[assoc(name = "bigint unsigned")]
    UnsignedBigInt,
    /// Small number with a floating decimal point
    #[assoc(name = "float")]
    Float,
    #[assoc(name = "float unsigned")]
    UnsignedFloat,
    /// Large number with a floating decimal point
    #[assoc(name = "double")]
    Double,
    #[assoc(name = "double unsigned")]
    UnsignedDouble,
    /// Number stored as a string, allowing for a fixed decimal point
    #[assoc(name = "decimal")]
    Decimal,
    #[assoc(name = "decimal unsigned")]
    UnsignedDecimal,
    /// YYYY-MM-DD
    #[assoc(name = "date")]
    Date,
    /// YYYY-MM-DD HH:MM:SS
    #[assoc(name = "datetime")]
    DateTime,
    /// YYYYMMDDHHMMSS
    #[assoc(name = "timestamp")]
    Timestamp,
    /// HH:MM:SS
    #[assoc(name = "time")]
    Time,
    /// YYYY
    #[assoc(name = "year")]
    Year,
    /// One value out of a list of allowed values
    #[assoc(name = "enum")]
    Enum,
    /// Any number of values out of a list of allowed values
    #[assoc(name = "set")]
    Set,
    /// Binary data of up to 255 bytes
    #[assoc(name = "tinyblob")]
    TinyBlob,
    /// Fixed length binary string
    #[assoc(name = "binary")]
    Binary,
    /// Variable length binary string
    #[assoc(name = "varbinary")]
    VarBinary,

    // PostgreSQL
    #[assoc(name = "int4")]
    Int4,
    #[assoc(name = "float4")]
    Float4,
    /// Geometric point
    #[assoc(name = "point")]
    Point,
    /// Autoincrementing 64bit integer
    #[assoc(name = "bigserial")]
    BigSerial,
    #[assoc(name = "varbit")]
    VarBit,
    /// Variable length bit string
    #[assoc(name = "bit varying")]
    BitVarying,
    #[assoc(name = "bool")]
    Bool,
    /// Blank padded character data
    #[assoc(name = "bpchar")]
    BpChar,
    #[assoc(name = "boolean")]
    Boolean,
    /// Rectangular box
    #[assoc(name = "box")]
    Box,
    /// Binary data
    #[assoc(name = "bytea")]
    ByteA,
    #[assoc(name = "character varying")]
    CharacterVarying,
    #[assoc(name = "character")]
    Character,
    /// IPv4 or IPv6 network address
    #[assoc(name = "cidr")]
    Cidr,
    #[assoc(name = "circle")]
    Circle,
    #[assoc(name = "double precision")]
    DoublePrecision,
    #[assoc(name = "float8")]
    Float8,
    /// IPv4 or IPv6 host address
    #[assoc(name = "inet")]
    Inet,
    #[assoc(name = "int2")]
    Int2,
    #[assoc(name = "int8")]
    Int8,
    /// Time span
    #[assoc(name = "interval")]
    Interval,
    #[assoc(name = "line")]
    Line,
    /// Line segment
    #[assoc(name = "lseg")]
    LSeg,
    /// MAC address
    #[assoc(name = "macaddr")]
    MacAddr,
    /// Currency amount
    #[assoc(name = "money")]
    Money,
    #[assoc(name = "numeric")]
    Numeric,
    /// Open or closed geometric path
    #[assoc(name = "path")]
    Path,
    #[assoc(name = "polygon")]
    Polygon,
    #[assoc(name = "real")]
    Real,
    /// Autoincrementing 32bit integer
    #[assoc(name = "serial")]
    Serial,
    #[assoc(name = "serial4")]
    Serial4,
    /// Time of day with time zone
    #[assoc(name = "timetz")]
    TimeTz,
    /// Date and time with time zone
    #[assoc(name = "timestamptz")]
    TimestampTz,
    /// Textual JSON data
    #[assoc(name = "json")]
    Json,
    /// Universally unique identifier
    #[assoc(name = "uuid")]
    Uuid,
    /// XML document
    #[assoc(name = "xml")]
    Xml,

    /// Type that the database did not report in a recognized way
    #[assoc(name = "unknown")]
    Unknown,
}

impl SqlSpecificType {
    /// Resolve the vendor type with the given name.
    ///
    /// Only the exact canonical spelling is accepted, e.g. `int unsigned`.
    pub fn from_name(name: &str) -> Result<Self, SqlTypeError> {
        Self::iter()
            .find(|specific_type| specific_type.name() == name)
            .ok_or_else(|| SqlTypeError::UnknownName(name.to_string()))
    }
}

impl Display for SqlSpecificType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SqlSpecificType {
    type Err = SqlTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for SqlSpecificType {
    type Error = SqlTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

impl From<SqlSpecificType> for String {
    fn from(value: SqlSpecificType) -> Self {
        value.name().to_string()
    }
}
