//! This module defines [SqlType].
#![allow(missing_docs)]

use std::{fmt::Display, str::FromStr};

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::error::SqlTypeError;

/// Standard SQL column types, identified by their JDBC type code
#[derive(
    Assoc, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[func(pub fn code(&self) -> i32)]
#[func(pub fn name(&self) -> &'static str)]
#[serde(try_from = "String", into = "String")]
pub enum SqlType {
    /// Fixed length binary data
    #[assoc(code = -2)]
    #[assoc(name = "BINARY")]
    Binary,
    /// Variable length binary data
    #[assoc(code = -3)]
    #[assoc(name = "BINARY VARYING")]
    BinaryVarying,
    /// Binary large object
    #[assoc(code = 2004)]
    #[assoc(name = "BINARY LARGE OBJECT")]
    BinaryLargeObject,
    /// Exact numeric with precision and scale
    #[assoc(code = 2)]
    #[assoc(name = "NUMERIC")]
    Numeric,
    /// Exact numeric with at least the given precision
    #[assoc(code = 3)]
    #[assoc(name = "DECIMAL")]
    Decimal,
    /// 16bit integer
    #[assoc(code = 5)]
    #[assoc(name = "SMALLINT")]
    SmallInt,
    /// 32bit integer
    #[assoc(code = 4)]
    #[assoc(name = "INTEGER")]
    Integer,
    /// 64bit integer
    #[assoc(code = -5)]
    #[assoc(name = "BIGINT")]
    BigInt,
    /// Approximate numeric with binary precision
    #[assoc(code = 6)]
    #[assoc(name = "FLOAT")]
    Float,
    /// Single precision approximate numeric
    #[assoc(code = 7)]
    #[assoc(name = "REAL")]
    Real,
    /// Double precision approximate numeric
    #[assoc(code = 8)]
    #[assoc(name = "DOUBLE PRECISION")]
    DoublePrecision,
    /// Truth value
    #[assoc(code = 16)]
    #[assoc(name = "BOOLEAN")]
    Boolean,
    /// Single bit
    #[assoc(code = -7)]
    #[assoc(name = "BIT")]
    Bit,
    /// 8bit integer
    #[assoc(code = -6)]
    #[assoc(name = "TINYINT")]
    TinyInt,
    /// Calendar date
    #[assoc(code = 91)]
    #[assoc(name = "DATE")]
    Date,
    /// Time of day
    #[assoc(code = 92)]
    #[assoc(name = "TIME")]
    Time,
    /// Date with time of day
    #[assoc(code = 93)]
    #[assoc(name = "TIMESTAMP")]
    Timestamp,
    /// Variable length character data
    #[assoc(code = 12)]
    #[assoc(name = "VARCHAR")]
    Varchar,
    /// Fixed length character data
    #[assoc(code = 1)]
    #[assoc(name = "CHAR")]
    Char,
    /// Long character data
    #[assoc(code = -1)]
    #[assoc(name = "STRING")]
    String,
    /// Vendor type without standard code
    #[assoc(code = 1111)]
    #[assoc(name = "UNKNOWN")]
    Unknown,
    /// Long variable length binary data
    #[assoc(code = -4)]
    #[assoc(name = "LONG BINARY VARYING")]
    LongBinaryVarying,
    /// Character large object
    #[assoc(code = 2005)]
    #[assoc(name = "CHARACTER LARGE OBJECT")]
    CharacterLargeObject,
    /// Fixed length national character data
    #[assoc(code = -15)]
    #[assoc(name = "NATIONAL CHAR")]
    NationalChar,
    /// Variable length national character data
    #[assoc(code = -9)]
    #[assoc(name = "NATIONAL CHAR VARYING")]
    NationalCharVarying,
    /// National character large object
    #[assoc(code = 2011)]
    #[assoc(name = "NATIONAL CHARACTER LARGE OBJECT")]
    NationalCharacterLargeObject,
    /// Time of day with time zone
    #[assoc(code = 2013)]
    #[assoc(name = "TIME WITH TIME ZONE")]
    TimeWithTimezone,
    /// Timestamp with time zone
    #[assoc(code = 2014)]
    #[assoc(name = "TIMESTAMP WITH TIME ZONE")]
    TimestampWithTimezone,
    /// Array of values
    #[assoc(code = 2003)]
    #[assoc(name = "ARRAY")]
    Array,
    /// Structured type
    #[assoc(code = 2002)]
    #[assoc(name = "STRUCT")]
    Struct,
    /// Reference to a structured type
    #[assoc(code = 2006)]
    #[assoc(name = "REF")]
    Ref,
    /// External data link
    #[assoc(code = 70)]
    #[assoc(name = "DATALINK")]
    Datalink,
    /// Row identifier
    #[assoc(code = -8)]
    #[assoc(name = "ROWID")]
    RowId,
    /// XML document
    #[assoc(code = 2009)]
    #[assoc(name = "SQLXML")]
    SqlXml,
    /// Serialized host object
    #[assoc(code = 2000)]
    #[assoc(name = "JAVA OBJECT")]
    JavaObject,
    /// Distinct user-defined type
    #[assoc(code = 2001)]
    #[assoc(name = "DISTINCT")]
    Distinct,
    /// Null type
    #[assoc(code = 0)]
    #[assoc(name = "NULL")]
    Null,
}

impl SqlType {
    /// Resolve the SQL type with the given JDBC type code.
    pub fn from_code(code: i32) -> Result<Self, SqlTypeError> {
        Self::iter()
            .find(|sql_type| sql_type.code() == code)
            .ok_or(SqlTypeError::UnknownCode(code))
    }

    /// Resolve the SQL type with the given name.
    ///
    /// Only the exact canonical spelling is accepted, e.g. `DOUBLE PRECISION`.
    pub fn from_name(name: &str) -> Result<Self, SqlTypeError> {
        Self::iter()
            .find(|sql_type| sql_type.name() == name)
            .ok_or_else(|| SqlTypeError::UnknownName(name.to_string()))
    }
}

impl Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SqlType {
    type Err = SqlTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<i32> for SqlType {
    type Error = SqlTypeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_code(value)
    }
}

impl TryFrom<String> for SqlType {
    type Error = SqlTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

impl From<SqlType> for String {
    fn from(value: SqlType) -> Self {
        value.name().to_string()
    }
}

impl From<SqlType> for i32 {
    fn from(value: SqlType) -> Self {
        value.code()
    }
}
