//! Column types as reported by relational databases.

pub mod specific_type;
pub mod standard_type;

pub use specific_type::SqlSpecificType;
pub use standard_type::SqlType;
