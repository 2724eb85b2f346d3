//! Field table validation errors.

use std::fmt;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors reported when validating a field table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field's bit width is outside `-32..=32`.
    InvalidBitWidth { field: &'static str, bits: i32 },

    /// The active count exceeds the number of fields.
    ActiveOutOfRange {
        table: &'static str,
        active: usize,
        len: usize,
    },

    /// The active count cannot be sent in the one-byte change count.
    TooManyFields { table: &'static str, active: usize },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBitWidth { field, bits } => {
                write!(f, "field {field} has invalid bit width {bits}")
            }
            Self::ActiveOutOfRange { table, active, len } => {
                write!(f, "table {table} activates {active} of {len} fields")
            }
            Self::TooManyFields { table, active } => {
                write!(f, "table {table} has {active} active fields, at most 255 allowed")
            }
        }
    }
}

impl std::error::Error for SchemaError {}
