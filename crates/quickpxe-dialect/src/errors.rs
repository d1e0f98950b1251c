use quickpxe_schema::Setting;
use thiserror::Error;

use crate::dialect::Dialect;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialectError {
    #[error("could not recognise the vendor of '{filename}'")]
    UnrecognizedVendor { filename: String },

    #[error("unknown dialect '{0}' (expected dell, hp or lenovo)")]
    UnknownDialect(String),
}

pub type DialectResult<T> = Result<T, DialectError>;

/// Non-fatal problems found while applying or rendering canonical settings. These are collected
/// and handed back to the caller, never raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    #[error("{dialect} has no equivalent for {setting}={value}; setting dropped")]
    UnsupportedCanonicalKey {
        setting: Setting,
        value: String,
        dialect: Dialect,
    },
}
