use thiserror::Error;

use crate::setting::Setting;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unknown canonical setting '{0}'")]
    UnknownKey(String),

    #[error("'{value}' is not a valid value for {setting} (expected one of: {expected})")]
    InvalidValue {
        setting: Setting,
        value: String,
        expected: String,
    },
}

pub type SchemaResult<T> = Result<T, SchemaError>;
