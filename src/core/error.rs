use crate::core::types::NativeType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Entity '{0}' is not administrable")]
    EntityNotFound(String),

    #[error("Entity '{0}' is already registered")]
    EntityExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Field '{field}': cannot convert '{raw}' to {target}")]
    Conversion {
        field: String,
        raw: String,
        target: NativeType,
    },

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, AdminError>;

impl AdminError {
    /// Field-scoped conversion failure. Conversion errors always carry the
    /// offending field so the presentation tier can highlight it.
    pub fn conversion(field: &str, raw: &str, target: NativeType) -> Self {
        Self::Conversion {
            field: field.to_string(),
            raw: raw.to_string(),
            target,
        }
    }
}
