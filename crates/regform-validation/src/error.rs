//! Error types
//!
//! Validation failures are not errors; they are ordinary `ValidationResult`
//! values. These variants cover caller mistakes and setup problems only.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    /// A field identifier outside the fixed catalogue
    #[error("unknown field id '{0}'")]
    InvalidFieldId(String),

    /// A control the browser binding expected was not in the document
    #[error("form element '#{0}' not found")]
    MissingElement(String),

    #[error("invalid form configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FormError>;
