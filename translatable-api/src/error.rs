use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslatableError {
    #[error("Locales not defined: {0}")]
    LocalesNotDefined(String),

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Mass assignment error: {0}")]
    MassAssignment(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for TranslatableError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        TranslatableError::Storage(err)
    }
}

pub type TranslatableResult<T> = Result<T, TranslatableError>;
