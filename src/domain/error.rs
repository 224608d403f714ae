use thiserror::Error;

/// Errors surfaced by registry write and lookup operations.
///
/// Every variant is raised synchronously at the point of detection and
/// aborts the operation with no partial mutation. Callers are expected to
/// match on the variant rather than parse the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),

    #[error("Password does not meet the complexity policy")]
    InvalidPassword,

    #[error("Secondary password does not meet the complexity policy")]
    InvalidSecondaryPassword,

    #[error("Email '{0}' is already in use")]
    EmailInUse(String),

    #[error("Tax ID '{0}' is already in use")]
    TaxIdInUse(String),

    #[error("Invalid tax ID: '{0}'")]
    InvalidTaxId(String),

    #[error("User '{0}' not found")]
    UserNotFound(String),
}
