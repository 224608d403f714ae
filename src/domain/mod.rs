//! Domain layer - entities, validation, and error types

pub mod error;
pub mod user;

pub use error::RegistryError;
pub use user::{
    has_tax_id_format, is_valid_email, is_valid_password, is_valid_tax_id, Role, User, UserId,
};
