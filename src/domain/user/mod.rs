//! User domain
//!
//! This module provides the user entity and the stateless validation
//! predicates that gate every registry write.

mod entity;
mod validation;

pub use entity::{Role, User, UserId};
pub use validation::{
    has_tax_id_format, is_valid_email, is_valid_password, is_valid_tax_id,
};
