//! User Registry
//!
//! An in-memory user registry that validates identity fields before any
//! record is created or modified:
//! - Email shape, password complexity, and Brazilian CPF tax ID checksum
//! - Email and tax ID uniqueness across all live records
//! - Sequential display code and position assigned once at creation
//!
//! The registry exposes plain synchronous operations; transport layers,
//! dependency wiring, and request/response DTOs live with the embedding
//! application.

pub mod domain;
pub mod logging;
pub mod registry;

pub use domain::{RegistryError, Role, User, UserId};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use registry::{CreateUserRequest, UpdateUserRequest, UserRegistry};
