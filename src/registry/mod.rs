//! Registry layer - the stateful store gating every write through the
//! validation pipeline

mod service;

pub use service::{CreateUserRequest, UpdateUserRequest, UserRegistry};
