//! User registry - owns the live record set and the write-path gate

use chrono::Utc;
use tracing::{debug, info};

use crate::domain::user::{
    has_tax_id_format, is_valid_email, is_valid_password, is_valid_tax_id, Role, User, UserId,
};
use crate::domain::RegistryError;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub tax_id: String,
    pub role: Role,
    pub secondary_password: Option<String>,
}

/// Request for updating an existing user
///
/// Every field except `secondary_password` overwrites the record
/// unconditionally; the secondary password is replaced only when a
/// non-empty value is supplied.
#[derive(Debug, Clone)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub tax_id: String,
    pub role: Role,
    pub secondary_password: Option<String>,
}

/// In-memory user registry
///
/// Owns the record collection outright; no other component holds
/// references into it outside what the calls return. All operations are
/// synchronous direct calls. The registry assumes a single logical caller
/// per instance - adapting it to concurrent writers requires mutual
/// exclusion around each whole validate-then-mutate sequence, since the
/// uniqueness checks and the mutation must be atomic together.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Validation gate shared by create and update
    ///
    /// The check order is fixed and the first failure wins; later checks
    /// are not evaluated. Uniqueness is checked against every live record,
    /// including, during an update, the record being updated itself -
    /// resubmitting a user's own current email or tax ID is reported as a
    /// conflict. See `update_rejects_resubmitted_own_email` in the tests.
    fn guard(
        &self,
        email: &str,
        password: &str,
        secondary_password: Option<&str>,
        tax_id: &str,
    ) -> Result<(), RegistryError> {
        if !is_valid_email(email) {
            return Err(RegistryError::InvalidEmail(email.to_string()));
        }

        if !is_valid_password(password) {
            return Err(RegistryError::InvalidPassword);
        }

        if let Some(secondary) = secondary_password {
            if !secondary.is_empty() && !is_valid_password(secondary) {
                return Err(RegistryError::InvalidSecondaryPassword);
            }
        }

        if self.users.iter().any(|u| u.email() == email) {
            return Err(RegistryError::EmailInUse(email.to_string()));
        }

        if self.users.iter().any(|u| u.tax_id() == tax_id) {
            return Err(RegistryError::TaxIdInUse(tax_id.to_string()));
        }

        if !has_tax_id_format(tax_id) || !is_valid_tax_id(tax_id) {
            return Err(RegistryError::InvalidTaxId(tax_id.to_string()));
        }

        Ok(())
    }

    /// Create a new user
    ///
    /// On success the record is assigned a fresh id, a display code
    /// derived from the creation timestamp and the current collection
    /// size, and a 1-based sequence number. Code and sequence are fixed
    /// for the lifetime of the record.
    pub fn create(&mut self, request: CreateUserRequest) -> Result<User, RegistryError> {
        self.guard(
            &request.email,
            &request.password,
            request.secondary_password.as_deref(),
            &request.tax_id,
        )?;

        let code = format!("{}{}", Utc::now().timestamp_millis(), self.users.len());
        let sequence = (self.users.len() + 1).to_string();

        // An empty secondary password is treated as absent
        let secondary_password = request.secondary_password.filter(|p| !p.is_empty());

        let user = User::new(
            UserId::generate(),
            request.name,
            request.email,
            request.password,
            request.tax_id,
            request.role,
            code,
            sequence,
            secondary_password,
        );

        info!(user_id = %user.id(), sequence = user.sequence(), "Created user");

        self.users.push(user.clone());

        Ok(user)
    }

    /// Update an existing user
    ///
    /// Runs the same gate as create before the lookup, so validation and
    /// conflict errors take precedence over `UserNotFound`. Code and
    /// sequence are never touched.
    pub fn update(
        &mut self,
        id: &UserId,
        request: UpdateUserRequest,
    ) -> Result<User, RegistryError> {
        self.guard(
            &request.email,
            &request.password,
            request.secondary_password.as_deref(),
            &request.tax_id,
        )?;

        let user = self
            .users
            .iter_mut()
            .find(|u| u.id() == id)
            .ok_or_else(|| RegistryError::UserNotFound(id.to_string()))?;

        user.set_name(request.name);
        user.set_email(request.email);
        user.set_password(request.password);
        user.set_tax_id(request.tax_id);
        user.set_role(request.role);

        if let Some(secondary) = request.secondary_password {
            if !secondary.is_empty() {
                user.set_secondary_password(secondary);
            }
        }

        info!(user_id = %id, "Updated user");

        Ok(user.clone())
    }

    /// Delete a user by id
    ///
    /// Idempotent: deleting an absent id is not an error. Returns whether
    /// a record was removed.
    pub fn delete(&mut self, id: &UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id() != id);
        let removed = self.users.len() < before;

        if removed {
            info!(user_id = %id, "Deleted user");
        } else {
            debug!(user_id = %id, "Delete requested for absent user");
        }

        removed
    }

    /// Get a user by id
    pub fn get_by_id(&self, id: &UserId) -> Result<&User, RegistryError> {
        self.users
            .iter()
            .find(|u| u.id() == id)
            .ok_or_else(|| RegistryError::UserNotFound(id.to_string()))
    }

    /// List all users in insertion order
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Count live records
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check whether the registry holds no records
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
