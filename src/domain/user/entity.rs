//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User identifier - assigned by the registry at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Mint a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID value
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a user within the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular customer account
    #[default]
    Customer,
    /// Manager - elevated privileges over customer accounts
    Manager,
    /// Administrator - full control
    Admin,
}

impl Role {
    /// Check if this role carries elevated privileges
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Manager | Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Manager => write!(f, "manager"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// User entity - the registry's sole record type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    id: UserId,
    /// Display name, free text
    name: String,
    /// Email address - unique across live records
    email: String,
    /// Plain password - never exposed in serialization
    #[serde(skip_serializing)]
    password: String,
    /// Formatted tax ID - unique across live records
    tax_id: String,
    /// Role of the user
    role: Role,
    /// Opaque display code derived at creation, never recomputed
    code: String,
    /// 1-based position at creation time, never recomputed
    sequence: String,
    /// Optional elevated-privilege secondary password - never serialized
    #[serde(skip_serializing, default)]
    secondary_password: Option<String>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        tax_id: impl Into<String>,
        role: Role,
        code: impl Into<String>,
        sequence: impl Into<String>,
        secondary_password: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password: password.into(),
            tax_id: tax_id.into(),
            role,
            code: code.into(),
            sequence: sequence.into(),
            secondary_password,
            created_at: Utc::now(),
        }
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn secondary_password(&self) -> Option<&str> {
        self.secondary_password.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // Mutators - code and sequence have none on purpose

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_tax_id(&mut self, tax_id: impl Into<String>) {
        self.tax_id = tax_id.into();
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn set_secondary_password(&mut self, password: impl Into<String>) {
        self.secondary_password = Some(password.into());
    }
}
