//! Client-side session handling shared by every role-gated area.
//!
//! The session lives in tab-persistent key/value storage and is only ever
//! trusted after the token it carries has been re-validated locally.

pub mod guard;
pub mod logout;
pub mod store;
pub mod token;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use guard::{GuardDecision, GuardFailure, RouteGuard};
pub use logout::{logout, notify_deadline, LogoutNotifier, LOGOUT_NOTIFY_TIMEOUT_MS};
pub use store::{
    BrowserSessionStore, KeyValueSessionStore, LocalStorageBackend, MemoryBackend,
    MemorySessionStore, SessionStore, StorageBackend,
};
pub use token::{validate, TokenClaims, TokenError, TokenValidation};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const USERNAME_KEY: &str = "username";
pub const PROFILE_IMAGE_KEY: &str = "profile_image";

pub const SESSION_KEYS: &[&str] = &[TOKEN_KEY, ROLE_KEY, USERNAME_KEY, PROFILE_IMAGE_KEY];

pub const LOGIN_PATH: &str = "/login";

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const EMPLOYEE_ONLY: &[Role] = &[Role::Employee];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown role '{0}'")]
    UnknownRole(String),
    #[error("session token is empty")]
    EmptyToken,
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("failed to persist '{key}': {reason}")]
    WriteFailed { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Employee => "Employee",
        }
    }

    /// Route prefix of the area this role may enter.
    pub fn area_prefix(self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Employee => "/employee",
        }
    }

    /// Landing screen after login.
    pub fn home_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Employee => "/employee/my-profile",
        }
    }

    pub fn required_roles(self) -> &'static [Role] {
        match self {
            Role::Admin => ADMIN_ONLY,
            Role::Employee => EMPLOYEE_ONLY,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Admin" => Ok(Role::Admin),
            "Employee" => Ok(Role::Employee),
            other => Err(SessionError::UnknownRole(other.to_string())),
        }
    }
}

/// The persisted record of the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    role: Role,
    display_name: String,
    avatar_ref: Option<String>,
}

impl Session {
    pub fn new(
        token: impl Into<String>,
        role: Role,
        display_name: impl Into<String>,
        avatar_ref: Option<String>,
    ) -> Result<Self, SessionError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        Ok(Self {
            token,
            role,
            display_name: display_name.into(),
            avatar_ref: avatar_ref.filter(|value| !value.trim().is_empty()),
        })
    }

    /// Builds a session from untyped storage or wire values.
    pub fn from_raw(
        token: &str,
        role: &str,
        display_name: Option<String>,
        avatar_ref: Option<String>,
    ) -> Result<Self, SessionError> {
        let role = role.parse::<Role>()?;
        Self::new(token, role, display_name.unwrap_or_default(), avatar_ref)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn avatar_ref(&self) -> Option<&str> {
        self.avatar_ref.as_deref()
    }

    /// Name shown in the shell header, falling back to the role name.
    pub fn header_name(&self) -> &str {
        if self.display_name.trim().is_empty() {
            self.role.as_str()
        } else {
            &self.display_name
        }
    }

    /// Upper-cased first letter used when no avatar image is set.
    pub fn initial(&self) -> String {
        self.header_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Source of wall-clock time for expiry checks.
pub trait Clock {
    fn now_epoch_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
