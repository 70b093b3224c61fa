//! Viewer - the signed-in identity supplied by the session provider

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DomainError, ViewerId};

/// Account role as reported by the session provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "USER"),
            Role::Admin => write!(f, "ADMIN"),
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USER" => Ok(Self::User),
            "ADMIN" => Ok(Self::Admin),
            other => Err(DomainError::parse(format!("unknown role: {other}"))),
        }
    }
}

/// A signed-in viewer. Anonymous viewers are represented as `Option::None`
/// wherever a viewer is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub id: ViewerId,
    pub name: Option<String>,
    pub role: Role,
}

impl Viewer {
    pub fn new(id: ViewerId) -> Self {
        Self {
            id,
            name: None,
            role: Role::User,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name for display, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" USER ".parse::<Role>().unwrap(), Role::User);
        assert!("editor".parse::<Role>().is_err());
    }

    #[test]
    fn only_admins_are_admins() {
        let id = ViewerId::new("u1").unwrap();
        assert!(!Viewer::new(id.clone()).is_admin());
        assert!(Viewer::new(id).with_role(Role::Admin).is_admin());
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let viewer = Viewer::new(ViewerId::new("u1").unwrap());
        assert_eq!(viewer.display_name(), "u1");
        assert_eq!(viewer.with_name("Ada").display_name(), "Ada");
    }
}
