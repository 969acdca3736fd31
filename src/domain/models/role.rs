use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Workspace role of the current user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Standard,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Standard => "standard",
            Role::Admin => "admin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Standard => "Standard User",
            Role::Admin => "Admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Coerce an optional stored value, absent meaning standard
    pub fn from_persisted(value: Option<&str>) -> Role {
        value.map(Role::coerce).unwrap_or_default()
    }

    /// Unrecognized role strings never grant more than standard
    pub fn coerce(value: &str) -> Role {
        value.parse().unwrap_or_default()
    }

    pub fn all() -> [Role; 2] {
        [Role::Standard, Role::Admin]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Role::Standard),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}
