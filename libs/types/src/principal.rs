//! Authenticated identity types
//!
//! A `Principal` is supplied per-request by the session layer; the market
//! core only reads it, never constructs or stores one.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Role attached to an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Curates the market price data.
    Admin,
    /// Read-only consumer of prices, weather, and advice.
    Farmer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Farmer => write!(f, "farmer"),
        }
    }
}

/// The authenticated identity attached to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::Farmer).unwrap(), "\"farmer\"");
    }

    #[test]
    fn test_role_deserialization() {
        let role: Role = serde_json::from_str("\"farmer\"").unwrap();
        assert_eq!(role, Role::Farmer);
    }

    #[test]
    fn test_is_admin() {
        let principal = Principal {
            id: Uuid::now_v7(),
            username: "asad".to_string(),
            role: Role::Admin,
        };
        assert!(principal.is_admin());

        let farmer = Principal {
            role: Role::Farmer,
            ..principal
        };
        assert!(!farmer.is_admin());
    }
}
