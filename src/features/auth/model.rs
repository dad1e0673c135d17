use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::ROLE_ADMIN;

/// Identity extracted from a validated bearer token.
/// Every row the service touches is scoped by `sub`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Check if user has a specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Check if user can author and manage challenges
    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin() {
        let user = AuthenticatedUser {
            sub: "user-1".to_string(),
            email: None,
            roles: vec!["admin".to_string()],
        };
        assert!(user.is_admin());

        let user = AuthenticatedUser {
            sub: "user-2".to_string(),
            email: None,
            roles: vec![],
        };
        assert!(!user.is_admin());
    }
}
