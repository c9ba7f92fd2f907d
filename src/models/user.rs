use super::spot::SpotId;
use serde::{Deserialize, Serialize};

/// Roles issued by the reservation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Employee,   // EMPLOYEE
    Manager,    // MANAGER
    Secretaire, // SECRETAIRE
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Employee => "EMPLOYEE",
            Role::Manager => "MANAGER",
            Role::Secretaire => "SECRETAIRE",
        }
    }

    /// Convert wire string -> enum. Unknown roles are ignored by callers.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "EMPLOYEE" => Some(Role::Employee),
            "MANAGER" => Some(Role::Manager),
            "SECRETAIRE" => Some(Role::Secretaire),
            _ => None,
        }
    }
}

/// User profile as served by `/users/me` and the auth endpoints.
/// `spot_associe` is the single reservation the server allows per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub nom: String,
    pub prenom: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub spot_associe: Option<SpotId>,
}

impl User {
    pub fn role_list(&self) -> Vec<Role> {
        self.roles.iter().filter_map(|r| Role::from_code(r)).collect()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role_list().contains(&role)
    }

    pub fn is_manager(&self) -> bool {
        self.has_role(Role::Manager)
    }
}
