use serde::{Deserialize, Serialize};

use super::role::Role;

/// The authenticated user for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Identity {
    pub fn new(name: &str, email: &str, role: Role) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            role,
        }
    }

    pub fn initial(&self) -> String {
        self.name.chars().next().unwrap_or('?').to_uppercase().to_string()
    }
}

/// Login form. Any identity is accepted once the fields validate.
#[derive(Debug, Default, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// Profile form. Password fields are only present while editing.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub csrf_token: String,
}

impl From<&Identity> for ProfileInput {
    fn from(identity: &Identity) -> Self {
        Self {
            name: identity.name.clone(),
            email: identity.email.clone(),
            ..Default::default()
        }
    }
}
