use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role declared at login. Decides which views are reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[serde(rename = "subadmin")]
    SubAdmin,
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::SubAdmin, Role::User];

    /// Wire name, as used in forms and the session.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::SubAdmin => "subadmin",
            Role::User => "user",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::SubAdmin => "Sub-Admin",
            Role::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "admin" => Ok(Role::Admin),
            "subadmin" => Ok(Role::SubAdmin),
            "user" => Ok(Role::User),
            other => Err(format!("Unknown role '{other}'")),
        }
    }
}
