use serde::Deserialize;

use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubAdmin {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Free-text job label, e.g. "Event Manager". Not a [`Role`](super::Role).
    pub role_label: String,
}

/// Validated sub-admin form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubAdminDraft {
    pub name: String,
    pub email: String,
    pub role_label: String,
}

/// Raw form data from the sub-admin form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubAdminInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role_label: String,
    #[serde(default)]
    pub csrf_token: String,
}

impl From<&SubAdmin> for SubAdminInput {
    fn from(s: &SubAdmin) -> Self {
        Self {
            name: s.name.clone(),
            email: s.email.clone(),
            role_label: s.role_label.clone(),
            csrf_token: String::new(),
        }
    }
}

impl Record for SubAdmin {
    type Draft = SubAdminDraft;
    const KIND: &'static str = "sub_admin";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: SubAdminDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            role_label: draft.role_label,
        }
    }

    fn apply_draft(&mut self, draft: SubAdminDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.role_label = draft.role_label;
    }
}
