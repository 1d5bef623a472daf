use serde::Deserialize;

use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDraft {
    pub name: String,
    pub email: String,
    pub department: String,
}

impl PersonDraft {
    pub fn new(name: &str, email: &str, department: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            department: department.to_string(),
        }
    }
}

/// Raw form data from the people form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub csrf_token: String,
}

impl From<&Person> for PersonInput {
    fn from(p: &Person) -> Self {
        Self {
            name: p.name.clone(),
            email: p.email.clone(),
            department: p.department.clone(),
            csrf_token: String::new(),
        }
    }
}

impl Record for Person {
    type Draft = PersonDraft;
    const KIND: &'static str = "person";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: PersonDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            department: draft.department,
        }
    }

    fn apply_draft(&mut self, draft: PersonDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.department = draft.department;
    }
}
