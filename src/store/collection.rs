//! Generic add / edit / delete state shared by the sub-admin, people and
//! event screens.
//!
//! ```text
//! Idle --begin_edit(id)--> Editing(id)
//! Editing(id) --submit | cancel_edit | remove(id)--> Idle
//! Editing(a) --begin_edit(b)--> Editing(b)
//! ```
//!
//! Ids come from a counter that only moves forward, so an id freed by
//! `remove` is never handed out again.

use std::collections::BTreeSet;

/// A record shape the collection can manage.
pub trait Record: Clone {
    /// Validated form fields. Everything the edit form can change.
    type Draft;
    /// Short name used in log lines.
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn from_draft(id: String, draft: Self::Draft) -> Self;
    /// Overwrite the form-editable fields, keeping everything else.
    fn apply_draft(&mut self, draft: Self::Draft);
}

/// Records that own a set of member ids (event attendees).
pub trait Membership {
    fn members_mut(&mut self) -> &mut BTreeSet<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    Created(String),
    Updated(String),
}

impl Submitted {
    pub fn id(&self) -> &str {
        match self {
            Submitted::Created(id) | Submitted::Updated(id) => id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EntityCollection<R> {
    records: Vec<R>,
    edit: EditState,
    next_id: u64,
}

impl<R: Record> Default for EntityCollection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> EntityCollection<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            edit: EditState::Idle,
            next_id: 1,
        }
    }

    /// Start from existing records. The counter begins past the highest
    /// numeric id, or past the record count if that is larger.
    pub fn with_records(records: Vec<R>) -> Self {
        let highest = records
            .iter()
            .filter_map(|r| r.id().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let next_id = highest.max(records.len() as u64) + 1;
        Self {
            records,
            edit: EditState::Idle,
            next_id,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.edit {
            EditState::Idle => None,
            EditState::Editing(id) => Some(id),
        }
    }

    /// The record the form should be pre-filled from.
    pub fn editing(&self) -> Option<&R> {
        self.editing_id().and_then(|id| self.get(id))
    }

    /// Update the edit target, or append a new record when idle.
    pub fn submit(&mut self, draft: R::Draft) -> Submitted {
        if let EditState::Editing(id) = std::mem::take(&mut self.edit) {
            if let Some(record) = self.records.iter_mut().find(|r| r.id() == id) {
                record.apply_draft(draft);
                log::info!("Updated {} '{}'", R::KIND, id);
                return Submitted::Updated(id);
            }
            log::warn!("Edit target {} '{}' is gone, saving as new", R::KIND, id);
        }

        let id = self.allocate_id();
        self.records.push(R::from_draft(id.clone(), draft));
        log::info!("Created {} '{}'", R::KIND, id);
        Submitted::Created(id)
    }

    /// Point the form at `id`. Unknown ids leave the state untouched.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.edit = EditState::Editing(id.to_string());
        true
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
    }

    /// Remove by id. Also drops the edit target if it pointed here.
    pub fn remove(&mut self, id: &str) -> Option<R> {
        let pos = self.records.iter().position(|r| r.id() == id)?;
        let removed = self.records.remove(pos);
        if self.editing_id() == Some(id) {
            self.edit = EditState::Idle;
        }
        log::info!("Removed {} '{}'", R::KIND, id);
        Some(removed)
    }

    fn allocate_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }
}

impl<R: Record + Membership> EntityCollection<R> {
    /// Add `member_id` to the owner's set if absent, remove it if present.
    /// Returns the new membership, or `None` when the owner does not exist.
    pub fn toggle_membership(&mut self, owner_id: &str, member_id: &str) -> Option<bool> {
        let owner = self.records.iter_mut().find(|r| r.id() == owner_id)?;
        let members = owner.members_mut();
        if members.remove(member_id) {
            Some(false)
        } else {
            members.insert(member_id.to_string());
            Some(true)
        }
    }

    /// Drop `member_id` from every owner.
    pub fn purge_member(&mut self, member_id: &str) {
        for record in &mut self.records {
            record.members_mut().remove(member_id);
        }
    }
}
