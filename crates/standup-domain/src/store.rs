use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entry::{EntryField, EntryId, StandupEntry};
use crate::member::{MemberForm, MemberId, TeamMember};
use crate::sprint::{Sprint, SprintForm, SprintId, SprintStatus};

/// Owns the three entity collections.
///
/// Insertion order is preserved; the recent-activity views depend on it.
/// The store performs no validation — missing references are resolved to
/// defaults by the query layer, and the mutation methods never fail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityStore {
    members: Vec<TeamMember>,
    sprints: Vec<Sprint>,
    entries: Vec<StandupEntry>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo fixture: three members and one active sprint spanning two
    /// weeks from today, referencing all of them.
    pub fn demo() -> Self {
        let mut store = Self::new();

        for (name, role) in [
            ("Alice Nguyen", "Frontend Developer"),
            ("Ben Ortiz", "Backend Developer"),
            ("Chloe Park", "QA Engineer"),
        ] {
            store.save_member(
                MemberForm {
                    name: name.to_string(),
                    role: role.to_string(),
                },
                None,
            );
        }

        let today = Local::now().date_naive();
        let member_ids = store.members.iter().map(|m| m.id).collect();
        let sprint = store.save_sprint(
            SprintForm {
                name: "Sprint 1".to_string(),
                start_date: today,
                end_date: today + chrono::Days::new(13),
                team_members: member_ids,
            },
            None,
        );

        // The fixture sprint ships already running.
        if let Some(sprint) = store.sprints.iter_mut().find(|s| s.id == sprint.id) {
            sprint.status = SprintStatus::Active;
        }

        store
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn sprints(&self) -> &[Sprint] {
        &self.sprints
    }

    pub fn entries(&self) -> &[StandupEntry] {
        &self.entries
    }

    pub fn member(&self, id: MemberId) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn sprint(&self, id: SprintId) -> Option<&Sprint> {
        self.sprints.iter().find(|s| s.id == id)
    }

    pub fn entry(&self, id: EntryId) -> Option<&StandupEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Merge the form into the sprint matching `editing`, or create a new
    /// one when there is no match. Edit and create share this path: the
    /// dispatch is keyed only by whether a stored sprint matches, never
    /// by a mode flag. Returns the resulting sprint.
    pub fn save_sprint(&mut self, form: SprintForm, editing: Option<SprintId>) -> Sprint {
        if let Some(sprint) = editing.and_then(|id| self.sprints.iter_mut().find(|s| s.id == id)) {
            sprint.apply(form);
            tracing::debug!(sprint = %sprint.id, "updated sprint");
            return sprint.clone();
        }

        let sprint = Sprint::new(form);
        tracing::debug!(sprint = %sprint.id, "created sprint");
        self.sprints.push(sprint.clone());
        sprint
    }

    /// Merge-or-create for members, analogous to `save_sprint`. New
    /// members default to active. Returns the resulting member.
    pub fn save_member(&mut self, form: MemberForm, editing: Option<MemberId>) -> TeamMember {
        if let Some(member) = editing.and_then(|id| self.members.iter_mut().find(|m| m.id == id)) {
            member.apply(form);
            tracing::debug!(member = %member.id, "updated member");
            return member.clone();
        }

        let member = TeamMember::new(form);
        tracing::debug!(member = %member.id, "created member");
        self.members.push(member.clone());
        member
    }

    /// The only entry-mutation path. Looks up the entry by its natural
    /// key and sets the named answer; when no entry exists yet, one is
    /// created lazily with the other two answers empty. Returns the
    /// resulting entry.
    pub fn upsert_standup_field(
        &mut self,
        date: NaiveDate,
        sprint_id: SprintId,
        member_id: MemberId,
        field: EntryField,
        value: String,
    ) -> StandupEntry {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.matches_key(date, sprint_id, member_id))
        {
            entry.set_field(field, value);
            tracing::debug!(entry = %entry.id, ?field, "updated standup entry");
            return entry.clone();
        }

        let mut entry = StandupEntry::new(date, sprint_id, member_id);
        entry.set_field(field, value);
        tracing::debug!(entry = %entry.id, ?field, "created standup entry");
        self.entries.push(entry.clone());
        entry
    }
}
