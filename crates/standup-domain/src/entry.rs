use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::member::MemberId;
use crate::sprint::SprintId;

pub type EntryId = Uuid;

/// The three daily standup answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryField {
    Yesterday,
    Today,
    Blockers,
}

impl EntryField {
    pub const ALL: [EntryField; 3] = [
        EntryField::Yesterday,
        EntryField::Today,
        EntryField::Blockers,
    ];

    pub fn prompt(&self) -> &'static str {
        match self {
            EntryField::Yesterday => "What did you do yesterday?",
            EntryField::Today => "What will you do today?",
            EntryField::Blockers => "Any blockers or impediments?",
        }
    }
}

/// One member's answers for one sprint and one date.
///
/// The `(date, sprint_id, member_id)` triple is the natural key: at most
/// one entry exists per triple, enforced by the store's upsert path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandupEntry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub sprint_id: SprintId,
    pub member_id: MemberId,
    pub yesterday: String,
    pub today: String,
    pub blockers: String,
}

impl StandupEntry {
    pub fn new(date: NaiveDate, sprint_id: SprintId, member_id: MemberId) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            sprint_id,
            member_id,
            yesterday: String::new(),
            today: String::new(),
            blockers: String::new(),
        }
    }

    pub fn matches_key(&self, date: NaiveDate, sprint_id: SprintId, member_id: MemberId) -> bool {
        self.date == date && self.sprint_id == sprint_id && self.member_id == member_id
    }

    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Yesterday => &self.yesterday,
            EntryField::Today => &self.today,
            EntryField::Blockers => &self.blockers,
        }
    }

    /// Set a single answer, leaving the other two untouched.
    pub fn set_field(&mut self, field: EntryField, value: String) {
        match field {
            EntryField::Yesterday => self.yesterday = value,
            EntryField::Today => self.today = value,
            EntryField::Blockers => self.blockers = value,
        }
    }
}
