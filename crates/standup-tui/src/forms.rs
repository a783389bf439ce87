//! Draft state for the modal forms.
//!
//! Drafts hold raw text buffers; a draft only becomes a domain form
//! record when it is dispatched, and a sprint draft whose dates do not
//! parse is not dispatchable.

use chrono::NaiveDate;
use standup_core::{InputState, SelectionState};
use standup_domain::{EntryField, MemberForm, MemberId, Sprint, SprintForm, SprintId, TeamMember};

const DATE_FMT: &str = "%Y-%m-%d";

/// Default sprint length when prefilling the end date, matching the
/// two-week cadence of the demo fixture.
const SPRINT_DAYS: u64 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprintField {
    Name,
    StartDate,
    EndDate,
    Members,
}

impl SprintField {
    pub fn next(self) -> Self {
        match self {
            SprintField::Name => SprintField::StartDate,
            SprintField::StartDate => SprintField::EndDate,
            SprintField::EndDate => SprintField::Members,
            SprintField::Members => SprintField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SprintField::Name => SprintField::Members,
            SprintField::StartDate => SprintField::Name,
            SprintField::EndDate => SprintField::StartDate,
            SprintField::Members => SprintField::EndDate,
        }
    }
}

pub struct SprintFormState {
    pub editing: Option<SprintId>,
    pub name: InputState,
    pub start_date: InputState,
    pub end_date: InputState,
    /// Member ids ticked in the multi-select.
    pub team_members: Vec<MemberId>,
    pub member_cursor: SelectionState,
    pub focus: SprintField,
}

impl SprintFormState {
    /// Blank draft for a new sprint, prefilled with a two-week range
    /// starting on the session's selected date.
    pub fn blank(selected_date: NaiveDate) -> Self {
        let end = selected_date + chrono::Days::new(SPRINT_DAYS);
        Self {
            editing: None,
            name: InputState::new(),
            start_date: InputState::with_text(selected_date.format(DATE_FMT).to_string()),
            end_date: InputState::with_text(end.format(DATE_FMT).to_string()),
            team_members: Vec::new(),
            member_cursor: SelectionState::new(),
            focus: SprintField::Name,
        }
    }

    /// Draft prefilled from an existing sprint.
    pub fn edit(sprint: &Sprint) -> Self {
        Self {
            editing: Some(sprint.id),
            name: InputState::with_text(sprint.name.clone()),
            start_date: InputState::with_text(sprint.start_date.format(DATE_FMT).to_string()),
            end_date: InputState::with_text(sprint.end_date.format(DATE_FMT).to_string()),
            team_members: sprint.team_members.clone(),
            member_cursor: SelectionState::new(),
            focus: SprintField::Name,
        }
    }

    pub fn focused_input(&mut self) -> Option<&mut InputState> {
        match self.focus {
            SprintField::Name => Some(&mut self.name),
            SprintField::StartDate => Some(&mut self.start_date),
            SprintField::EndDate => Some(&mut self.end_date),
            SprintField::Members => None,
        }
    }

    pub fn toggle_member(&mut self, id: MemberId) {
        if let Some(pos) = self.team_members.iter().position(|m| *m == id) {
            self.team_members.remove(pos);
        } else {
            self.team_members.push(id);
        }
    }

    pub fn has_member(&self, id: MemberId) -> bool {
        self.team_members.contains(&id)
    }

    /// The draft as a domain form, or None while either date fails to
    /// parse. An empty name is accepted.
    pub fn to_form(&self) -> Option<SprintForm> {
        let start_date = NaiveDate::parse_from_str(self.start_date.as_str(), DATE_FMT).ok()?;
        let end_date = NaiveDate::parse_from_str(self.end_date.as_str(), DATE_FMT).ok()?;
        Some(SprintForm {
            name: self.name.as_str().to_string(),
            start_date,
            end_date,
            team_members: self.team_members.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    Name,
    Role,
}

impl MemberField {
    pub fn next(self) -> Self {
        match self {
            MemberField::Name => MemberField::Role,
            MemberField::Role => MemberField::Name,
        }
    }
}

pub struct MemberFormState {
    pub editing: Option<MemberId>,
    pub name: InputState,
    pub role: InputState,
    pub focus: MemberField,
}

impl MemberFormState {
    pub fn blank() -> Self {
        Self {
            editing: None,
            name: InputState::new(),
            role: InputState::new(),
            focus: MemberField::Name,
        }
    }

    pub fn edit(member: &TeamMember) -> Self {
        Self {
            editing: Some(member.id),
            name: InputState::with_text(member.name.clone()),
            role: InputState::with_text(member.role.clone()),
            focus: MemberField::Name,
        }
    }

    pub fn focused_input(&mut self) -> &mut InputState {
        match self.focus {
            MemberField::Name => &mut self.name,
            MemberField::Role => &mut self.role,
        }
    }

    pub fn to_form(&self) -> MemberForm {
        MemberForm {
            name: self.name.as_str().to_string(),
            role: self.role.as_str().to_string(),
        }
    }
}

/// Draft for a single standup answer.
pub struct AnswerEditorState {
    pub member_id: MemberId,
    pub field: EntryField,
    pub input: InputState,
}

impl AnswerEditorState {
    pub fn new(member_id: MemberId, field: EntryField, current: &str) -> Self {
        Self {
            member_id,
            field,
            input: InputState::with_text(current),
        }
    }
}
