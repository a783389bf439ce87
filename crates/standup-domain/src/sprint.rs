use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::member::MemberId;

pub type SprintId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SprintStatus {
    Planned,
    Active,
    Completed,
}

impl SprintStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SprintStatus::Planned => "planned",
            SprintStatus::Active => "active",
            SprintStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprint {
    pub id: SprintId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Referential member ids. Dangling ids are tolerated and resolve to
    /// a placeholder name at read time.
    pub team_members: Vec<MemberId>,
    pub status: SprintStatus,
}

impl Sprint {
    pub fn new(form: SprintForm) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: form.name,
            start_date: form.start_date,
            end_date: form.end_date,
            team_members: form.team_members,
            status: SprintStatus::Planned,
        }
    }

    /// Merge form fields in place. `id` and `status` are not form-owned
    /// and are never touched.
    pub fn apply(&mut self, form: SprintForm) {
        self.name = form.name;
        self.start_date = form.start_date;
        self.end_date = form.end_date;
        self.team_members = form.team_members;
    }

    pub fn date_range(&self) -> String {
        format!("{} to {}", self.start_date, self.end_date)
    }
}

/// Form input for creating or editing a sprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintForm {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub team_members: Vec<MemberId>,
}

impl From<&Sprint> for SprintForm {
    fn from(sprint: &Sprint) -> Self {
        Self {
            name: sprint.name.clone(),
            start_date: sprint.start_date,
            end_date: sprint.end_date,
            team_members: sprint.team_members.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SprintForm {
        SprintForm {
            name: "Sprint 1".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
            team_members: vec![],
        }
    }

    #[test]
    fn test_new_sprint_starts_planned() {
        let sprint = Sprint::new(form());
        assert_eq!(sprint.status, SprintStatus::Planned);
    }

    #[test]
    fn test_apply_preserves_id_and_status() {
        let mut sprint = Sprint::new(form());
        sprint.status = SprintStatus::Active;
        let id = sprint.id;

        let member = Uuid::new_v4();
        sprint.apply(SprintForm {
            name: "Sprint 1 (revised)".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            team_members: vec![member],
        });

        assert_eq!(sprint.id, id);
        assert_eq!(sprint.status, SprintStatus::Active);
        assert_eq!(sprint.name, "Sprint 1 (revised)");
        assert_eq!(sprint.team_members, vec![member]);
    }

    #[test]
    fn test_date_range() {
        let sprint = Sprint::new(form());
        assert_eq!(sprint.date_range(), "2024-01-01 to 2024-01-14");
    }
}
