//! Pure derived-data functions over the entity store's collections.
//!
//! Missing references never fail here: unknown ids resolve to documented
//! defaults ("Unknown", empty slice, "").

use chrono::NaiveDate;

use crate::entry::{EntryField, StandupEntry};
use crate::member::{MemberId, TeamMember};
use crate::sprint::{Sprint, SprintId};

/// Name of the member with the given id, or "Unknown".
pub fn member_name(members: &[TeamMember], id: MemberId) -> &str {
    members
        .iter()
        .find(|m| m.id == id)
        .map(|m| m.name.as_str())
        .unwrap_or("Unknown")
}

/// Entries for the selected date in the session's active sprint. Empty
/// when no sprint is active.
pub fn todays_entries(
    entries: &[StandupEntry],
    selected_date: NaiveDate,
    active_sprint: Option<SprintId>,
) -> Vec<&StandupEntry> {
    let Some(sprint_id) = active_sprint else {
        return Vec::new();
    };
    entries
        .iter()
        .filter(|e| e.date == selected_date && e.sprint_id == sprint_id)
        .collect()
}

/// Members of the active sprint that are themselves active. Empty when
/// no sprint is active. Dangling member ids are silently skipped.
pub fn sprint_members<'a>(
    members: &'a [TeamMember],
    active_sprint: Option<&Sprint>,
) -> Vec<&'a TeamMember> {
    let Some(sprint) = active_sprint else {
        return Vec::new();
    };
    members
        .iter()
        .filter(|m| sprint.team_members.contains(&m.id) && m.active)
        .collect()
}

/// One answer for the entry matching the natural key, or "" when no
/// such entry exists yet.
pub fn entry_value(
    entries: &[StandupEntry],
    date: NaiveDate,
    sprint_id: SprintId,
    member_id: MemberId,
    field: EntryField,
) -> &str {
    entries
        .iter()
        .find(|e| e.matches_key(date, sprint_id, member_id))
        .map(|e| e.field(field))
        .unwrap_or("")
}

/// The last `limit` entries in insertion order, most recent first.
/// Pass `entries.len()` for the full history.
pub fn recent_activity(entries: &[StandupEntry], limit: usize) -> Vec<&StandupEntry> {
    entries.iter().rev().take(limit).collect()
}

pub fn active_member_count(members: &[TeamMember]) -> usize {
    members.iter().filter(|m| m.active).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::MemberForm;
    use crate::sprint::SprintForm;
    use uuid::Uuid;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn member(name: &str, active: bool) -> TeamMember {
        let mut member = TeamMember::new(MemberForm {
            name: name.to_string(),
            role: "Dev".to_string(),
        });
        member.active = active;
        member
    }

    #[test]
    fn test_member_name_falls_back_to_unknown() {
        let members = vec![member("Ann", true)];
        assert_eq!(member_name(&members, members[0].id), "Ann");
        assert_eq!(member_name(&members, Uuid::new_v4()), "Unknown");
        assert_eq!(member_name(&[], Uuid::new_v4()), "Unknown");
    }

    #[test]
    fn test_todays_entries_filters_date_and_sprint() {
        let sprint_id = Uuid::new_v4();
        let member_id = Uuid::new_v4();
        let entries = vec![
            StandupEntry::new(date(2), sprint_id, member_id),
            StandupEntry::new(date(3), sprint_id, member_id),
            StandupEntry::new(date(2), Uuid::new_v4(), member_id),
        ];

        let matched = todays_entries(&entries, date(2), Some(sprint_id));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].date, date(2));
    }

    #[test]
    fn test_todays_entries_empty_without_active_sprint() {
        let entries = vec![StandupEntry::new(date(2), Uuid::new_v4(), Uuid::new_v4())];
        assert!(todays_entries(&entries, date(2), None).is_empty());
    }

    #[test]
    fn test_sprint_members_excludes_inactive() {
        let members = vec![member("Ann", true), member("Bob", false)];
        let sprint = Sprint::new(SprintForm {
            name: "S1".to_string(),
            start_date: date(1),
            end_date: date(14),
            team_members: vec![members[0].id, members[1].id],
        });

        let result = sprint_members(&members, Some(&sprint));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Ann");
    }

    #[test]
    fn test_sprint_members_skips_dangling_ids() {
        let members = vec![member("Ann", true)];
        let sprint = Sprint::new(SprintForm {
            name: "S1".to_string(),
            start_date: date(1),
            end_date: date(14),
            team_members: vec![members[0].id, Uuid::new_v4()],
        });

        assert_eq!(sprint_members(&members, Some(&sprint)).len(), 1);
        assert!(sprint_members(&members, None).is_empty());
    }

    #[test]
    fn test_entry_value_defaults_to_empty() {
        let sprint_id = Uuid::new_v4();
        let member_id = Uuid::new_v4();
        let mut entry = StandupEntry::new(date(2), sprint_id, member_id);
        entry.set_field(EntryField::Today, "write tests".to_string());
        let entries = vec![entry];

        assert_eq!(
            entry_value(&entries, date(2), sprint_id, member_id, EntryField::Today),
            "write tests"
        );
        assert_eq!(
            entry_value(
                &entries,
                date(2),
                sprint_id,
                member_id,
                EntryField::Blockers
            ),
            ""
        );
        assert_eq!(
            entry_value(
                &entries,
                date(9),
                sprint_id,
                member_id,
                EntryField::Today
            ),
            ""
        );
    }

    #[test]
    fn test_recent_activity_reverses_insertion_order() {
        let sprint_id = Uuid::new_v4();
        let e1 = StandupEntry::new(date(1), sprint_id, Uuid::new_v4());
        let e2 = StandupEntry::new(date(2), sprint_id, Uuid::new_v4());
        let e3 = StandupEntry::new(date(3), sprint_id, Uuid::new_v4());
        let entries = vec![e1.clone(), e2.clone(), e3.clone()];

        let recent = recent_activity(&entries, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, e3.id);
        assert_eq!(recent[1].id, e2.id);

        let all = recent_activity(&entries, entries.len());
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].id, e1.id);
    }

    #[test]
    fn test_active_member_count() {
        let members = vec![member("Ann", true), member("Bob", false), member("Cy", true)];
        assert_eq!(active_member_count(&members), 2);
    }
}
