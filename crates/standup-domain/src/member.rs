use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type MemberId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub role: String,
    pub active: bool,
}

impl TeamMember {
    pub fn new(form: MemberForm) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: form.name,
            role: form.role,
            active: true,
        }
    }

    /// Merge form fields in place. `id` and `active` are not form-owned
    /// and are never touched.
    pub fn apply(&mut self, form: MemberForm) {
        self.name = form.name;
        self.role = form.role;
    }
}

/// Form input for creating or editing a member.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberForm {
    pub name: String,
    pub role: String,
}

impl From<&TeamMember> for MemberForm {
    fn from(member: &TeamMember) -> Self {
        Self {
            name: member.name.clone(),
            role: member.role.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_is_active() {
        let member = TeamMember::new(MemberForm {
            name: "Ann".to_string(),
            role: "QA".to_string(),
        });
        assert!(member.active);
        assert_eq!(member.name, "Ann");
        assert_eq!(member.role, "QA");
    }

    #[test]
    fn test_apply_preserves_id_and_active() {
        let mut member = TeamMember::new(MemberForm {
            name: "Ann".to_string(),
            role: "QA".to_string(),
        });
        member.active = false;
        let id = member.id;

        member.apply(MemberForm {
            name: "Ann Lee".to_string(),
            role: "QA Lead".to_string(),
        });

        assert_eq!(member.id, id);
        assert!(!member.active);
        assert_eq!(member.name, "Ann Lee");
        assert_eq!(member.role, "QA Lead");
    }

    #[test]
    fn test_form_from_member_prefills_fields() {
        let member = TeamMember::new(MemberForm {
            name: "Ann".to_string(),
            role: "QA".to_string(),
        });
        let form = MemberForm::from(&member);
        assert_eq!(form.name, "Ann");
        assert_eq!(form.role, "QA");
    }
}
