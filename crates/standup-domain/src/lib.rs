pub mod entry;
pub mod member;
pub mod query;
pub mod sprint;
pub mod store;

pub use entry::{EntryField, EntryId, StandupEntry};
pub use member::{MemberForm, MemberId, TeamMember};
pub use sprint::{Sprint, SprintForm, SprintId, SprintStatus};
pub use store::EntityStore;
