pub mod attendance;
pub mod event;
pub mod identity;
pub mod person;
pub mod role;
pub mod seed;
pub mod sub_admin;

pub use self::attendance::AttendanceRecord;
pub use self::event::{Event, EventDraft, EventInput};
pub use self::identity::{Identity, LoginInput, ProfileInput};
pub use self::person::{Person, PersonDraft, PersonInput};
pub use self::role::Role;
pub use self::sub_admin::{SubAdmin, SubAdminDraft, SubAdminInput};
