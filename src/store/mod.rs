pub mod collection;
pub mod registry;
pub mod workspace;

pub use self::collection::{EditState, EntityCollection, Membership, Record, Submitted};
pub use self::registry::WorkspaceRegistry;
pub use self::workspace::Workspace;
