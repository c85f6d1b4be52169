//! Screen boundary: every error stops here and becomes a notice on the
//! session's notice board. Displayed state only changes on success.

pub mod departments;
pub mod history;
pub mod invitations;
pub mod job_edit;
pub mod roster;

pub use departments::DepartmentsScreen;
pub use history::HistoryScreen;
pub use invitations::InvitationsScreen;
pub use job_edit::JobEditScreen;
pub use roster::RosterScreen;
