pub mod backend;
pub mod departments;
pub mod invitations;
pub mod job_editor;
pub mod messages;
pub mod roster;
