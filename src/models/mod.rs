pub mod availability;
pub mod contact;
pub mod department;
pub mod invitation;
pub mod job;
pub mod message;
pub mod recurrence;

pub use availability::{AvailabilityRecord, AvailabilityStatus, StatusUpdate};
pub use contact::Contact;
pub use department::{Department, NewDepartment};
pub use invitation::Invitation;
pub use job::{format_time_range, Job, JobUpdate};
pub use message::{Message, MessageDirection, MessageStatus};
pub use recurrence::{Frequency, Recurrence, RecurrencePattern, Weekday};
