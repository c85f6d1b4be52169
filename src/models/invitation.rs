use serde::{Deserialize, Serialize};

use crate::models::availability::status_or_no_reply;
use crate::models::{AvailabilityStatus, Job};

/// A contact's own view of one availability record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invitation {
    pub id: String,
    #[serde(default, deserialize_with = "status_or_no_reply")]
    pub status: AvailabilityStatus,
    pub job: Job,
}

impl AsRef<Job> for Invitation {
    fn as_ref(&self) -> &Job {
        &self.job
    }
}
