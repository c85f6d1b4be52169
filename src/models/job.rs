use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AvailabilityRecord, Department, Recurrence};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub name: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub department: Option<Department>,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default)]
    pub skill_requirements: Vec<String>,
    #[serde(default)]
    pub availability: Vec<AvailabilityRecord>,
}

impl Job {
    pub fn record(&self, availability_id: &str) -> Option<&AvailabilityRecord> {
        self.availability.iter().find(|r| r.id == availability_id)
    }

    pub fn has_valid_time_range(&self) -> bool {
        self.end_time > self.start_time
    }

    pub fn time_range(&self) -> String {
        format_time_range(&self.start_time, &self.end_time)
    }

    pub fn department_name(&self) -> Option<&str> {
        self.department.as_ref().map(|d| d.name.as_str())
    }
}

impl AsRef<Job> for Job {
    fn as_ref(&self) -> &Job {
        self
    }
}

/// "Mon Jun 16, 09:00 - 17:00", or both dates when the shift crosses midnight.
pub fn format_time_range(start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
    if start.date_naive() == end.date_naive() {
        format!(
            "{}, {} - {}",
            start.format("%a %b %-d"),
            start.format("%H:%M"),
            end.format("%H:%M")
        )
    } else {
        format!(
            "{} - {}",
            start.format("%a %b %-d %H:%M"),
            end.format("%a %b %-d %H:%M")
        )
    }
}

/// Body of `PATCH /api/jobs/{id}`. Every editable field is sent.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdate {
    pub name: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub notes: Option<String>,
    pub department_id: Option<String>,
    pub recurrence: Recurrence,
    pub skill_requirements: Vec<String>,
}
