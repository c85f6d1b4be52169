use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{ClientError, ClientResult};
use crate::models::Contact;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    Confirmed,
    Maybe,
    Declined,
    #[default]
    NoReply,
}

impl AvailabilityStatus {
    /// Display order of the roster columns.
    pub const ALL: [AvailabilityStatus; 4] = [
        AvailabilityStatus::Confirmed,
        AvailabilityStatus::Maybe,
        AvailabilityStatus::Declined,
        AvailabilityStatus::NoReply,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::Confirmed => "confirmed",
            AvailabilityStatus::Maybe => "maybe",
            AvailabilityStatus::Declined => "declined",
            AvailabilityStatus::NoReply => "no_reply",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityStatus::Confirmed => "Confirmed",
            AvailabilityStatus::Maybe => "Maybe",
            AvailabilityStatus::Declined => "Declined",
            AvailabilityStatus::NoReply => "No reply",
        }
    }

    pub fn parse(s: &str) -> ClientResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "confirmed" => Ok(AvailabilityStatus::Confirmed),
            "maybe" => Ok(AvailabilityStatus::Maybe),
            "declined" => Ok(AvailabilityStatus::Declined),
            "no_reply" => Ok(AvailabilityStatus::NoReply),
            _ => Err(ClientError::Validation(format!(
                "unknown availability status: {s} (expected confirmed, maybe, declined or no_reply)"
            ))),
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailabilityRecord {
    pub id: String,
    pub contact: Contact,
    #[serde(default, deserialize_with = "status_or_no_reply")]
    pub status: AvailabilityStatus,
}

/// Contacts that never answered come back with a missing or null status.
pub(crate) fn status_or_no_reply<'de, D>(deserializer: D) -> Result<AvailabilityStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<AvailabilityStatus>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: AvailabilityStatus,
}
