use crate::errors::ClientResult;
use crate::models::{Message, MessageDirection, MessageStatus};
use crate::services::backend::SchedulingBackend;

#[derive(Debug, Clone, Default)]
pub struct MessageFilter {
    pub direction: Option<MessageDirection>,
    pub status: Option<MessageStatus>,
    pub contact: Option<String>,
    pub job: Option<String>,
}

impl MessageFilter {
    pub fn matches(&self, message: &Message) -> bool {
        if self.direction.is_some_and(|d| d != message.direction) {
            return false;
        }
        if self.status.is_some_and(|s| s != message.status) {
            return false;
        }
        if !contains_ci(message.contact_name.as_deref(), self.contact.as_deref()) {
            return false;
        }
        contains_ci(message.job_name.as_deref(), self.job.as_deref())
    }
}

fn contains_ci(haystack: Option<&str>, needle: Option<&str>) -> bool {
    match needle.map(str::trim).filter(|n| !n.is_empty()) {
        None => true,
        Some(needle) => haystack
            .map(|h| h.to_lowercase().contains(&needle.to_lowercase()))
            .unwrap_or(false),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistorySummary {
    pub inbound: usize,
    pub outbound: usize,
    pub sent: usize,
    pub delivered: usize,
    pub failed: usize,
}

pub fn summary(messages: &[Message]) -> HistorySummary {
    let mut s = HistorySummary::default();
    for m in messages {
        match m.direction {
            MessageDirection::Inbound => s.inbound += 1,
            MessageDirection::Outbound => s.outbound += 1,
        }
        match m.status {
            MessageStatus::Sent => s.sent += 1,
            MessageStatus::Delivered => s.delivered += 1,
            MessageStatus::Failed => s.failed += 1,
        }
    }
    s
}

/// Full history, newest first.
pub async fn load(backend: &dyn SchedulingBackend) -> ClientResult<Vec<Message>> {
    let mut messages = backend.message_history().await?;
    messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    tracing::info!(count = messages.len(), "message history loaded");
    Ok(messages)
}

pub fn filter<'a>(messages: &'a [Message], filter: &MessageFilter) -> Vec<&'a Message> {
    messages.iter().filter(|m| filter.matches(m)).collect()
}

pub fn parse_direction(s: &str) -> Option<MessageDirection> {
    match s.trim().to_lowercase().as_str() {
        "inbound" | "in" => Some(MessageDirection::Inbound),
        "outbound" | "out" => Some(MessageDirection::Outbound),
        _ => None,
    }
}

pub fn parse_status(s: &str) -> Option<MessageStatus> {
    match s.trim().to_lowercase().as_str() {
        "sent" => Some(MessageStatus::Sent),
        "delivered" => Some(MessageStatus::Delivered),
        "failed" => Some(MessageStatus::Failed),
        _ => None,
    }
}
