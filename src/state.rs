use std::sync::{Arc, Mutex};

use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::models::AvailabilityStatus;
use crate::services::backend::SchedulingBackend;

/// Session-scoped context handed to every screen. Built once at startup.
pub struct AppState {
    pub config: ClientConfig,
    pub backend: Arc<dyn SchedulingBackend>,
    pub theme: Theme,
    pub notices: NoticeBoard,
}

impl AppState {
    pub fn new(config: ClientConfig, backend: Arc<dyn SchedulingBackend>) -> Self {
        let theme = config.theme;
        Self {
            config,
            backend,
            theme,
            notices: NoticeBoard::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn status_marker(&self, status: AvailabilityStatus) -> &'static str {
        match (self, status) {
            (Theme::Light, AvailabilityStatus::Confirmed) => "[+]",
            (Theme::Light, AvailabilityStatus::Maybe) => "[?]",
            (Theme::Light, AvailabilityStatus::Declined) => "[-]",
            (Theme::Light, AvailabilityStatus::NoReply) => "[ ]",
            (Theme::Dark, AvailabilityStatus::Confirmed) => "●",
            (Theme::Dark, AvailabilityStatus::Maybe) => "◐",
            (Theme::Dark, AvailabilityStatus::Declined) => "○",
            (Theme::Dark, AvailabilityStatus::NoReply) => "·",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Transient user-visible notices (toasts). Screens push, the shell drains.
#[derive(Default)]
pub struct NoticeBoard {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeBoard {
    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message.into());
    }

    pub fn error(&self, err: &ClientError) {
        tracing::debug!(kind = err.kind(), error = %err, "operation failed");
        self.push(NoticeLevel::Error, err.to_string());
    }

    pub fn drain(&self) -> Vec<Notice> {
        let mut notices = self.notices.lock().unwrap();
        std::mem::take(&mut *notices)
    }

    pub fn has_errors(&self) -> bool {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .any(|n| n.level == NoticeLevel::Error)
    }

    fn push(&self, level: NoticeLevel, message: String) {
        self.notices.lock().unwrap().push(Notice { level, message });
    }
}
