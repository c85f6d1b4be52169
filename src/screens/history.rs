use std::fmt::Write;
use std::sync::{Arc, Mutex};

use crate::models::{Message, MessageDirection};
use crate::services::messages::{self, MessageFilter};
use crate::state::AppState;

/// Read-only message log.
pub struct HistoryScreen {
    state: Arc<AppState>,
    messages: Mutex<Vec<Message>>,
}

impl HistoryScreen {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            messages: Mutex::new(Vec::new()),
        }
    }

    pub async fn refresh(&self) -> bool {
        match messages::load(self.state.backend.as_ref()).await {
            Ok(list) => {
                *self.messages.lock().unwrap() = list;
                true
            }
            Err(e) => {
                self.state.notices.error(&e);
                false
            }
        }
    }

    pub fn render(&self, filter: &MessageFilter) -> String {
        let all = self.messages.lock().unwrap();
        let shown = messages::filter(&all, filter);
        let s = messages::summary(&all);

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} of {} messages ({} in, {} out; {} failed)",
            shown.len(),
            all.len(),
            s.inbound,
            s.outbound,
            s.failed
        );
        for m in shown {
            let arrow = match m.direction {
                MessageDirection::Inbound => "<-",
                MessageDirection::Outbound => "->",
            };
            let _ = writeln!(
                out,
                "{} {arrow} {:<20} {:<9} {}{}",
                m.created_at.format("%Y-%m-%d %H:%M"),
                m.contact_name.as_deref().unwrap_or("-"),
                m.status.as_str(),
                m.job_name
                    .as_deref()
                    .map(|j| format!("[{j}] "))
                    .unwrap_or_default(),
                m.body
            );
        }
        out
    }
}
