use std::fmt::Write;
use std::sync::Arc;

use crate::models::AvailabilityStatus;
use crate::services::roster::{group_by_status, RosterStatusController, StatusCounts};
use crate::state::AppState;

/// Admin view of one job's invitees, one column per response status.
pub struct RosterScreen {
    state: Arc<AppState>,
    controller: RosterStatusController,
    job_id: String,
}

impl RosterScreen {
    pub fn new(state: Arc<AppState>, job_id: &str) -> Self {
        let controller = RosterStatusController::new(Arc::clone(&state.backend));
        Self {
            state,
            controller,
            job_id: job_id.to_string(),
        }
    }

    pub fn controller(&self) -> &RosterStatusController {
        &self.controller
    }

    /// Pull-to-refresh. Leaves the previous snapshot on screen when it fails.
    pub async fn refresh(&self) -> bool {
        match self.controller.load_roster(&self.job_id).await {
            Ok(_) => true,
            Err(e) => {
                self.state.notices.error(&e);
                false
            }
        }
    }

    /// Operator picked a new status for one invitee.
    pub async fn choose_status(&self, availability_id: &str, status: &str) -> bool {
        let status = match AvailabilityStatus::parse(status) {
            Ok(s) => s,
            Err(e) => {
                self.state.notices.error(&e);
                return false;
            }
        };

        match self.controller.set_status(availability_id, status).await {
            Ok(job) => {
                let who = job
                    .record(availability_id)
                    .map(|r| r.contact.display_name())
                    .unwrap_or_else(|| availability_id.to_string());
                self.state
                    .notices
                    .info(format!("{who} marked {}", status.label()));
                true
            }
            Err(e) => {
                self.state.notices.error(&e);
                false
            }
        }
    }

    pub fn render(&self) -> String {
        let Some(job) = self.controller.current() else {
            return format!("Roster for job {} is not loaded.\n", self.job_id);
        };
        let theme = self.state.theme;
        let counts = StatusCounts::of(&job);

        let mut out = String::new();
        let _ = writeln!(out, "{}", job.name);
        let _ = writeln!(out, "  {} @ {}", job.time_range(), job.location);
        if let Some(department) = job.department_name() {
            let _ = writeln!(out, "  Department: {department}");
        }
        if job.recurrence.is_recurring() {
            let _ = writeln!(out, "  Repeats: {}", job.recurrence.describe());
        }
        if let Some(notes) = job.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            let _ = writeln!(out, "  Notes: {notes}");
        }

        for status in AvailabilityStatus::ALL {
            let _ = writeln!(out, "\n{} ({})", status.label(), counts.get(status));
            for record in group_by_status(&job, status) {
                let _ = writeln!(
                    out,
                    "  {} {}  {}  [{}]",
                    theme.status_marker(status),
                    record.contact.display_name(),
                    record.contact.phone,
                    record.id
                );
            }
        }
        out
    }
}
