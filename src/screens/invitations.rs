use std::fmt::Write;
use std::sync::Arc;

use crate::models::{AvailabilityStatus, Invitation};
use crate::services::departments::group_jobs_by_department;
use crate::services::invitations::InvitationController;
use crate::state::AppState;

pub struct InvitationsScreen {
    state: Arc<AppState>,
    controller: InvitationController,
}

impl InvitationsScreen {
    pub fn new(state: Arc<AppState>) -> Self {
        let controller = InvitationController::new(Arc::clone(&state.backend));
        Self { state, controller }
    }

    pub fn controller(&self) -> &InvitationController {
        &self.controller
    }

    pub async fn refresh(&self) -> bool {
        match self.controller.load_invitations().await {
            Ok(_) => true,
            Err(e) => {
                self.state.notices.error(&e);
                false
            }
        }
    }

    pub async fn respond(&self, availability_id: &str, status: &str) -> bool {
        let status = match AvailabilityStatus::parse(status) {
            Ok(s) => s,
            Err(e) => {
                self.state.notices.error(&e);
                return false;
            }
        };

        match self.controller.respond(availability_id, status).await {
            Ok(_) => {
                self.state
                    .notices
                    .info(format!("Response saved: {}", status.label()));
                true
            }
            Err(e) => {
                self.state.notices.error(&e);
                false
            }
        }
    }

    pub fn render(&self) -> String {
        let invitations = self.controller.current();
        if invitations.is_empty() {
            return "No invitations.\n".to_string();
        }

        let pending = self.controller.pending();
        let mut out = String::new();
        let _ = writeln!(out, "Invitations ({} awaiting reply)", pending.len());
        for invitation in &invitations {
            self.write_line(&mut out, invitation);
        }
        out
    }

    pub fn render_schedule(&self) -> String {
        let schedule = self.controller.schedule();
        if schedule.is_empty() {
            return "Nothing scheduled.\n".to_string();
        }

        let mut out = String::from("Schedule\n");
        for (department, invitations) in group_jobs_by_department(&schedule) {
            let _ = writeln!(out, "{department}");
            for invitation in invitations {
                self.write_line(&mut out, invitation);
            }
        }
        out
    }

    fn write_line(&self, out: &mut String, invitation: &Invitation) {
        let job = &invitation.job;
        let _ = writeln!(
            out,
            "  {} {}  {} @ {}  [{}]",
            self.state.theme.status_marker(invitation.status),
            job.name,
            job.time_range(),
            job.location,
            invitation.id
        );
    }
}
