use std::sync::{Arc, Mutex};

use crate::errors::ClientResult;
use crate::models::{AvailabilityStatus, Invitation};
use crate::services::backend::SchedulingBackend;

/// Contact-side mirror of the roster: the signed-in contact's invitations
/// and their answers.
pub struct InvitationController {
    backend: Arc<dyn SchedulingBackend>,
    current: Mutex<Vec<Invitation>>,
}

impl InvitationController {
    pub fn new(backend: Arc<dyn SchedulingBackend>) -> Self {
        Self {
            backend,
            current: Mutex::new(Vec::new()),
        }
    }

    pub fn current(&self) -> Vec<Invitation> {
        self.current.lock().unwrap().clone()
    }

    pub async fn load_invitations(&self) -> ClientResult<Vec<Invitation>> {
        let invitations = self.backend.contact_invitations().await?;
        tracing::info!(count = invitations.len(), "invitations loaded");
        *self.current.lock().unwrap() = invitations.clone();
        Ok(invitations)
    }

    pub async fn respond(
        &self,
        availability_id: &str,
        status: AvailabilityStatus,
    ) -> ClientResult<Vec<Invitation>> {
        self.backend
            .respond_to_invitation(availability_id, status)
            .await?;
        tracing::info!(%availability_id, %status, "invitation answered");
        self.load_invitations().await
    }

    /// Invitations still waiting for an answer.
    pub fn pending(&self) -> Vec<Invitation> {
        pending(&self.current.lock().unwrap())
    }

    /// Confirmed jobs, soonest first.
    pub fn schedule(&self) -> Vec<Invitation> {
        schedule(&self.current.lock().unwrap())
    }
}

pub fn pending(invitations: &[Invitation]) -> Vec<Invitation> {
    invitations
        .iter()
        .filter(|i| i.status == AvailabilityStatus::NoReply)
        .cloned()
        .collect()
}

pub fn schedule(invitations: &[Invitation]) -> Vec<Invitation> {
    let mut confirmed: Vec<Invitation> = invitations
        .iter()
        .filter(|i| i.status == AvailabilityStatus::Confirmed)
        .cloned()
        .collect();
    confirmed.sort_by(|a, b| a.job.start_time.cmp(&b.job.start_time));
    confirmed
}
