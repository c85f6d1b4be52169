use std::sync::{Arc, Mutex};

use crate::errors::{ClientError, ClientResult};
use crate::models::{AvailabilityRecord, AvailabilityStatus, Job};
use crate::services::backend::SchedulingBackend;

/// Records of `job` currently holding `status`. Lazy and cheap to clone,
/// so a view can walk it as often as it renders.
pub fn group_by_status(
    job: &Job,
    status: AvailabilityStatus,
) -> impl Iterator<Item = &AvailabilityRecord> + Clone + '_ {
    job.availability.iter().filter(move |r| r.status == status)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub confirmed: usize,
    pub maybe: usize,
    pub declined: usize,
    pub no_reply: usize,
}

impl StatusCounts {
    pub fn of(job: &Job) -> Self {
        let mut counts = StatusCounts::default();
        for record in &job.availability {
            *counts.slot(record.status) += 1;
        }
        counts
    }

    pub fn get(&self, status: AvailabilityStatus) -> usize {
        match status {
            AvailabilityStatus::Confirmed => self.confirmed,
            AvailabilityStatus::Maybe => self.maybe,
            AvailabilityStatus::Declined => self.declined,
            AvailabilityStatus::NoReply => self.no_reply,
        }
    }

    pub fn total(&self) -> usize {
        self.confirmed + self.maybe + self.declined + self.no_reply
    }

    fn slot(&mut self, status: AvailabilityStatus) -> &mut usize {
        match status {
            AvailabilityStatus::Confirmed => &mut self.confirmed,
            AvailabilityStatus::Maybe => &mut self.maybe,
            AvailabilityStatus::Declined => &mut self.declined,
            AvailabilityStatus::NoReply => &mut self.no_reply,
        }
    }
}

/// Holds the roster snapshot for one job and moves invitees between
/// statuses through the backend. Every mutation is followed by a full
/// reload; local state is never patched in place.
pub struct RosterStatusController {
    backend: Arc<dyn SchedulingBackend>,
    current: Mutex<Option<Job>>,
}

impl RosterStatusController {
    pub fn new(backend: Arc<dyn SchedulingBackend>) -> Self {
        Self {
            backend,
            current: Mutex::new(None),
        }
    }

    /// The most recently loaded snapshot.
    pub fn current(&self) -> Option<Job> {
        self.current.lock().unwrap().clone()
    }

    pub async fn load_roster(&self, job_id: &str) -> ClientResult<Job> {
        let job = self.backend.fetch_roster(job_id).await?;
        if !job.has_valid_time_range() {
            tracing::warn!(job_id = %job.id, "job ends before it starts");
        }
        tracing::info!(
            job_id = %job.id,
            records = job.availability.len(),
            "roster loaded"
        );

        // Last completed load wins.
        *self.current.lock().unwrap() = Some(job.clone());
        Ok(job)
    }

    pub async fn set_status(
        &self,
        availability_id: &str,
        status: AvailabilityStatus,
    ) -> ClientResult<Job> {
        let job_id = {
            let current = self.current.lock().unwrap();
            current.as_ref().map(|j| j.id.clone())
        };
        let job_id = job_id.ok_or_else(|| ClientError::Validation("no roster loaded".to_string()))?;

        self.backend
            .update_availability(&job_id, availability_id, status)
            .await?;
        tracing::info!(%job_id, %availability_id, %status, "availability updated");

        self.load_roster(&job_id).await
    }

    pub fn group(&self, status: AvailabilityStatus) -> Vec<AvailabilityRecord> {
        self.current
            .lock()
            .unwrap()
            .as_ref()
            .map(|job| group_by_status(job, status).cloned().collect())
            .unwrap_or_default()
    }
}
