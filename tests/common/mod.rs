#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use rollcall::config::ClientConfig;
use rollcall::errors::{ClientError, ClientResult};
use rollcall::models::{
    AvailabilityRecord, AvailabilityStatus, Contact, Department, Invitation, Job, JobUpdate,
    Message, Recurrence,
};
use rollcall::services::backend::SchedulingBackend;
use rollcall::state::AppState;

#[derive(Clone, Copy, PartialEq)]
pub enum RosterFailure {
    NotFound,
    Network,
}

/// In-memory backend. Mutations apply immediately unless told to reject.
#[derive(Default)]
pub struct MockBackend {
    pub jobs: Mutex<HashMap<String, Job>>,
    pub departments: Mutex<Vec<Department>>,
    pub messages: Mutex<Vec<Message>>,
    pub invitations: Mutex<Vec<Invitation>>,
    pub status_calls: Mutex<Vec<(String, AvailabilityStatus)>>,
    pub job_updates: Mutex<Vec<(String, JobUpdate)>>,
    pub roster_fetches: Mutex<usize>,
    pub roster_failure: Mutex<Option<RosterFailure>>,
    pub reject_updates: AtomicBool,
    pub update_delays: Mutex<HashMap<String, Duration>>,
}

impl MockBackend {
    pub fn with_job(job: Job) -> Self {
        let backend = MockBackend::default();
        backend.jobs.lock().unwrap().insert(job.id.clone(), job);
        backend
    }

    pub fn fail_roster(&self, failure: Option<RosterFailure>) {
        *self.roster_failure.lock().unwrap() = failure;
    }

    pub fn reject_updates(&self, reject: bool) {
        self.reject_updates.store(reject, Ordering::SeqCst);
    }

    pub fn delay_update(&self, availability_id: &str, delay: Duration) {
        self.update_delays
            .lock()
            .unwrap()
            .insert(availability_id.to_string(), delay);
    }

    pub fn status_call_count(&self) -> usize {
        self.status_calls.lock().unwrap().len()
    }

    pub fn roster_fetch_count(&self) -> usize {
        *self.roster_fetches.lock().unwrap()
    }

    fn delay_for(&self, availability_id: &str) -> Option<Duration> {
        self.update_delays.lock().unwrap().get(availability_id).copied()
    }
}

#[async_trait]
impl SchedulingBackend for MockBackend {
    async fn fetch_roster(&self, job_id: &str) -> ClientResult<Job> {
        *self.roster_fetches.lock().unwrap() += 1;
        match *self.roster_failure.lock().unwrap() {
            Some(RosterFailure::NotFound) => {
                return Err(ClientError::NotFound(format!("/api/jobs/{job_id}/roster")))
            }
            Some(RosterFailure::Network) => {
                return Err(ClientError::Network("connection refused".to_string()))
            }
            None => {}
        }
        self.jobs
            .lock()
            .unwrap()
            .get(job_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("/api/jobs/{job_id}/roster")))
    }

    async fn update_availability(
        &self,
        job_id: &str,
        availability_id: &str,
        status: AvailabilityStatus,
    ) -> ClientResult<()> {
        if let Some(delay) = self.delay_for(availability_id) {
            tokio::time::sleep(delay).await;
        }
        self.status_calls
            .lock()
            .unwrap()
            .push((availability_id.to_string(), status));

        if self.reject_updates.load(Ordering::SeqCst) {
            return Err(ClientError::Update("status change rejected".to_string()));
        }

        let mut jobs = self.jobs.lock().unwrap();
        let record = jobs
            .get_mut(job_id)
            .and_then(|j| j.availability.iter_mut().find(|r| r.id == availability_id))
            .ok_or_else(|| {
                ClientError::Update(format!("stale availability id {availability_id}"))
            })?;
        record.status = status;
        Ok(())
    }

    async fn update_job(&self, job_id: &str, update: &JobUpdate) -> ClientResult<()> {
        if self.reject_updates.load(Ordering::SeqCst) {
            return Err(ClientError::Update("job update rejected".to_string()));
        }
        self.job_updates
            .lock()
            .unwrap()
            .push((job_id.to_string(), update.clone()));
        Ok(())
    }

    async fn list_departments(&self) -> ClientResult<Vec<Department>> {
        Ok(self.departments.lock().unwrap().clone())
    }

    async fn create_department(&self, name: &str) -> ClientResult<Department> {
        let mut departments = self.departments.lock().unwrap();
        let department = Department {
            id: format!("d{}", departments.len() + 1),
            name: name.to_string(),
        };
        departments.push(department.clone());
        Ok(department)
    }

    async fn message_history(&self) -> ClientResult<Vec<Message>> {
        Ok(self.messages.lock().unwrap().clone())
    }

    async fn contact_invitations(&self) -> ClientResult<Vec<Invitation>> {
        Ok(self.invitations.lock().unwrap().clone())
    }

    async fn respond_to_invitation(
        &self,
        availability_id: &str,
        status: AvailabilityStatus,
    ) -> ClientResult<()> {
        self.status_calls
            .lock()
            .unwrap()
            .push((availability_id.to_string(), status));
        if self.reject_updates.load(Ordering::SeqCst) {
            return Err(ClientError::Update("response rejected".to_string()));
        }
        let mut invitations = self.invitations.lock().unwrap();
        let invitation = invitations
            .iter_mut()
            .find(|i| i.id == availability_id)
            .ok_or_else(|| {
                ClientError::Update(format!("stale availability id {availability_id}"))
            })?;
        invitation.status = status;
        Ok(())
    }
}

// ── Fixtures ──

pub fn contact(id: &str, first: &str, last: &str) -> Contact {
    Contact {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        phone: format!("+1555000{}", id.len()),
        email: None,
    }
}

pub fn record(id: &str, first: &str, status: AvailabilityStatus) -> AvailabilityRecord {
    AvailabilityRecord {
        id: id.to_string(),
        contact: contact(&format!("c-{id}"), first, "Tester"),
        status,
    }
}

pub fn job(id: &str, records: Vec<AvailabilityRecord>) -> Job {
    Job {
        id: id.to_string(),
        name: "Stage crew".to_string(),
        location: "Hall B".to_string(),
        // 2025-06-16 is a Monday
        start_time: Utc.with_ymd_and_hms(2025, 6, 16, 9, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2025, 6, 16, 17, 0, 0).unwrap(),
        notes: None,
        department: None,
        recurrence: Recurrence::Unset,
        skill_requirements: vec![],
        availability: records,
    }
}

/// Job J1: a1 has not answered, a2 confirmed.
pub fn job_j1() -> Job {
    job(
        "J1",
        vec![
            record("a1", "Ada", AvailabilityStatus::NoReply),
            record("a2", "Alan", AvailabilityStatus::Confirmed),
        ],
    )
}

pub fn app_state(backend: Arc<MockBackend>) -> Arc<AppState> {
    Arc::new(AppState::new(
        ClientConfig::with_api_url("http://backend.invalid"),
        backend,
    ))
}
