pub mod http;

use async_trait::async_trait;

use crate::errors::ClientResult;
use crate::models::{AvailabilityStatus, Department, Invitation, Job, JobUpdate, Message};

/// The scheduling REST API as seen by the client. All persistence lives
/// behind this trait.
#[async_trait]
pub trait SchedulingBackend: Send + Sync {
    /// `GET /api/jobs/{id}/roster`
    async fn fetch_roster(&self, job_id: &str) -> ClientResult<Job>;

    /// `PATCH /api/jobs/{id}/availability/{availabilityId}`
    async fn update_availability(
        &self,
        job_id: &str,
        availability_id: &str,
        status: AvailabilityStatus,
    ) -> ClientResult<()>;

    /// `PATCH /api/jobs/{id}`
    async fn update_job(&self, job_id: &str, update: &JobUpdate) -> ClientResult<()>;

    /// `GET /api/departments`
    async fn list_departments(&self) -> ClientResult<Vec<Department>>;

    /// `POST /api/departments`
    async fn create_department(&self, name: &str) -> ClientResult<Department>;

    /// `GET /api/messages/history`
    async fn message_history(&self) -> ClientResult<Vec<Message>>;

    /// `GET /api/contact/invitations`
    async fn contact_invitations(&self) -> ClientResult<Vec<Invitation>>;

    /// `PATCH /api/contact/availability/{id}`
    async fn respond_to_invitation(
        &self,
        availability_id: &str,
        status: AvailabilityStatus,
    ) -> ClientResult<()>;
}
