use chrono::{DateTime, Datelike, NaiveDateTime, Utc};

use crate::errors::{ClientError, ClientResult};
use crate::models::{Frequency, Job, JobUpdate, Recurrence};
use crate::services::backend::SchedulingBackend;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobForm {
    pub name: String,
    pub location: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub notes: String,
    pub department_id: Option<String>,
    pub recurrence: Recurrence,
    pub skill_requirements: Vec<String>,
}

impl JobForm {
    pub fn from_job(job: &Job) -> Self {
        Self {
            name: job.name.clone(),
            location: job.location.clone(),
            start_time: Some(job.start_time),
            end_time: Some(job.end_time),
            notes: job.notes.clone().unwrap_or_default(),
            department_id: job.department.as_ref().map(|d| d.id.clone()),
            recurrence: job
                .recurrence
                .clone()
                .with_default_weekday(job.start_time.weekday().into()),
            skill_requirements: job.skill_requirements.clone(),
        }
    }

    /// Runs the required-field checks and, when they all pass, builds the
    /// PATCH body. Every failing field is reported at once.
    pub fn validate(&self) -> ClientResult<JobUpdate> {
        let mut problems = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            problems.push("name is required".to_string());
        }
        let location = self.location.trim();
        if location.is_empty() {
            problems.push("location is required".to_string());
        }

        if self.start_time.is_none() {
            problems.push("start time is required".to_string());
        }
        if self.end_time.is_none() {
            problems.push("end time is required".to_string());
        }
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            if end <= start {
                problems.push("end time must be after start time".to_string());
            }
        }

        if let Some(pattern) = self.recurrence.pattern() {
            if pattern.interval == 0 {
                problems.push("repeat interval must be at least 1".to_string());
            }
            if pattern.frequency == Frequency::Weekly && pattern.days_of_week.is_empty() {
                problems.push("weekly repeat needs at least one weekday".to_string());
            }
        }

        let (Some(start_time), Some(end_time)) = (self.start_time, self.end_time) else {
            return Err(ClientError::Validation(problems.join("; ")));
        };
        if !problems.is_empty() {
            return Err(ClientError::Validation(problems.join("; ")));
        }

        let notes = self.notes.trim();
        Ok(JobUpdate {
            name: name.to_string(),
            location: location.to_string(),
            start_time,
            end_time,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            department_id: self.department_id.clone().filter(|d| !d.trim().is_empty()),
            recurrence: self.recurrence.clone(),
            skill_requirements: self
                .skill_requirements
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

pub async fn submit(
    backend: &dyn SchedulingBackend,
    job_id: &str,
    form: &JobForm,
) -> ClientResult<()> {
    let update = form.validate()?;
    backend.update_job(job_id, &update).await?;
    tracing::info!(%job_id, "job updated");
    Ok(())
}

/// Accepts RFC 3339 or "YYYY-MM-DD HH:MM" (read as UTC).
pub fn parse_datetime(input: &str) -> ClientResult<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M")
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            ClientError::Validation(format!(
                "invalid date/time: {input} (expected YYYY-MM-DD HH:MM)"
            ))
        })
}
