use std::fmt::Write;
use std::sync::Arc;

use crate::errors::ClientError;
use crate::models::{format_time_range, Department};
use crate::services::departments::{self, dropdown_options};
use crate::services::job_editor::{self, JobForm};
use crate::state::AppState;

pub struct JobEditScreen {
    state: Arc<AppState>,
    job_id: String,
    departments: Vec<Department>,
    form: Option<JobForm>,
}

impl JobEditScreen {
    pub fn new(state: Arc<AppState>, job_id: &str) -> Self {
        Self {
            state,
            job_id: job_id.to_string(),
            departments: Vec::new(),
            form: None,
        }
    }

    /// Seeds the form from the job and fills the department picker. A failed
    /// department lookup still leaves the form editable.
    pub async fn load(&mut self) -> bool {
        let backend = self.state.backend.as_ref();
        match backend.fetch_roster(&self.job_id).await {
            Ok(job) => self.form = Some(JobForm::from_job(&job)),
            Err(e) => {
                self.state.notices.error(&e);
                return false;
            }
        }

        match departments::list(backend).await {
            Ok(list) => self.departments = list,
            Err(e) => self.state.notices.error(&e),
        }
        true
    }

    pub fn form_mut(&mut self) -> Option<&mut JobForm> {
        self.form.as_mut()
    }

    /// Picks a department by name; "none" clears it.
    pub fn select_department(&mut self, name: &str) -> bool {
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        if name.trim().eq_ignore_ascii_case("none") {
            form.department_id = None;
            return true;
        }

        match self
            .departments
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name.trim()))
        {
            Some(department) => {
                form.department_id = Some(department.id.clone());
                true
            }
            None => {
                self.state.notices.error(&ClientError::Validation(format!(
                    "unknown department: {name}"
                )));
                false
            }
        }
    }

    pub async fn save(&self) -> bool {
        let Some(form) = self.form.as_ref() else {
            self.state
                .notices
                .error(&ClientError::Validation("job is not loaded".to_string()));
            return false;
        };

        match job_editor::submit(self.state.backend.as_ref(), &self.job_id, form).await {
            Ok(()) => {
                self.state.notices.info(format!("Saved {}", form.name.trim()));
                true
            }
            Err(e) => {
                self.state.notices.error(&e);
                false
            }
        }
    }

    pub fn render(&self) -> String {
        let Some(form) = self.form.as_ref() else {
            return format!("Job {} is not loaded.\n", self.job_id);
        };

        let mut out = String::new();
        let _ = writeln!(out, "Name:      {}", form.name);
        let _ = writeln!(out, "Location:  {}", form.location);
        if let (Some(start), Some(end)) = (form.start_time, form.end_time) {
            let _ = writeln!(out, "When:      {}", format_time_range(&start, &end));
        }
        let _ = writeln!(out, "Repeats:   {}", form.recurrence.describe());
        if !form.skill_requirements.is_empty() {
            let _ = writeln!(out, "Skills:    {}", form.skill_requirements.join(", "));
        }
        if !form.notes.trim().is_empty() {
            let _ = writeln!(out, "Notes:     {}", form.notes.trim());
        }
        let _ = writeln!(out, "Department:");
        for option in dropdown_options(&self.departments, form.department_id.as_deref()) {
            let mark = if option.selected { "*" } else { " " };
            let _ = writeln!(out, "  {mark} {}", option.label);
        }
        out
    }
}
