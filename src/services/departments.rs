use std::collections::BTreeMap;

use crate::errors::{ClientError, ClientResult};
use crate::models::{Department, Job};
use crate::services::backend::SchedulingBackend;

pub const UNASSIGNED: &str = "Unassigned";

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOption {
    pub value: Option<String>,
    pub label: String,
    pub selected: bool,
}

pub async fn list(backend: &dyn SchedulingBackend) -> ClientResult<Vec<Department>> {
    let departments = backend.list_departments().await?;
    tracing::info!(count = departments.len(), "departments loaded");
    Ok(departments)
}

pub async fn create(backend: &dyn SchedulingBackend, name: &str) -> ClientResult<Department> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ClientError::Validation(
            "department name is required".to_string(),
        ));
    }

    let department = backend.create_department(name).await?;
    tracing::info!(id = %department.id, name = %department.name, "department created");
    Ok(department)
}

/// Options for a department picker: "No department" first, then by name.
pub fn dropdown_options(
    departments: &[Department],
    selected: Option<&str>,
) -> Vec<DropdownOption> {
    let mut sorted: Vec<&Department> = departments.iter().collect();
    sorted.sort_by_key(|d| d.name.to_lowercase());

    let mut options = vec![DropdownOption {
        value: None,
        label: "No department".to_string(),
        selected: selected.is_none(),
    }];
    options.extend(sorted.into_iter().map(|d| DropdownOption {
        value: Some(d.id.clone()),
        label: d.name.clone(),
        selected: selected == Some(d.id.as_str()),
    }));
    options
}

/// Buckets jobs (or anything carrying one) by department name, case-insensitively,
/// with "Unassigned" last. A department literally named "Unassigned" shares
/// that bucket. Items keep their input order within a bucket.
pub fn group_jobs_by_department<T: AsRef<Job>>(items: &[T]) -> Vec<(String, Vec<&T>)> {
    let mut named: BTreeMap<String, (String, Vec<&T>)> = BTreeMap::new();
    let mut unassigned = Vec::new();

    for item in items {
        match item.as_ref().department_name() {
            Some(name) if !name.eq_ignore_ascii_case(UNASSIGNED) => named
                .entry(name.to_lowercase())
                .or_insert_with(|| (name.to_string(), Vec::new()))
                .1
                .push(item),
            _ => unassigned.push(item),
        }
    }

    let mut groups: Vec<(String, Vec<&T>)> = named.into_values().collect();
    if !unassigned.is_empty() {
        groups.push((UNASSIGNED.to_string(), unassigned));
    }
    groups
}
