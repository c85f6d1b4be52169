use std::fmt::Write;
use std::sync::{Arc, Mutex};

use crate::models::Department;
use crate::services::departments;
use crate::state::AppState;

pub struct DepartmentsScreen {
    state: Arc<AppState>,
    departments: Mutex<Vec<Department>>,
}

impl DepartmentsScreen {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            departments: Mutex::new(Vec::new()),
        }
    }

    pub async fn refresh(&self) -> bool {
        match departments::list(self.state.backend.as_ref()).await {
            Ok(list) => {
                *self.departments.lock().unwrap() = list;
                true
            }
            Err(e) => {
                self.state.notices.error(&e);
                false
            }
        }
    }

    pub async fn add(&self, name: &str) -> bool {
        match departments::create(self.state.backend.as_ref(), name).await {
            Ok(department) => {
                self.state
                    .notices
                    .info(format!("Created department {}", department.name));
                self.refresh().await
            }
            Err(e) => {
                self.state.notices.error(&e);
                false
            }
        }
    }

    pub fn render(&self) -> String {
        let mut list = self.departments.lock().unwrap().clone();
        if list.is_empty() {
            return "No departments.\n".to_string();
        }
        list.sort_by_key(|d| d.name.to_lowercase());

        let mut out = String::new();
        for d in list {
            let _ = writeln!(out, "  {}  [{}]", d.name, d.id);
        }
        out
    }
}
