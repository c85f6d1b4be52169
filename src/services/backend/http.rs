use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::SchedulingBackend;
use crate::config::ClientConfig;
use crate::errors::{ClientError, ClientResult};
use crate::models::{
    AvailabilityStatus, Department, Invitation, Job, JobUpdate, Message, NewDepartment,
    StatusUpdate,
};

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Network(format!("failed to build HTTP client: {e}")))?;

        // Fail early on a base URL that can't carry path segments.
        let backend = Self {
            base_url: config.api_url.clone(),
            client,
        };
        backend.url(&[])?;
        Ok(backend)
    }

    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::Network(format!("invalid api url {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Network(format!("api url cannot carry a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        let url = self.url(segments)?;
        tracing::debug!(%url, "GET");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("GET {}: {e}", url.path())))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(url.path().to_string()));
        }
        if !status.is_success() {
            let detail = error_detail(resp).await;
            return Err(ClientError::Network(format!(
                "GET {} returned {status}: {detail}",
                url.path()
            )));
        }

        resp.json()
            .await
            .map_err(|e| ClientError::Network(format!("failed to decode {}: {e}", url.path())))
    }

    async fn send_json<B, T>(&self, method: Method, segments: &[&str], body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let resp = self.mutate(method, segments, body).await?;
        resp.json()
            .await
            .map_err(|e| ClientError::Network(format!("failed to decode mutation response: {e}")))
    }

    async fn mutate<B>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> ClientResult<reqwest::Response>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.url(segments)?;
        tracing::debug!(%method, %url, "mutation");

        let resp = self
            .client
            .request(method.clone(), url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("{method} {}: {e}", url.path())))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = error_detail(resp).await;
            return Err(ClientError::Update(format!(
                "{method} {} returned {status}: {detail}",
                url.path()
            )));
        }
        Ok(resp)
    }
}

/// Pulls `{"error": "..."}` out of a failed response, falling back to the raw body.
async fn error_detail(resp: reqwest::Response) -> String {
    let text = resp.text().await.unwrap_or_default();
    serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or(text)
}

#[async_trait]
impl SchedulingBackend for HttpBackend {
    async fn fetch_roster(&self, job_id: &str) -> ClientResult<Job> {
        self.get_json(&["api", "jobs", job_id, "roster"]).await
    }

    async fn update_availability(
        &self,
        job_id: &str,
        availability_id: &str,
        status: AvailabilityStatus,
    ) -> ClientResult<()> {
        self.mutate(
            Method::PATCH,
            &["api", "jobs", job_id, "availability", availability_id],
            &StatusUpdate { status },
        )
        .await?;
        Ok(())
    }

    async fn update_job(&self, job_id: &str, update: &JobUpdate) -> ClientResult<()> {
        self.mutate(Method::PATCH, &["api", "jobs", job_id], update)
            .await?;
        Ok(())
    }

    async fn list_departments(&self) -> ClientResult<Vec<Department>> {
        self.get_json(&["api", "departments"]).await
    }

    async fn create_department(&self, name: &str) -> ClientResult<Department> {
        let body = NewDepartment {
            name: name.to_string(),
        };
        self.send_json(Method::POST, &["api", "departments"], &body)
            .await
    }

    async fn message_history(&self) -> ClientResult<Vec<Message>> {
        self.get_json(&["api", "messages", "history"]).await
    }

    async fn contact_invitations(&self) -> ClientResult<Vec<Invitation>> {
        self.get_json(&["api", "contact", "invitations"]).await
    }

    async fn respond_to_invitation(
        &self,
        availability_id: &str,
        status: AvailabilityStatus,
    ) -> ClientResult<()> {
        self.mutate(
            Method::PATCH,
            &["api", "contact", "availability", availability_id],
            &StatusUpdate { status },
        )
        .await?;
        Ok(())
    }
}
