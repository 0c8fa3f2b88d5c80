use crate::{source::TodoSource, FetchError, Resource, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use todo_progress_core::{EmployeeId, Owner, Task};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// HTTP client for a JSONPlaceholder-style TODO API.
#[derive(Clone)]
pub struct TodoApiClient {
    client: Client,
    base_url: String,
}

impl TodoApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|e| FetchError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn tasks_url(&self, id: EmployeeId) -> String {
        format!("{}/users/{}/todos", self.base_url, id)
    }

    fn owner_url(&self, id: EmployeeId) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, resource: Resource) -> Result<T> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request { resource, source })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Failed to retrieve {} from {}: {}", resource, url, status);
            return Err(unavailable(resource, status));
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Request { resource, source })?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Could not decode {} from {}: {}", resource, url, e);
            FetchError::MalformedResponse {
                resource,
                reason: e.to_string(),
            }
        })
    }
}

impl Default for TodoApiClient {
    fn default() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

fn unavailable(resource: Resource, status: StatusCode) -> FetchError {
    let status = status.as_u16();
    match resource {
        Resource::Tasks => FetchError::TasksUnavailable { status },
        Resource::Owner => FetchError::OwnerUnavailable { status },
    }
}

#[async_trait]
impl TodoSource for TodoApiClient {
    async fn fetch_tasks(&self, id: EmployeeId) -> Result<Vec<Task>> {
        self.get_json(&self.tasks_url(id), Resource::Tasks).await
    }

    async fn fetch_owner(&self, id: EmployeeId) -> Result<Owner> {
        self.get_json(&self.owner_url(id), Resource::Owner).await
    }
}
