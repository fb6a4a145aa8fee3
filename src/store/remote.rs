use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use super::{StoreError, SubmissionStore};

/// Hosted record store reached over HTTP at `<base_url>/submissions`.
pub struct RemoteStore {
    client: Client,
    base_url: String,
}

impl RemoteStore {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, StoreError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(StoreError::Transport)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/submissions", self.base_url)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/submissions/{id}", self.base_url)
    }
}

/// Turn a non-2xx response into `StoreError::Status`, keeping a short body excerpt.
async fn check_status(resp: Response) -> Result<Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp
        .text()
        .await
        .unwrap_or_default()
        .chars()
        .take(1024)
        .collect::<String>();
    Err(StoreError::Status { status, body })
}

#[async_trait]
impl SubmissionStore for RemoteStore {
    fn name(&self) -> &str {
        "remote"
    }

    async fn list(&self) -> Result<Value, StoreError> {
        let resp = self.client.get(self.collection_url()).send().await?;
        let records = check_status(resp).await?.json().await?;
        Ok(records)
    }

    async fn create(&self, record: &Value) -> Result<Value, StoreError> {
        let resp = self
            .client
            .post(self.collection_url())
            .json(record)
            .send()
            .await?;
        let created = check_status(resp).await?.json().await?;
        Ok(created)
    }

    async fn update(&self, id: &str, record: &Value) -> Result<Value, StoreError> {
        let resp = self
            .client
            .put(self.record_url(id))
            .json(record)
            .send()
            .await?;
        let updated = check_status(resp).await?.json().await?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let resp = self.client.delete(self.record_url(id)).send().await?;
        check_status(resp).await?;
        Ok(())
    }
}
