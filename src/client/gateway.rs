use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use reqwest::{Client, Response};
use serde_json::Value;

use super::{GatewayError, SubmissionApi};
use crate::models::Submission;

/// HTTP client for the relay's `/api/submissions` surface.
///
/// No retries. Failures are logged here and handed back as-is.
#[derive(Clone)]
pub struct Gateway {
    client: Client,
    base_url: String,
}

impl Gateway {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: format!("{}/api", base_url.trim_end_matches('/')),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/submissions", self.base_url)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/submissions/{id}", self.base_url)
    }
}

async fn check_status(resp: Response) -> Result<Response, GatewayError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(GatewayError::Status { status, body })
}

/// Current time in the same shape as a browser's `toISOString()`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Gateway {
    async fn fetch_all(&self) -> Result<Vec<Submission>, GatewayError> {
        let resp = self.client.get(self.collection_url()).send().await?;
        Ok(check_status(resp).await?.json().await?)
    }

    async fn post(&self, record: &Submission) -> Result<Submission, GatewayError> {
        let mut body = record.clone();
        body.created_at = Some(Value::String(timestamp_now()));

        let resp = self.client.post(self.collection_url()).json(&body).send().await?;
        Ok(check_status(resp).await?.json().await?)
    }

    async fn put(&self, id: &str, record: &Submission) -> Result<Submission, GatewayError> {
        let resp = self.client.put(self.record_url(id)).json(record).send().await?;
        Ok(check_status(resp).await?.json().await?)
    }

    async fn remove(&self, id: &str) -> Result<(), GatewayError> {
        let resp = self.client.delete(self.record_url(id)).send().await?;
        check_status(resp).await?;
        Ok(())
    }
}

#[async_trait]
impl SubmissionApi for Gateway {
    async fn list_all(&self) -> Result<Vec<Submission>, GatewayError> {
        self.fetch_all().await.inspect_err(|e| {
            tracing::error!("Error fetching submissions: {e}");
        })
    }

    async fn create(&self, record: &Submission) -> Result<Submission, GatewayError> {
        self.post(record).await.inspect_err(|e| {
            tracing::error!("Error creating submission: {e}");
        })
    }

    async fn update(&self, id: &str, record: &Submission) -> Result<Submission, GatewayError> {
        self.put(id, record).await.inspect_err(|e| {
            tracing::error!(id, "Error updating submission: {e}");
        })
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        self.remove(id).await.inspect_err(|e| {
            tracing::error!(id, "Error deleting submission: {e}");
        })
    }
}
