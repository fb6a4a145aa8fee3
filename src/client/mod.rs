pub mod dashboard;
pub mod form;
pub mod gateway;
pub mod notice;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::models::Submission;

pub use dashboard::{Dashboard, PendingDelete, Tab};
pub use form::{FormError, FormMode, FormPhase, PendingSubmit, SubmissionForm, SubmitOutcome};
pub use gateway::Gateway;
pub use notice::{Notice, NoticeLevel};

/// Failure talking to the relay. Callers treat every variant the same way;
/// the variants exist for logging.
#[derive(Debug)]
pub enum GatewayError {
    Transport(reqwest::Error),
    Status { status: StatusCode, body: String },
    Decode(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Transport(err) => write!(f, "Request failed: {err}"),
            GatewayError::Status { status, body } => write!(f, "Relay responded with {status}: {body}"),
            GatewayError::Decode(msg) => write!(f, "Invalid relay response: {msg}"),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err)
        }
    }
}

/// Typed CRUD surface the form and dashboard talk to.
#[async_trait]
pub trait SubmissionApi: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Submission>, GatewayError>;
    async fn create(&self, record: &Submission) -> Result<Submission, GatewayError>;
    async fn update(&self, id: &str, record: &Submission) -> Result<Submission, GatewayError>;
    async fn delete(&self, id: &str) -> Result<(), GatewayError>;
}
