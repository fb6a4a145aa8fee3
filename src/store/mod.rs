pub mod memory;
pub mod remote;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

pub use memory::MemoryStore;
pub use remote::RemoteStore;

/// The four relayed operations, used to pick the failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch submissions",
            Operation::Create => "Failed to create submission",
            Operation::Update => "Failed to update submission",
            Operation::Delete => "Failed to delete submission",
        }
    }
}

#[derive(Debug)]
pub enum StoreError {
    Transport(reqwest::Error),
    Status { status: StatusCode, body: String },
    NotFound(String),
    Decode(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Transport(err) => write!(f, "Store request failed: {err}"),
            StoreError::Status { status, body } => {
                write!(f, "Store responded with {status}: {body}")
            }
            StoreError::NotFound(id) => write!(f, "Submission {id} not found"),
            StoreError::Decode(msg) => write!(f, "Invalid store response: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Transport(err)
        }
    }
}

/// Backing record store behind the relay.
///
/// Records are opaque JSON here: they go out and come back exactly as the
/// store holds them. The store assigns `id`.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    fn name(&self) -> &str;
    async fn list(&self) -> Result<Value, StoreError>;
    async fn create(&self, record: &Value) -> Result<Value, StoreError>;
    async fn update(&self, id: &str, record: &Value) -> Result<Value, StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
