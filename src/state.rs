use std::sync::Arc;

use crate::client::Gateway;
use crate::config::Config;
use crate::store::SubmissionStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn SubmissionStore>,
    /// Used by the HTML views to reach the relay's own API.
    pub gateway: Gateway,
}
