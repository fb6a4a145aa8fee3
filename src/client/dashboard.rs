use crate::models::Submission;

use super::{Notice, SubmissionApi, SubmissionForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    List,
    Edit,
}

/// A delete the user has confirmed. Only handed out for ids in the local list.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingDelete {
    id: String,
}

impl PendingDelete {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Dashboard state for one page view.
///
/// Holds the list as last fetched. Deletes prune it locally; saves from the
/// form trigger a full re-fetch.
#[derive(Debug, Clone)]
pub struct Dashboard {
    submissions: Vec<Submission>,
    loading: bool,
    tab: Tab,
    editing: Option<Submission>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            submissions: Vec::new(),
            loading: true,
            tab: Tab::List,
            editing: None,
        }
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn editing(&self) -> Option<&Submission> {
        self.editing.as_ref()
    }

    pub fn edit_heading(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Submission"
        } else {
            "Create New Submission"
        }
    }

    /// Replace the local list with the store's. On failure the old list stays.
    pub async fn refresh(&mut self, api: &dyn SubmissionApi) -> Option<Notice> {
        self.loading = true;
        let result = api.list_all().await;
        self.loading = false;

        match result {
            Ok(submissions) => {
                self.submissions = submissions;
                None
            }
            Err(e) => {
                tracing::error!("Fetch error: {e}");
                Some(Notice::fetch_failed())
            }
        }
    }

    /// First step of a delete. The caller confirms with the user before
    /// passing the token to [`Dashboard::delete`].
    pub fn request_delete(&self, id: &str) -> Option<PendingDelete> {
        self.submissions
            .iter()
            .any(|s| s.id.as_deref() == Some(id))
            .then(|| PendingDelete { id: id.to_string() })
    }

    pub async fn delete(&mut self, api: &dyn SubmissionApi, pending: PendingDelete) -> Notice {
        match api.delete(&pending.id).await {
            Ok(()) => {
                self.submissions
                    .retain(|s| s.id.as_deref() != Some(pending.id.as_str()));
                tracing::info!(id = %pending.id, "Submission deleted");
                Notice::deleted()
            }
            Err(e) => {
                tracing::error!("Delete error: {e}");
                Notice::delete_failed()
            }
        }
    }

    /// Select a record and open the form in update mode.
    pub fn edit(&mut self, id: &str) -> Option<SubmissionForm> {
        let record = self
            .submissions
            .iter()
            .find(|s| s.id.as_deref() == Some(id))?
            .clone();

        let form = SubmissionForm::edit(&record);
        self.editing = Some(record);
        self.tab = Tab::Edit;
        Some(form)
    }

    /// Open an empty form in create mode.
    pub fn create_new(&mut self) -> SubmissionForm {
        self.editing = None;
        self.tab = Tab::Edit;
        SubmissionForm::new()
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn show_list(&mut self) {
        self.tab = Tab::List;
    }

    /// Called after the form saved: back to the list and re-fetch everything.
    pub async fn form_succeeded(&mut self, api: &dyn SubmissionApi) -> Option<Notice> {
        self.editing = None;
        self.tab = Tab::List;
        self.refresh(api).await
    }
}
