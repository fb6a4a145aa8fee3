use crate::models::{Field, Submission};
use crate::submission::fields::{self, FieldErrors};

use super::{GatewayError, Notice, SubmissionApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
}

/// Whether submitting creates a new record or replaces an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(String),
}

/// The store call a validated submit resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingSubmit {
    Create(Submission),
    Update { id: String, record: Submission },
}

impl PendingSubmit {
    pub async fn send(&self, api: &dyn SubmissionApi) -> Result<Submission, GatewayError> {
        match self {
            PendingSubmit::Create(record) => api.create(record).await,
            PendingSubmit::Update { id, record } => api.update(id, record).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Submission),
    Updated(Submission),
}

impl SubmitOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            SubmitOutcome::Created(_) => Notice::created(),
            SubmitOutcome::Updated(_) => Notice::updated(),
        }
    }

    pub fn record(&self) -> &Submission {
        match self {
            SubmitOutcome::Created(record) | SubmitOutcome::Updated(record) => record,
        }
    }
}

#[derive(Debug)]
pub enum FormError {
    /// Required fields are blank; nothing was sent.
    Invalid(FieldErrors),
    /// A submit is already in flight.
    InProgress,
    Failed(GatewayError),
}

impl FormError {
    pub fn notice(&self) -> Notice {
        match self {
            FormError::Invalid(_) => Notice::required_fields(),
            FormError::InProgress => Notice::error("A save is already in progress"),
            FormError::Failed(_) => Notice::save_failed(),
        }
    }
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::Invalid(errors) => write!(f, "{} required field(s) missing", errors.len()),
            FormError::InProgress => write!(f, "Submit already in progress"),
            FormError::Failed(err) => write!(f, "Save failed: {err}"),
        }
    }
}

/// Create/edit form for a single submission.
///
/// A record with an `id` puts the form in update mode. Input survives
/// failed saves; a successful create clears it.
#[derive(Debug, Clone)]
pub struct SubmissionForm {
    initial: Option<Submission>,
    draft: Submission,
    errors: FieldErrors,
    phase: FormPhase,
}

impl Default for SubmissionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self {
            initial: None,
            draft: Submission::default(),
            errors: FieldErrors::new(),
            phase: FormPhase::Editing,
        }
    }

    /// Form pre-populated from `record`.
    pub fn edit(record: &Submission) -> Self {
        Self {
            initial: Some(record.clone()),
            draft: record.clone(),
            errors: FieldErrors::new(),
            phase: FormPhase::Editing,
        }
    }

    pub fn mode(&self) -> FormMode {
        match self.initial.as_ref().and_then(|r| r.id.as_ref()) {
            Some(id) => FormMode::Update(id.clone()),
            None => FormMode::Create,
        }
    }

    pub fn draft(&self) -> &Submission {
        &self.draft
    }

    pub fn value(&self, field: Field) -> &str {
        self.draft.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.phase, self.mode()) {
            (FormPhase::Submitting, _) => "Saving...",
            (_, FormMode::Update(_)) => "Update Submission",
            (_, FormMode::Create) => "Create Submission",
        }
    }

    /// Change one input. Clears any error shown for that field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.remove(&field);
    }

    /// Validate and enter the submitting phase.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit, FormError> {
        if self.is_submitting() {
            return Err(FormError::InProgress);
        }

        let errors = fields::validate_required(&self.draft);
        self.errors = errors.clone();
        if !errors.is_empty() {
            return Err(FormError::Invalid(errors));
        }

        self.phase = FormPhase::Submitting;
        Ok(match self.mode() {
            FormMode::Update(id) => PendingSubmit::Update {
                id,
                record: self.draft.clone(),
            },
            FormMode::Create => PendingSubmit::Create(self.draft.clone()),
        })
    }

    /// Apply the result of the call started by `begin_submit`.
    pub fn finish(
        &mut self,
        pending: PendingSubmit,
        result: Result<Submission, GatewayError>,
    ) -> Result<SubmitOutcome, FormError> {
        self.phase = FormPhase::Editing;

        let record = result.map_err(FormError::Failed)?;
        match pending {
            PendingSubmit::Create(_) => {
                self.draft = Submission::default();
                self.errors.clear();
                Ok(SubmitOutcome::Created(record))
            }
            PendingSubmit::Update { .. } => Ok(SubmitOutcome::Updated(record)),
        }
    }

    pub async fn submit(&mut self, api: &dyn SubmissionApi) -> Result<SubmitOutcome, FormError> {
        let pending = self.begin_submit()?;
        let result = pending.send(api).await;
        if let Err(e) = &result {
            tracing::error!("Form error: {e}");
        }
        self.finish(pending, result)
    }
}
