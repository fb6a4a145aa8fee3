use std::collections::BTreeMap;

use crate::models::{Field, Submission};

/// Invalid field -> human-readable message. Empty means valid.
pub type FieldErrors = BTreeMap<Field, String>;

/// Check that each of `required` is non-blank after trimming.
///
/// Only presence is checked; any non-empty text is accepted for email and
/// phone.
pub fn validate(record: &Submission, required: &[Field]) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in required {
        if record.get(*field).trim().is_empty() {
            errors.insert(*field, field.required_message());
        }
    }

    errors
}

/// Validate against the standard required set.
pub fn validate_required(record: &Submission) -> FieldErrors {
    validate(record, &Field::REQUIRED)
}
