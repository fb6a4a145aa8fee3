use std::collections::HashMap;

use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use super::dashboard::{not_found, render_list};
use super::{render, NoticeView};
use crate::client::{Dashboard, FormError, Notice, SubmissionForm};
use crate::models::Field;
use crate::state::SharedState;

struct FieldRow {
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: String,
    error: String,
    required: bool,
}

#[derive(Template)]
#[template(path = "form.html")]
struct FormTemplate {
    heading: String,
    action: String,
    submit_label: String,
    submitting: bool,
    show_cancel: bool,
    rows: Vec<FieldRow>,
    notice: NoticeView,
}

/// Where a form lives and where it posts back to.
struct FormPage {
    heading: &'static str,
    action: String,
    show_cancel: bool,
}

impl FormPage {
    fn public() -> Self {
        FormPage {
            heading: "Hire Top Talent",
            action: "/".to_string(),
            show_cancel: false,
        }
    }

    fn dashboard_create() -> Self {
        FormPage {
            heading: "Create New Submission",
            action: "/dashboard/new".to_string(),
            show_cancel: true,
        }
    }

    fn dashboard_edit(id: &str) -> Self {
        FormPage {
            heading: "Edit Submission",
            action: format!("/dashboard/edit/{id}"),
            show_cancel: true,
        }
    }

    fn show(&self, form: &SubmissionForm, notice: Option<&Notice>) -> Html<String> {
        let rows = Field::ALL
            .iter()
            .map(|field| FieldRow {
                name: field.name(),
                label: field.label(),
                input_type: field.input_type(),
                placeholder: field.placeholder(),
                value: form.value(*field).to_string(),
                error: form.error(*field).unwrap_or_default().to_string(),
                required: field.is_required(),
            })
            .collect();

        render(&FormTemplate {
            heading: self.heading.to_string(),
            action: self.action.clone(),
            submit_label: form.submit_label().to_string(),
            submitting: form.is_submitting(),
            show_cancel: self.show_cancel,
            rows,
            notice: notice.into(),
        })
    }
}

fn apply_input(form: &mut SubmissionForm, input: &HashMap<String, String>) {
    for field in Field::ALL {
        if let Some(value) = input.get(field.name()) {
            form.set_field(field, value.as_str());
        }
    }
}

/// Status for a page re-rendered after a failed submit.
fn failure_status(err: &FormError) -> StatusCode {
    match err {
        FormError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        FormError::InProgress => StatusCode::CONFLICT,
        FormError::Failed(_) => StatusCode::BAD_GATEWAY,
    }
}

pub async fn index() -> impl IntoResponse {
    FormPage::public().show(&SubmissionForm::new(), None)
}

pub async fn create(
    State(state): State<SharedState>,
    Form(input): Form<HashMap<String, String>>,
) -> Response {
    let page = FormPage::public();
    let mut form = SubmissionForm::new();
    apply_input(&mut form, &input);

    match form.submit(&state.gateway).await {
        Ok(outcome) => page.show(&form, Some(&outcome.notice())).into_response(),
        Err(e) => (failure_status(&e), page.show(&form, Some(&e.notice()))).into_response(),
    }
}

pub async fn new_page() -> impl IntoResponse {
    let mut dashboard = Dashboard::new();
    let form = dashboard.create_new();
    FormPage::dashboard_create().show(&form, None)
}

pub async fn create_from_dashboard(
    State(state): State<SharedState>,
    Form(input): Form<HashMap<String, String>>,
) -> Response {
    let mut dashboard = Dashboard::new();
    let mut form = dashboard.create_new();
    apply_input(&mut form, &input);

    match form.submit(&state.gateway).await {
        Ok(outcome) => redirect_with(&outcome.notice()),
        Err(e) => {
            let page = FormPage::dashboard_create();
            (failure_status(&e), page.show(&form, Some(&e.notice()))).into_response()
        }
    }
}

pub async fn edit_page(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut dashboard = Dashboard::new();
    if let Some(notice) = dashboard.refresh(&state.gateway).await {
        return (StatusCode::BAD_GATEWAY, render_list(&dashboard, Some(&notice))).into_response();
    }

    match dashboard.edit(&id) {
        Some(form) => FormPage::dashboard_edit(&id).show(&form, None).into_response(),
        None => not_found(&dashboard),
    }
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Form(input): Form<HashMap<String, String>>,
) -> Response {
    let mut dashboard = Dashboard::new();
    if let Some(notice) = dashboard.refresh(&state.gateway).await {
        return (StatusCode::BAD_GATEWAY, render_list(&dashboard, Some(&notice))).into_response();
    }

    let Some(mut form) = dashboard.edit(&id) else {
        return not_found(&dashboard);
    };
    apply_input(&mut form, &input);

    let page = FormPage::dashboard_edit(&id);
    match form.submit(&state.gateway).await {
        Ok(outcome) => redirect_with(&outcome.notice()),
        Err(e) => (failure_status(&e), page.show(&form, Some(&e.notice()))).into_response(),
    }
}

/// Back to the dashboard, which re-fetches the whole list.
fn redirect_with(notice: &Notice) -> Response {
    match notice.code() {
        Some(code) => Redirect::to(&format!("/dashboard?notice={code}")).into_response(),
        None => Redirect::to("/dashboard").into_response(),
    }
}
