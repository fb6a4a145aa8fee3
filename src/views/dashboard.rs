use askama::Template;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use super::{render, NoticeView};
use crate::client::{Dashboard, Notice};
use crate::models::Field;
use crate::state::SharedState;

struct CardRow {
    label: &'static str,
    value: String,
}

struct Card {
    id: String,
    rows: Vec<CardRow>,
}

#[derive(Template)]
#[template(path = "dashboard/index.html")]
struct DashboardTemplate {
    cards: Vec<Card>,
    notice: NoticeView,
}

#[derive(Template)]
#[template(path = "dashboard/confirm_delete.html")]
struct ConfirmDeleteTemplate {
    id: String,
    full_name: String,
}

#[derive(Deserialize)]
pub struct DashboardParams {
    pub notice: Option<String>,
}

pub(super) fn render_list(dashboard: &Dashboard, notice: Option<&Notice>) -> Html<String> {
    let cards = dashboard
        .submissions()
        .iter()
        .map(|sub| Card {
            id: sub.id.clone().unwrap_or_default(),
            rows: Field::ALL
                .iter()
                .map(|field| CardRow {
                    label: field.label(),
                    value: sub.display(*field).to_string(),
                })
                .collect(),
        })
        .collect();

    render(&DashboardTemplate {
        cards,
        notice: notice.into(),
    })
}

pub async fn index(
    State(state): State<SharedState>,
    Query(params): Query<DashboardParams>,
) -> impl IntoResponse {
    let mut dashboard = Dashboard::new();
    let notice = match dashboard.refresh(&state.gateway).await {
        Some(failure) => Some(failure),
        None => params.notice.as_deref().and_then(Notice::from_code),
    };
    render_list(&dashboard, notice.as_ref())
}

pub async fn confirm_delete(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut dashboard = Dashboard::new();
    if let Some(notice) = dashboard.refresh(&state.gateway).await {
        return (StatusCode::BAD_GATEWAY, render_list(&dashboard, Some(&notice))).into_response();
    }

    let Some(record) = dashboard
        .submissions()
        .iter()
        .find(|s| s.id.as_deref() == Some(id.as_str()))
    else {
        return not_found(&dashboard);
    };

    render(&ConfirmDeleteTemplate {
        id: id.clone(),
        full_name: record.full_name.clone(),
    })
    .into_response()
}

/// Unknown id: back to the list with an error notice.
pub(super) fn not_found(dashboard: &Dashboard) -> Response {
    let notice = Notice::not_found();
    (StatusCode::NOT_FOUND, render_list(dashboard, Some(&notice))).into_response()
}

pub async fn delete(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut dashboard = Dashboard::new();
    if let Some(notice) = dashboard.refresh(&state.gateway).await {
        return (StatusCode::BAD_GATEWAY, render_list(&dashboard, Some(&notice))).into_response();
    }

    let Some(pending) = dashboard.request_delete(&id) else {
        let notice = Notice::delete_failed();
        return (StatusCode::NOT_FOUND, render_list(&dashboard, Some(&notice))).into_response();
    };

    let notice = dashboard.delete(&state.gateway, pending).await;
    let status = if notice.is_error() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    (status, render_list(&dashboard, Some(&notice))).into_response()
}
