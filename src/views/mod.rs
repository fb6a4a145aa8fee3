pub mod dashboard;
pub mod form;

use askama::Template;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::client::Notice;
use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        // Public form
        .route("/", get(form::index).post(form::create))
        // Dashboard
        .route("/dashboard", get(dashboard::index))
        .route(
            "/dashboard/new",
            get(form::new_page).post(form::create_from_dashboard),
        )
        .route(
            "/dashboard/edit/{id}",
            get(form::edit_page).post(form::update),
        )
        .route(
            "/dashboard/delete/{id}",
            get(dashboard::confirm_delete).post(dashboard::delete),
        )
}

/// Flattened notice for templates; empty strings mean no notice.
struct NoticeView {
    level: String,
    message: String,
}

impl From<Option<&Notice>> for NoticeView {
    fn from(notice: Option<&Notice>) -> Self {
        match notice {
            Some(n) => NoticeView {
                level: n.level.as_str().to_string(),
                message: n.message.clone(),
            },
            None => NoticeView {
                level: String::new(),
                message: String::new(),
            },
        }
    }
}

fn render<T: Template>(template: &T) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render failed: {e}");
        String::new()
    }))
}
