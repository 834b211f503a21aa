// HTML pages served by the inbound HTTP adapters.
//
// Templates live in `templates/` at the crate root and are compiled in by askama.
// Every interpolated value is HTML-escaped.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::modules::veterinarians::use_cases::register_veterinarian::command::RegisterVeterinarian;
use crate::shared::infrastructure::veterinarian_directory::RegisteredVeterinarian;

#[derive(Template)]
#[template(path = "veterinarian_form.html")]
pub struct FormPage<'a> {
    pub values: &'a RegisterVeterinarian,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage<'a> {
    pub veterinarians: &'a [RegisteredVeterinarian],
}

pub fn render_page<T: Template>(status: StatusCode, page: &T) -> Response {
    match page.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to render page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
