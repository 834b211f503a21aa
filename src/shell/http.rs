use axum::{
    Router,
    response::Redirect,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::modules::veterinarians::use_cases::list_veterinarians::inbound::http as list_http;
use crate::modules::veterinarians::use_cases::register_veterinarian::inbound::http as register_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(|| async { Redirect::to(register_http::HOME_LOCATION) }),
        )
        .route("/home", get(list_http::handle))
        .route(
            "/form",
            get(register_http::show_form).post(register_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
