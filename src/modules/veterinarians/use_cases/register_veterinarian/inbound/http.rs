use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::modules::veterinarians::adapters::inbound::pages::{FormPage, render_page};
use crate::modules::veterinarians::use_cases::register_veterinarian::command::RegisterVeterinarian;
use crate::modules::veterinarians::use_cases::register_veterinarian::handler::ApplicationError;
use crate::shell::state::AppState;

pub const HOME_LOCATION: &str = "/home";

pub async fn show_form() -> Response {
    let values = RegisterVeterinarian::default();
    render_page(
        StatusCode::OK,
        &FormPage {
            values: &values,
            error: None,
        },
    )
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Form<RegisterVeterinarian>, FormRejection>,
) -> Response {
    let Form(command) = match body {
        Ok(form) => form,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable registration form");
            let values = RegisterVeterinarian::default();
            return render_page(
                StatusCode::UNPROCESSABLE_ENTITY,
                &FormPage {
                    values: &values,
                    error: None,
                },
            );
        }
    };

    match state.register_handler.handle(&command).await {
        Ok(_) => Redirect::to(HOME_LOCATION).into_response(),
        Err(ApplicationError::Domain(reason)) => render_page(
            StatusCode::UNPROCESSABLE_ENTITY,
            &FormPage {
                values: &command,
                error: Some(reason.user_message()),
            },
        ),
        Err(error) => {
            tracing::error!(%error, "failed to register veterinarian");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
