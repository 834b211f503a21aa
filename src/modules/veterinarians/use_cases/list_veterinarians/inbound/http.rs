use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::veterinarians::adapters::inbound::pages::{HomePage, render_page};
use crate::shared::infrastructure::veterinarian_directory::VeterinarianDirectory;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.directory.list().await {
        Ok(veterinarians) => render_page(
            StatusCode::OK,
            &HomePage {
                veterinarians: &veterinarians,
            },
        ),
        Err(error) => {
            tracing::error!(%error, "failed to list veterinarians");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod list_veterinarians_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shared::infrastructure::veterinarian_directory::in_memory::InMemoryVeterinarianDirectory;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::commands::register_veterinarian::RegisterVeterinarianBuilder;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new().route("/home", get(handle)).with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_an_empty_listing() {
        let response = app(AppState::in_memory())
            .oneshot(Request::get("/home").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Nenhum veterinário cadastrado."));
    }

    #[tokio::test]
    async fn it_should_list_registered_veterinarians() {
        let state = AppState::in_memory();
        state
            .register_handler
            .handle(&RegisterVeterinarianBuilder::new().build())
            .await
            .unwrap();

        let response = app(state)
            .oneshot(Request::get("/home").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Dr. João Silva"));
        assert!(html.contains("5000.00"));
    }

    #[tokio::test]
    async fn it_should_return_500_when_directory_is_offline() {
        let mut directory = InMemoryVeterinarianDirectory::new();
        directory.toggle_offline();
        let response = app(AppState::with_directory(directory))
            .oneshot(Request::get("/home").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
