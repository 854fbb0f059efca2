//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{AppState, endpoints, transaction::get_transactions_csv};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_transactions_csv))
        .fallback(get_404_not_found)
        .with_state(state)
}

async fn get_404_not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}

#[cfg(test)]
mod routing_tests {
    use axum_test::TestServer;

    use crate::{AppState, endpoints, transaction::TransactionCount};

    use super::build_router;

    fn get_test_server() -> TestServer {
        let state = AppState::new(TransactionCount::default(), Some(1), "Etc/UTC")
            .expect("Could not create app state.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn root_serves_csv() {
        let server = get_test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_ok();
        assert!(response.text().starts_with("departmentID,transID,"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        server.get("/api/coffee").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn post_to_root_is_not_allowed() {
        let server = get_test_server();

        server
            .post(endpoints::ROOT)
            .await
            .assert_status(axum::http::StatusCode::METHOD_NOT_ALLOWED);
    }
}
