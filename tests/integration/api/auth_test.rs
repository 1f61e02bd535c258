//! Admin token integration tests
//!
//! Tests for the `x-admin-token` guard on `GET /data`.

#[cfg(feature = "ssr")]
mod tests {
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use entrybox::backend::middleware::TokenVerifier;
    use entrybox::backend::server::AppState;
    use entrybox::backend::store::MemoryEntryStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::common::{admin_header, memory_server, server_with_state, server_with_store, FailingStore, TEST_TOKEN};

    fn unauthorized_body() -> serde_json::Value {
        json!({"error": "Unauthorized access"})
    }

    #[tokio::test]
    async fn test_missing_token() {
        let (server, _store) = memory_server();
        server.post("/submit").json(&json!({"message": "secret"})).await;

        let response = server.get("/data").await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<serde_json::Value>(), unauthorized_body());
    }

    #[tokio::test]
    async fn test_wrong_token() {
        let (server, _store) = memory_server();
        server.post("/submit").json(&json!({"message": "secret"})).await;

        let (name, value) = admin_header("wrong");
        let response = server.get("/data").add_header(name, value).await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<serde_json::Value>(), unauthorized_body());
    }

    #[tokio::test]
    async fn test_token_in_other_header_is_ignored() {
        let (server, _store) = memory_server();

        let response = server
            .get("/data")
            .add_header(
                HeaderName::from_static("authorization"),
                HeaderValue::from_static("Bearer test-admin-token"),
            )
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_correct_token() {
        let (server, _store) = memory_server();

        let (name, value) = admin_header(TEST_TOKEN);
        let response = server.get("/data").add_header(name, value).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<serde_json::Value>(), json!([]));
    }

    #[tokio::test]
    async fn test_guard_runs_before_the_store() {
        let server = server_with_store(FailingStore);

        let (name, value) = admin_header("wrong");
        let response = server.get("/data").add_header(name, value).await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_submit_needs_no_token() {
        let (server, _store) = memory_server();

        let response = server.post("/submit").json(&json!({"message": "hi"})).await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    struct AnyOf(Vec<&'static str>);

    impl TokenVerifier for AnyOf {
        fn verify(&self, presented: &str) -> bool {
            self.0.contains(&presented)
        }
    }

    #[tokio::test]
    async fn test_custom_verifier() {
        let server = server_with_state(AppState::with_parts(
            MemoryEntryStore::new(),
            AnyOf(vec!["alpha", "beta"]),
        ));

        for (token, expected) in [
            ("alpha", StatusCode::OK),
            ("beta", StatusCode::OK),
            ("gamma", StatusCode::UNAUTHORIZED),
        ] {
            let (name, value) = admin_header(token);
            let response = server.get("/data").add_header(name, value).await;
            assert_eq!(response.status_code(), expected, "token {}", token);
        }
    }
}
