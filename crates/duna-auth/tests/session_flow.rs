//! Session login/refresh/logout against a mock backend.

use std::sync::Arc;

use duna_auth::storage::{ACCESS_TOKEN, REFRESH_TOKEN, USER};
use duna_auth::{AuthEndpoint, AuthError, FileStore, KeyValueStore, MemoryStore, SessionStore};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session(server: &MockServer, storage: Arc<dyn KeyValueStore>) -> SessionStore {
    let endpoint = AuthEndpoint::new(reqwest::Client::new(), &format!("{}/api/v1/", server.uri()));
    SessionStore::open(storage, endpoint)
}

fn seeded(values: &[(&str, &str)]) -> Arc<dyn KeyValueStore> {
    let storage = MemoryStore::new();
    for (key, value) in values {
        storage.set(key, value).unwrap();
    }
    Arc::new(storage)
}

#[tokio::test]
async fn login_persists_credentials_and_identity() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token/"))
        .and(body_json(json!({"username": "ana", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "access-1",
            "refresh": "refresh-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tmp = tempfile::TempDir::new().unwrap();
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(tmp.path()));
    let session = session(&server, storage);
    assert!(!session.is_authenticated());

    let identity = session.login("ana", "pw").await.unwrap();
    assert_eq!(identity.username, "ana");
    assert!(session.is_authenticated());
    assert_eq!(session.access_token().as_deref(), Some("access-1"));
    assert_eq!(session.refresh_token().as_deref(), Some("refresh-1"));

    // Persisted across a fresh open of the same state directory.
    let reopened = FileStore::open(tmp.path());
    assert_eq!(reopened.get(ACCESS_TOKEN).as_deref(), Some("access-1"));
    assert_eq!(reopened.get(USER).as_deref(), Some(r#"{"username":"ana"}"#));
}

#[tokio::test]
async fn failed_login_surfaces_detail_and_keeps_prior_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "No active account found with the given credentials"
        })))
        .mount(&server)
        .await;

    let session = session(
        &server,
        seeded(&[(ACCESS_TOKEN, "old-access"), (REFRESH_TOKEN, "old-refresh")]),
    );
    let err = session.login("ana", "wrong").await.unwrap_err();
    match err {
        AuthError::Rejected { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "No active account found with the given credentials");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert_eq!(session.access_token().as_deref(), Some("old-access"));
    assert_eq!(session.refresh_token().as_deref(), Some("old-refresh"));
}

#[tokio::test]
async fn login_that_cannot_persist_leaves_no_partial_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "a1",
            "refresh": "r1"
        })))
        .mount(&server)
        .await;

    let tmp = tempfile::TempDir::new().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&blocker.join("state")));
    let session = session(&server, storage);

    let err = session.login("ana", "pw").await.unwrap_err();
    assert!(matches!(err, AuthError::Storage(_)));
    assert!(!session.is_authenticated());
    assert!(session.refresh_token().is_none());
    assert!(session.user().is_none());
}

#[tokio::test]
async fn failed_login_without_detail_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let session = session(&server, seeded(&[]));
    let err = session.login("ana", "pw").await.unwrap_err();
    assert_eq!(err.to_string(), "Login failed");
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn register_does_not_log_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register/"))
        .and(body_json(json!({
            "username": "ana",
            "email": "ana@example.com",
            "password": "pw-123456",
            "password2": "pw-123456"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 4,
            "username": "ana",
            "email": "ana@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = session(&server, seeded(&[]));
    let user = session
        .register("ana", "ana@example.com", "pw-123456", "pw-123456")
        .await
        .unwrap();
    assert_eq!(user.username, "ana");
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn register_surfaces_field_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "username": ["A user with that username already exists."]
        })))
        .mount(&server)
        .await;

    let session = session(&server, seeded(&[]));
    let err = session
        .register("ana", "ana@example.com", "pw-123456", "pw-123456")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "username: A user with that username already exists."
    );
}

#[tokio::test]
async fn refresh_stores_new_access_credential() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token/refresh/"))
        .and(body_json(json!({"refresh": "refresh-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "access-2"})))
        .expect(1)
        .mount(&server)
        .await;

    let session = session(
        &server,
        seeded(&[(ACCESS_TOKEN, "access-1"), (REFRESH_TOKEN, "refresh-1")]),
    );
    let token = session.refresh_access(Some("access-1")).await.unwrap();
    assert_eq!(token, "access-2");
    assert_eq!(session.access_token().as_deref(), Some("access-2"));
    assert_eq!(session.refresh_token().as_deref(), Some("refresh-1"));
}

#[tokio::test]
async fn refresh_failure_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token/refresh/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Token is invalid or expired"
        })))
        .mount(&server)
        .await;

    let session = session(
        &server,
        seeded(&[
            (ACCESS_TOKEN, "access-1"),
            (REFRESH_TOKEN, "refresh-1"),
            (USER, r#"{"username":"ana"}"#),
        ]),
    );
    let err = session.refresh_access(Some("access-1")).await.unwrap_err();
    assert!(matches!(err, AuthError::ReauthRequired(_)));
    assert!(!session.is_authenticated());
    assert!(session.refresh_token().is_none());
    assert!(session.user().is_none());
}

#[tokio::test]
async fn concurrent_refreshes_share_one_exchange() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token/refresh/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access": "access-2"}))
                .set_delay(std::time::Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = session(
        &server,
        seeded(&[(ACCESS_TOKEN, "access-1"), (REFRESH_TOKEN, "refresh-1")]),
    );
    let handles: Vec<_> = (0..5)
        .map(|_| {
            let session = session.clone();
            tokio::spawn(async move { session.refresh_access(Some("access-1")).await })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "access-2");
    }
    server.verify().await;
}
