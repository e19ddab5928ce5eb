use mockito::{Matcher, Server};
use reqwest::Method;
use serde_json::{Value, json};
use sporlauth::config::DEFAULT_ACCOUNT_URL;
use sporlauth::error::Error;
use sporlauth::spotify::request::{Request, Transport};
use sporlauth::spotify::session::Session;
use sporlauth::types::TokenOutcome;

#[test]
fn test_account_url_is_normalised() {
    assert_eq!(
        Request::new("https://accounts.example.test/").account_url(),
        "https://accounts.example.test"
    );
    assert_eq!(Request::default().account_url(), DEFAULT_ACCOUNT_URL);
}

#[tokio::test]
async fn test_post_sends_form_and_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_header("authorization", "Basic aWQ6c2VjcmV0")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
            Matcher::UrlEncoded("refresh_token".into(), "R0".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"A2","expires_in":1800}"#)
        .create_async()
        .await;

    let request = Request::new(server.url());
    let response = request
        .account(
            Method::POST,
            "/api/token",
            &[("grant_type", "refresh_token"), ("refresh_token", "R0")],
            &[("Authorization", "Basic aWQ6c2VjcmV0")],
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({"access_token": "A2", "expires_in": 1800}));
}

#[tokio::test]
async fn test_get_sends_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/lookup")
        .match_query(Matcher::UrlEncoded("q".into(), "a b".into()))
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let request = Request::new(server.url());
    let response = request
        .account(Method::GET, "/lookup", &[("q", "a b")], &[])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.body["ok"], Value::Bool(true));
}

#[tokio::test]
async fn test_empty_body_is_null() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/token")
        .with_status(503)
        .create_async()
        .await;

    let response = Request::new(server.url())
        .account(Method::POST, "/api/token", &[], &[])
        .await
        .unwrap();

    assert_eq!(response.status, 503);
    assert_eq!(response.body, Value::Null);
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/token")
        .with_status(500)
        .with_body("<html>Internal Server Error</html>")
        .create_async()
        .await;

    let result = Request::new(server.url())
        .account(Method::POST, "/api/token", &[], &[])
        .await;

    match result {
        Err(Error::Decode { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_rejection() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let mut session = Session::new(
        "id",
        "secret",
        "http://127.0.0.1:8888/callback",
        Request::new(server.url()),
    );

    let outcome = session.request_token("code123").await.unwrap();

    match outcome {
        TokenOutcome::Rejected(rejection) => {
            assert_eq!(rejection.status, 200);
            assert_eq!(rejection.body, Value::String("not json".to_string()));
        }
        TokenOutcome::Granted(_) => panic!("expected a rejection"),
    }
    assert_eq!(session.access_token(), "");
    assert_eq!(session.stored_refresh_token(), "");
    assert_eq!(session.expires(), 0);
}

#[tokio::test]
async fn test_unreachable_host_is_http_error() {
    let result = Request::new("http://127.0.0.1:1")
        .account(Method::POST, "/api/token", &[], &[])
        .await;

    assert!(matches!(result, Err(Error::Http(_))));
}

#[tokio::test]
async fn test_session_exchanges_code_over_http() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("client_id".into(), "id".into()),
            Matcher::UrlEncoded("client_secret".into(), "secret".into()),
            Matcher::UrlEncoded("code".into(), "code123".into()),
            Matcher::UrlEncoded("grant_type".into(), "authorization_code".into()),
            Matcher::UrlEncoded("redirect_uri".into(), "http://127.0.0.1:8888/callback".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "access_token": "A",
                "token_type": "Bearer",
                "scope": "user-follow-read",
                "expires_in": 3600,
                "refresh_token": "R"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut session = Session::new(
        "id",
        "secret",
        "http://127.0.0.1:8888/callback",
        Request::new(server.url()),
    );

    let outcome = session.request_token("code123").await.unwrap();

    mock.assert_async().await;
    assert!(outcome.is_granted());
    assert_eq!(session.access_token(), "A");
    assert_eq!(session.stored_refresh_token(), "R");
    assert_eq!(session.expires(), 3600);
    assert!(
        session
            .authorize_url(&Default::default())
            .starts_with(&format!("{}/authorize/?", server.url()))
    );
}

#[tokio::test]
async fn test_session_rejection_over_http() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/token")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"invalid_client","error_description":"Invalid client secret"}"#)
        .create_async()
        .await;

    let mut session = Session::resume(
        "id",
        "wrong",
        "http://127.0.0.1:8888/callback",
        "R0",
        Request::new(server.url()),
    );

    let outcome = session.refresh_token().await.unwrap();

    assert!(!outcome.is_granted());
    assert_eq!(session.access_token(), "");
    assert_eq!(session.stored_refresh_token(), "R0");
}
