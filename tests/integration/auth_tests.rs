use crate::common::{self, BASIC_AUTH, LOGIN, TOKEN};
use algosec_import::prelude::*;
use mockito::Server;

#[tokio::test]
async fn test_login_stores_session() {
    let mut server = Server::new_async().await;
    let mock = common::mock_login(&mut server, 1).await;
    let client = common::create_test_client(&server);

    let session = client.authenticate().await.unwrap();

    assert_eq!(session.jsessionid, TOKEN);
    assert!(client.auth().is_authenticated().await);
    assert_eq!(client.auth().get_session().await.unwrap(), session);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_without_token_fails() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", LOGIN)
        .match_header("authorization", BASIC_AUTH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"ok"}"#)
        .create_async()
        .await;
    let client = common::create_test_client(&server);

    let result = client.authenticate().await;

    assert!(matches!(result, Err(AppError::AuthenticationFailed(_))));
    assert!(!client.auth().is_authenticated().await);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_rejected_credentials() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", LOGIN)
        .with_status(401)
        .create_async()
        .await;
    let client = common::create_test_client(&server);

    let result = client.authenticate().await;

    assert!(matches!(result, Err(AppError::Unauthorized)));
    assert!(!client.auth().is_authenticated().await);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_server_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", LOGIN)
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;
    let client = common::create_test_client(&server);

    match client.authenticate().await {
        Err(AppError::Unexpected(status)) => assert_eq!(status.as_u16(), 503),
        other => panic!("Expected Unexpected(503), got {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_invalid_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", LOGIN)
        .with_status(200)
        .with_body("<html>login</html>")
        .create_async()
        .await;
    let client = common::create_test_client(&server);

    assert!(matches!(client.authenticate().await, Err(AppError::Json(_))));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_connection_refused() {
    // nothing listens on port 1
    let config = common::create_test_config("http://127.0.0.1:1", "unused.txt");
    let client = AlgosecClient::new(config).unwrap();

    assert!(matches!(client.authenticate().await, Err(AppError::Http(_))));
    assert!(!client.auth().is_authenticated().await);
}

#[tokio::test]
async fn test_logout_clears_session() {
    let mut server = Server::new_async().await;
    let _login = common::mock_login(&mut server, 1).await;
    let client = common::create_test_client(&server);

    client.authenticate().await.unwrap();
    client.logout().await;

    assert!(matches!(
        client.auth().get_session().await,
        Err(AppError::Unauthenticated)
    ));
}
