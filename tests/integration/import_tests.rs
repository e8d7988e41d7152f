use crate::common::{self, LOGIN, NEW_APPLICATION};
use algosec_import::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_run_import_end_to_end() {
    setup_logger();
    let mut server = Server::new_async().await;
    let login = common::mock_login(&mut server, 1).await;
    let alpha = server
        .mock("POST", NEW_APPLICATION)
        .match_body(Matcher::Json(json!({"name": "alpha"})))
        .with_status(201)
        .expect(2)
        .create_async()
        .await;
    let beta = server
        .mock("POST", NEW_APPLICATION)
        .match_body(Matcher::Json(json!({"name": "beta"})))
        .with_status(400)
        .expect(1)
        .create_async()
        .await;
    let gamma = server
        .mock("POST", NEW_APPLICATION)
        .match_body(Matcher::Json(json!({"name": "gamma"})))
        .with_status(500)
        .expect(1)
        .create_async()
        .await;

    let path = common::write_temp_file("end-to-end", "gamma\nbeta\n\n  alpha  \nalpha\n");
    let report = run_import(common::create_test_config(&server.url(), path))
        .await
        .unwrap();

    let order: Vec<&str> = report.entries().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(order, vec!["alpha", "alpha", "beta", "gamma"]);
    assert_eq!(report.created(), 2);
    assert_eq!(report.already_exists(), 1);
    assert_eq!(report.failed(), 1);

    login.assert_async().await;
    alpha.assert_async().await;
    beta.assert_async().await;
    gamma.assert_async().await;
}

#[tokio::test]
async fn test_run_import_missing_file_makes_no_requests() {
    let mut server = Server::new_async().await;
    let login = common::mock_login(&mut server, 0).await;
    let create = server
        .mock("POST", NEW_APPLICATION)
        .expect(0)
        .create_async()
        .await;

    let config = common::create_test_config(&server.url(), "/definitely/not/here/apps.txt");
    let result = run_import(config).await;

    assert!(matches!(result, Err(AppError::FileNotFound(_))));
    login.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn test_run_import_login_without_token_creates_nothing() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", LOGIN)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;
    let create = server
        .mock("POST", NEW_APPLICATION)
        .expect(0)
        .create_async()
        .await;

    let path = common::write_temp_file("no-token", "alpha\nbeta\n");
    let result = run_import(common::create_test_config(&server.url(), path)).await;

    assert!(matches!(result, Err(AppError::AuthenticationFailed(_))));
    login.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn test_import_continues_after_connection_errors() {
    setup_logger();
    let url = common::spawn_login_then_hang_up_server();
    let path = common::write_temp_file("hang-up", "beta\nalpha\ngamma\n");
    let client = AlgosecClient::new(common::create_test_config(&url, &path)).unwrap();

    let report = import_all(&client, &path).await.unwrap();

    let order: Vec<&str> = report.entries().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(order, vec!["alpha", "beta", "gamma"]);
    assert_eq!(report.failed(), 3);
    assert_eq!(report.created(), 0);
    assert!(
        report
            .entries()
            .iter()
            .all(|(_, o)| matches!(o, ImportOutcome::Failed(reason) if reason.starts_with("http error")))
    );
}
