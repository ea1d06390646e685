use std::sync::Arc;
use std::time::Duration;

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use trialmap_vault::{VaultClient, VaultConfig, VaultError};

fn client_for(server: &ServerGuard) -> VaultClient {
    VaultClient::new(VaultConfig::new(server.url(), "https://vault.test/ui")).unwrap()
}

async fn login(server: &mut ServerGuard, client: &VaultClient, token: &str) {
    let mock = server
        .mock("POST", "/auth")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "responseStatus": "SUCCESS", "sessionId": token }).to_string())
        .create_async()
        .await;
    client.authenticate("alice", "secret").await.unwrap();
    mock.remove_async().await;
}

#[tokio::test]
async fn authenticate_posts_form_credentials_and_stores_session() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/auth")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("username".into(), "alice".into()),
            Matcher::UrlEncoded("password".into(), "p@ss word".into()),
        ]))
        .with_status(200)
        .with_body(json!({ "responseStatus": "SUCCESS", "sessionId": "TOKEN-1" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let session = client.authenticate("alice", "p@ss word").await.unwrap();

    assert_eq!(session.token, "TOKEN-1");
    assert_eq!(session.issued_for_user, "alice");
    assert_eq!(client.session().await, Some(session));
    mock.assert_async().await;
}

#[tokio::test]
async fn authenticate_failure_keeps_previous_session() {
    let mut server = Server::new_async().await;
    let client = client_for(&server);
    login(&mut server, &client, "TOKEN-OLD").await;

    let _mock = server
        .mock("POST", "/auth")
        .with_status(200)
        .with_body(
            json!({
                "responseStatus": "FAILURE",
                "errors": [{ "type": "USERNAME_OR_PASSWORD_INCORRECT" }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = client.authenticate("alice", "wrong").await.unwrap_err();
    assert!(matches!(
        err,
        VaultError::Authentication(ref msg) if msg.contains("USERNAME_OR_PASSWORD_INCORRECT")
    ));
    assert_eq!(client.session().await.unwrap().token, "TOKEN-OLD");
}

#[tokio::test]
async fn authenticate_transport_error_is_an_authentication_failure() {
    let client = VaultClient::new(VaultConfig::new("http://127.0.0.1:1", "https://vault.test/ui"))
        .unwrap();

    let err = client.authenticate("alice", "secret").await.unwrap_err();
    assert!(matches!(err, VaultError::Authentication(_)));
    assert!(!client.is_authenticated().await);
}

#[tokio::test]
async fn authenticate_replaces_existing_session() {
    let mut server = Server::new_async().await;
    let client = client_for(&server);
    login(&mut server, &client, "TOKEN-A").await;
    login(&mut server, &client, "TOKEN-B").await;

    assert_eq!(client.session().await.unwrap().token, "TOKEN-B");
}

#[tokio::test]
async fn query_without_session_fails_before_any_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/query")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.execute_query("SELECT id FROM study__v").await.unwrap_err();

    assert!(matches!(err, VaultError::NoActiveSession));
    mock.assert_async().await;
}

#[tokio::test]
async fn query_sends_token_and_returns_rows() {
    let mut server = Server::new_async().await;
    let client = client_for(&server);
    login(&mut server, &client, "TOKEN-Q").await;

    let mock = server
        .mock("POST", "/query")
        .match_header("authorization", "TOKEN-Q")
        .match_header("accept", "application/json")
        .match_body(Matcher::UrlEncoded("q".into(), "SELECT id FROM study__v".into()))
        .with_status(200)
        .with_body(
            json!({
                "responseStatus": "SUCCESS",
                "data": [
                    { "id": "0ST01", "status__v": ["active__v"] },
                    { "id": "0ST02", "status__v": null }
                ]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let rows = client.execute_query("SELECT id FROM study__v").await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "0ST01");
    assert_eq!(rows[0]["status__v"], json!(["active__v"]));
    assert!(rows[1]["status__v"].is_null());
    mock.assert_async().await;
}

#[tokio::test]
async fn rejected_query_carries_remote_errors_verbatim() {
    let mut server = Server::new_async().await;
    let client = client_for(&server);
    login(&mut server, &client, "TOKEN-Q").await;

    let _mock = server
        .mock("POST", "/query")
        .with_status(200)
        .with_body(
            json!({
                "responseStatus": "FAILURE",
                "errors": [{
                    "type": "INVALID_SESSION_ID",
                    "message": "Invalid or expired session ID."
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = client.execute_query("SELECT id FROM site__v").await.unwrap_err();
    match err {
        VaultError::Rejected(payload) => {
            assert!(payload.contains("INVALID_SESSION_ID"));
            assert!(payload.contains("Invalid or expired session ID."));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn malformed_query_body_is_a_query_failure() {
    let mut server = Server::new_async().await;
    let client = client_for(&server);
    login(&mut server, &client, "TOKEN-Q").await;

    let _mock = server
        .mock("POST", "/query")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let err = client.execute_query("SELECT id FROM site__v").await.unwrap_err();
    assert!(matches!(err, VaultError::Json(_)));
    assert!(err.is_query_failure());
}

#[tokio::test]
async fn server_error_without_envelope_is_a_query_failure() {
    let mut server = Server::new_async().await;
    let client = client_for(&server);
    login(&mut server, &client, "TOKEN-Q").await;

    let _mock = server
        .mock("POST", "/query")
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let err = client.execute_query("SELECT id FROM site__v").await.unwrap_err();
    assert!(matches!(err, VaultError::InvalidResponse(ref msg) if msg.contains("503")));
    assert!(err.is_query_failure());
}

#[tokio::test]
async fn keep_alive_without_session_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/keep-alive")
        .expect(0)
        .create_async()
        .await;

    client_for(&server).keep_alive().await;
    mock.assert_async().await;
}

#[tokio::test]
async fn keep_alive_swallows_remote_failure() {
    let mut server = Server::new_async().await;
    let client = client_for(&server);
    login(&mut server, &client, "TOKEN-K").await;

    let mock = server
        .mock("POST", "/keep-alive")
        .match_header("authorization", "TOKEN-K")
        .with_status(500)
        .with_body("boom")
        .expect(1)
        .create_async()
        .await;

    client.keep_alive().await;

    mock.assert_async().await;
    assert!(client.is_authenticated().await);
}

#[tokio::test]
async fn logout_clears_session_on_success() {
    let mut server = Server::new_async().await;
    let client = client_for(&server);
    login(&mut server, &client, "TOKEN-L").await;

    let mock = server
        .mock("DELETE", "/session")
        .match_header("authorization", "TOKEN-L")
        .with_status(200)
        .with_body(json!({ "responseStatus": "SUCCESS" }).to_string())
        .expect(1)
        .create_async()
        .await;

    assert!(client.logout().await);
    assert!(!client.is_authenticated().await);
    mock.assert_async().await;
}

#[tokio::test]
async fn logout_failure_leaves_session_intact() {
    let mut server = Server::new_async().await;
    let client = client_for(&server);
    login(&mut server, &client, "TOKEN-L").await;

    let _mock = server
        .mock("DELETE", "/session")
        .with_status(200)
        .with_body(json!({ "responseStatus": "FAILURE", "errors": [] }).to_string())
        .create_async()
        .await;

    assert!(!client.logout().await);
    assert_eq!(client.session().await.unwrap().token, "TOKEN-L");
}

#[tokio::test]
async fn logout_network_failure_leaves_session_intact() {
    let mut server = Server::new_async().await;
    let client = client_for(&server);
    login(&mut server, &client, "TOKEN-L").await;

    let _mock = server
        .mock("DELETE", "/session")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    assert!(!client.logout().await);
    assert!(client.is_authenticated().await);
}

#[tokio::test]
async fn logout_without_session_returns_false() {
    let server = Server::new_async().await;
    assert!(!client_for(&server).logout().await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_session_changes_and_queries_stay_consistent() {
    let mut server = Server::new_async().await;
    let users = ["a", "b", "c", "d", "e"];
    let mut mocks = Vec::new();
    for user in users {
        let token = format!("TOKEN-{}", user);
        mocks.push(
            server
                .mock("POST", "/auth")
                .match_body(Matcher::UrlEncoded("username".into(), user.into()))
                .with_status(200)
                .with_body(json!({ "responseStatus": "SUCCESS", "sessionId": token }).to_string())
                .create_async()
                .await,
        );
    }
    mocks.push(
        server
            .mock("DELETE", "/session")
            .with_status(200)
            .with_body(json!({ "responseStatus": "SUCCESS" }).to_string())
            .create_async()
            .await,
    );
    mocks.push(
        server
            .mock("POST", "/keep-alive")
            .with_status(200)
            .with_body(json!({ "responseStatus": "SUCCESS" }).to_string())
            .create_async()
            .await,
    );
    mocks.push(
        server
            .mock("POST", "/query")
            .match_header("authorization", Matcher::Regex("^TOKEN-[a-e]$".into()))
            .with_status(200)
            .with_body(json!({ "responseStatus": "SUCCESS", "data": [] }).to_string())
            .create_async()
            .await,
    );

    let client = Arc::new(client_for(&server));
    client.authenticate("a", "secret").await.unwrap();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let user = users[i % users.len()];
        tasks.push(tokio::spawn(async move {
            match i % 4 {
                0 => {
                    client.logout().await;
                    client.authenticate(user, "secret").await.map(|_| ())
                }
                1 => {
                    client.keep_alive().await;
                    Ok(())
                }
                _ => client.execute_query("SELECT id FROM site__v").await.map(|_| ()),
            }
        }));
    }

    let results = tokio::time::timeout(Duration::from_secs(10), join_tasks(tasks))
        .await
        .expect("session operations deadlocked");

    for result in results {
        match result {
            Ok(()) | Err(VaultError::NoActiveSession) => {}
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    // Every logout is followed by its task's authenticate, so one survives.
    let session = client.session().await.unwrap();
    assert_eq!(session.token, format!("TOKEN-{}", session.issued_for_user));
}

async fn join_tasks(
    tasks: Vec<tokio::task::JoinHandle<trialmap_vault::Result<()>>>,
) -> Vec<trialmap_vault::Result<()>> {
    let mut results = Vec::with_capacity(tasks.len());
    for task in tasks {
        results.push(task.await.unwrap());
    }
    results
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn query_during_logout_never_sees_a_partial_session() {
    let mut server = Server::new_async().await;
    let client = Arc::new(client_for(&server));
    login(&mut server, &client, "TOKEN-OLD").await;

    let _session = server
        .mock("DELETE", "/session")
        .with_status(200)
        .with_body_from_request(|_| {
            std::thread::sleep(Duration::from_millis(200));
            json!({ "responseStatus": "SUCCESS" }).to_string().into_bytes()
        })
        .create_async()
        .await;
    let _query = server
        .mock("POST", "/query")
        .match_header("authorization", "TOKEN-OLD")
        .with_status(200)
        .with_body(json!({ "responseStatus": "SUCCESS", "data": [] }).to_string())
        .create_async()
        .await;

    let logout = tokio::spawn({
        let client = client.clone();
        async move { client.logout().await }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    let outcome = client.execute_query("SELECT id FROM site__v").await;
    assert!(
        matches!(outcome, Ok(_) | Err(VaultError::NoActiveSession)),
        "query saw a partial session: {:?}",
        outcome
    );

    assert!(logout.await.unwrap());
    assert!(!client.is_authenticated().await);
}
