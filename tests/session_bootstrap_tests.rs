mod common;

use common::{MockHttpExecutor, ScriptedReply, test_host};
use serde_json::{Value, json};
use transmission_rpc::constants::{AUTHORIZATION_HEADER, SESSION_ID_HEADER};
use transmission_rpc::rpc::{HeaderSet, HttpResponse, RpcClient, RpcError, TypedRpcCommand};

fn command(tag: u32) -> TypedRpcCommand<Value, Value> {
    TypedRpcCommand::new("session-get", json!({}), tag)
}

#[tokio::test]
async fn test_bootstrap_stores_exact_header_value() {
    let executor = MockHttpExecutor::new();
    executor.push_session("  opaque/Token==  ");

    let client = RpcClient::new(test_host(), executor.clone());
    client.refresh_session().await.unwrap();

    assert_eq!(
        client.session_store().get(SESSION_ID_HEADER).as_deref(),
        Some("  opaque/Token==  ")
    );

    let bootstrap = &executor.requests()[0];
    assert!(bootstrap.body.is_empty());
    assert_eq!(bootstrap.url.as_str(), "http://127.0.0.1:9091/transmission/rpc");
    assert!(bootstrap.headers.is_empty());
}

#[tokio::test]
async fn test_bootstrap_reads_header_case_insensitively() {
    let executor = MockHttpExecutor::new();
    let mut headers = HeaderSet::new();
    headers.insert("x-transmission-session-id".to_string(), "lower".to_string());
    executor.push(ScriptedReply::Response(HttpResponse {
        status: 409,
        headers,
        body: Vec::new(),
    }));

    let client = RpcClient::new(test_host(), executor);
    client.refresh_session().await.unwrap();

    assert_eq!(client.session_store().session_id().as_deref(), Some("lower"));
}

#[tokio::test]
async fn test_bootstrap_overwrites_previous_session() {
    let executor = MockHttpExecutor::new();
    executor.push_session("first").push_session("second");

    let client = RpcClient::new(test_host(), executor);
    client.refresh_session().await.unwrap();
    client.refresh_session().await.unwrap();

    assert_eq!(client.session_store().session_id().as_deref(), Some("second"));
    assert_eq!(client.session_store().len(), 1);
}

#[tokio::test]
async fn test_bootstrap_carries_basic_auth() {
    let executor = MockHttpExecutor::new();
    executor
        .push_conflict()
        .push_session("abc123")
        .push_echo("success", json!({}));

    let client = RpcClient::new(test_host().with_credentials("u", "p"), executor.clone());
    client.execute_with_session(&mut command(1)).await.unwrap();

    let bootstrap = &executor.bootstrap_requests()[0];
    assert_eq!(
        bootstrap.headers.get(AUTHORIZATION_HEADER).map(String::as_str),
        Some("Basic dTpw")
    );

    // The retried request and the session store both keep the credentials.
    let retry = &executor.rpc_requests()[1];
    assert_eq!(retry.headers.get(AUTHORIZATION_HEADER).unwrap(), "Basic dTpw");
    assert_eq!(retry.headers.get(SESSION_ID_HEADER).unwrap(), "abc123");
    assert_eq!(
        client.session_store().get(AUTHORIZATION_HEADER).as_deref(),
        Some("Basic dTpw")
    );
}

#[tokio::test]
async fn test_no_credentials_means_no_authorization_anywhere() {
    let executor = MockHttpExecutor::new();
    executor
        .push_conflict()
        .push_session("abc123")
        .push_echo("success", json!({}));

    let client = RpcClient::new(test_host(), executor.clone());
    client.execute_with_session(&mut command(1)).await.unwrap();

    for request in executor.requests() {
        assert!(request.headers.get(AUTHORIZATION_HEADER).is_none());
    }
    assert!(client.session_store().get(AUTHORIZATION_HEADER).is_none());
}

#[tokio::test]
async fn test_bootstrap_transport_failure_is_not_retried() {
    let executor = MockHttpExecutor::new();
    executor
        .push_conflict()
        .push_transport_failure("connection reset")
        .push_session("never-used");

    let client = RpcClient::new(test_host(), executor.clone());

    let err = client
        .execute_with_session(&mut command(1))
        .await
        .unwrap_err();

    assert!(matches!(err, RpcError::Bootstrap(_)), "got {err:?}");
    assert_eq!(executor.requests().len(), 2);
    assert!(client.session_store().is_empty());
}

#[tokio::test]
async fn test_missing_session_header_is_fatal() {
    let executor = MockHttpExecutor::new();
    executor
        .push_conflict()
        .push_conflict()
        .push_echo("success", json!({}));

    let client = RpcClient::new(test_host(), executor.clone());

    let err = client
        .execute_with_session(&mut command(1))
        .await
        .unwrap_err();

    assert!(
        matches!(
            err,
            RpcError::MissingSessionId {
                header: SESSION_ID_HEADER
            }
        ),
        "got {err:?}"
    );
    assert_eq!(executor.requests().len(), 2);
}

#[tokio::test]
async fn test_concurrent_calls_bootstrap_with_consistent_store() {
    let executor = MockHttpExecutor::new();
    executor.push_session("a").push_session("b");

    let client = RpcClient::new(test_host(), executor);

    let (first, second) = tokio::join!(client.refresh_session(), client.refresh_session());
    first.unwrap();
    second.unwrap();

    let session_id = client.session_store().session_id().unwrap();
    assert!(session_id == "a" || session_id == "b");
    assert_eq!(client.session_store().len(), 1);
}
