// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Current-user lookup tests.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{native_backend, user_json, ScriptedBrowser};

async fn mount_account(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1/account"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_identity_gets_initials_avatar() {
    let server = MockServer::start().await;
    mount_account(
        &server,
        ResponseTemplate::new(200).set_body_json(user_json("u1", "Ada Lovelace")),
    )
    .await;

    let backend = native_backend(&server, ScriptedBrowser::cancel());
    let identity = backend.current_identity().await.expect("identity");

    assert_eq!(identity.user.id, "u1");
    assert_eq!(identity.user.name, "Ada Lovelace");
    assert_eq!(
        identity.avatar,
        format!(
            "{}/v1/avatars/initials?name=Ada+Lovelace&project=test-project",
            server.uri()
        )
    );

    // Same name, same avatar.
    let again = backend.current_identity().await.expect("identity");
    assert_eq!(again.avatar, identity.avatar);
}

#[tokio::test]
async fn test_identity_without_id_is_none() {
    let server = MockServer::start().await;
    mount_account(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "name": "Nobody" })),
    )
    .await;

    let backend = native_backend(&server, ScriptedBrowser::cancel());
    assert!(backend.current_identity().await.is_none());
    assert_eq!(backend.try_current_identity().await.unwrap(), None);
}

#[tokio::test]
async fn test_signed_out_is_none() {
    let server = MockServer::start().await;
    mount_account(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({
            "message": "User (role: guests) missing scope (account)",
            "code": 401,
            "type": "general_unauthorized_scope"
        })),
    )
    .await;

    let backend = native_backend(&server, ScriptedBrowser::cancel());
    assert!(backend.current_identity().await.is_none());

    let err = backend.try_current_identity().await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_server_error_is_none() {
    let server = MockServer::start().await;
    mount_account(&server, ResponseTemplate::new(500)).await;

    let backend = native_backend(&server, ScriptedBrowser::cancel());
    assert!(backend.current_identity().await.is_none());
}

#[tokio::test]
async fn test_malformed_body_is_none() {
    let server = MockServer::start().await;
    mount_account(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let backend = native_backend(&server, ScriptedBrowser::cancel());
    assert!(backend.current_identity().await.is_none());
}

#[tokio::test]
async fn test_unreachable_is_none() {
    let backend = common::unreachable_backend();
    assert!(backend.current_identity().await.is_none());
}
