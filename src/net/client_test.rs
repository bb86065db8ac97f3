use std::sync::atomic::Ordering;

use super::*;
use crate::net::test_helpers::{BrokenStore, MockAuthApi, server_error};

// =============================================================
// register
// =============================================================

#[tokio::test]
async fn register_success_persists_token() {
    let client = AuthClient::new(MockAuthApi::ok("tok-reg"), Session::in_memory());
    let request = RegisterRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "analytical1".to_owned(),
        remember_me: true,
    };

    let result = client.register(&request).await.unwrap();
    assert_eq!(result.token, "tok-reg");
    assert_eq!(client.session().token().unwrap().as_deref(), Some("tok-reg"));
    assert_eq!(client.api().last_register.lock().unwrap().as_ref(), Some(&request));
}

#[tokio::test]
async fn register_failure_leaves_token_untouched() {
    let session = Session::in_memory();
    session.persist_token("previous").unwrap();
    let client = AuthClient::new(MockAuthApi::err(server_error(409, Some("Email taken"))), session);
    let request = RegisterRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "analytical1".to_owned(),
        remember_me: false,
    };

    let err = client.register(&request).await.unwrap_err();
    assert_eq!(err.server_message(), Some("Email taken"));
    assert_eq!(client.session().token().unwrap().as_deref(), Some("previous"));
}

#[tokio::test]
async fn unstorable_token_is_an_error() {
    let client = AuthClient::new(MockAuthApi::ok("tok"), Session::new(BrokenStore));
    let request = RegisterRequest {
        name: String::new(),
        email: String::new(),
        password: "analytical1".to_owned(),
        remember_me: false,
    };

    let err = client.register(&request).await.unwrap_err();
    assert!(matches!(err, ApiError::Session(_)));
}

// =============================================================
// google_login
// =============================================================

#[tokio::test]
async fn google_login_sends_code_under_token_field() {
    let client = AuthClient::new(MockAuthApi::ok("tok-g"), Session::in_memory());

    client.google_login("4/auth-code").await.unwrap();

    let sent = client.api().last_google.lock().unwrap().clone().unwrap();
    assert_eq!(sent.token, "4/auth-code");
    assert_eq!(client.api().google_calls.load(Ordering::SeqCst), 1);
    assert_eq!(client.session().token().unwrap().as_deref(), Some("tok-g"));
}

#[tokio::test]
async fn google_login_overwrites_registration_token() {
    let session = Session::in_memory();
    session.persist_token("from-register").unwrap();
    let client = AuthClient::new(MockAuthApi::ok("from-google"), session);

    client.google_login("code").await.unwrap();
    assert_eq!(client.session().token().unwrap().as_deref(), Some("from-google"));
}
