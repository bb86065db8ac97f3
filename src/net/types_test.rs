use super::*;

// =============================================================
// RegisterRequest
// =============================================================

#[test]
fn register_request_uses_camel_case_remember_me() {
    let req = RegisterRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "analytical".to_owned(),
        remember_me: true,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "analytical",
            "rememberMe": true,
        })
    );
}

#[test]
fn register_request_debug_hides_password() {
    let req = RegisterRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "analytical".to_owned(),
        remember_me: false,
    };
    let rendered = format!("{req:?}");
    assert!(!rendered.contains("analytical"));
    assert!(rendered.contains("<redacted>"));
}

// =============================================================
// GoogleLoginRequest
// =============================================================

#[test]
fn google_login_request_sends_code_as_token_field() {
    let json = serde_json::to_value(GoogleLoginRequest::from_code("4/0Abc")).unwrap();
    assert_eq!(json, serde_json::json!({ "token": "4/0Abc" }));
}

// =============================================================
// AuthResult
// =============================================================

#[test]
fn auth_result_keeps_server_extras() {
    let result: AuthResult =
        serde_json::from_str(r#"{"token":"t-1","user":{"id":7},"expiresIn":3600}"#).unwrap();
    assert_eq!(result.token, "t-1");
    assert_eq!(result.extra.get("expiresIn"), Some(&serde_json::json!(3600)));
    assert_eq!(result.extra.get("user"), Some(&serde_json::json!({ "id": 7 })));
}

#[test]
fn auth_result_requires_token() {
    assert!(serde_json::from_str::<AuthResult>(r#"{"user":{}}"#).is_err());
}

#[test]
fn auth_result_debug_hides_token() {
    let result: AuthResult = serde_json::from_str(r#"{"token":"secret-token"}"#).unwrap();
    assert!(!format!("{result:?}").contains("secret-token"));
}

// =============================================================
// parse_error_body
// =============================================================

#[test]
fn error_body_with_message() {
    let body = parse_error_body(r#"{"message":"Email taken","code":409}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Email taken"));
    assert_eq!(body.extra.get("code"), Some(&serde_json::json!(409)));
}

#[test]
fn error_body_without_message() {
    let body = parse_error_body(r#"{"error":"nope"}"#).unwrap();
    assert!(body.message.is_none());
}

#[test]
fn error_body_non_json_is_absent() {
    assert!(parse_error_body("<html>502 Bad Gateway</html>").is_none());
    assert!(parse_error_body("").is_none());
    assert!(parse_error_body(r#""just a string""#).is_none());
}
