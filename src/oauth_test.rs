use super::*;

fn config() -> GoogleOAuthConfig {
    GoogleOAuthConfig {
        client_id: "client-123.apps.googleusercontent.com".to_owned(),
        redirect_uri: "http://localhost:3000/auth/google/callback".to_owned(),
    }
}

// =============================================================
// authorize_url
// =============================================================

#[test]
fn authorize_url_requests_code_flow() {
    let url = config().authorize_url("s-1").unwrap();
    let parsed = Url::parse(&url).unwrap();
    assert_eq!(parsed.host_str(), Some("accounts.google.com"));

    let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    let get = |k: &str| pairs.iter().find(|(key, _)| key == k).map(|(_, v)| v.as_str());
    assert_eq!(get("response_type"), Some("code"));
    assert_eq!(get("client_id"), Some("client-123.apps.googleusercontent.com"));
    assert_eq!(get("redirect_uri"), Some("http://localhost:3000/auth/google/callback"));
    assert_eq!(get("scope"), Some(GOOGLE_SCOPES));
    assert_eq!(get("state"), Some("s-1"));
}

#[test]
fn authorize_url_encodes_redirect_uri() {
    let url = config().authorize_url("s").unwrap();
    assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fgoogle%2Fcallback"));
}

// =============================================================
// state tokens
// =============================================================

#[test]
fn generated_state_is_64_hex_chars() {
    let state = generate_state();
    assert_eq!(state.len(), 64);
    assert!(state.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(state, generate_state());
}

#[test]
fn state_from_bytes_is_lower_hex() {
    assert_eq!(state_from_bytes(&[0x00, 0xab, 0x7f]), "00ab7f");
}

// =============================================================
// parse_callback
// =============================================================

#[test]
fn callback_url_with_code() {
    let cb = parse_callback("http://localhost:3000/auth/google/callback?code=4%2F0Abc&state=s-1").unwrap();
    assert_eq!(cb.code, "4/0Abc");
    assert_eq!(cb.state.as_deref(), Some("s-1"));
}

#[test]
fn bare_query_with_or_without_question_mark() {
    assert_eq!(parse_callback("code=abc").unwrap().code, "abc");
    assert_eq!(parse_callback("?code=abc&scope=email").unwrap().code, "abc");
}

#[test]
fn missing_code_yields_empty_code() {
    let cb = parse_callback("?state=s-1").unwrap();
    assert!(cb.code.is_empty());
    let cb = parse_callback("?code=&state=s-1").unwrap();
    assert!(cb.code.is_empty());
}

#[test]
fn provider_error_is_denied() {
    let err = parse_callback("?error=access_denied&state=s-1").unwrap_err();
    assert!(matches!(err, SignupError::OAuthDenied { ref reason } if reason == "access_denied"));
    assert_eq!(err.to_string(), "Google login failed!");
}

#[test]
fn garbage_url_is_invalid() {
    assert!(matches!(parse_callback("http://[::1"), Err(SignupError::InvalidCallback(_))));
}

// =============================================================
// verify_state
// =============================================================

#[test]
fn verify_state_matches() {
    let cb = AuthCallback { code: "c".to_owned(), state: Some("s-1".to_owned()) };
    assert!(verify_state(&cb, "s-1").is_ok());
    assert!(matches!(verify_state(&cb, "other"), Err(SignupError::InvalidCallback(_))));

    let no_state = AuthCallback { code: "c".to_owned(), state: None };
    assert!(matches!(verify_state(&no_state, "s-1"), Err(SignupError::InvalidCallback(_))));
}
