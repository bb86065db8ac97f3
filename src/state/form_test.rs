use super::*;

fn filled() -> FormState {
    FormState {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "analytical1".to_owned(),
        remember_me: true,
        feedback_message: "hello".to_owned(),
    }
}

// =============================================================
// FormState defaults
// =============================================================

#[test]
fn default_form_is_empty() {
    let form = FormState::default();
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
    assert!(!form.remember_me);
    assert!(form.feedback_message.is_empty());
}

// =============================================================
// reset
// =============================================================

#[test]
fn reset_clears_fields_but_keeps_feedback() {
    let mut form = filled();
    form.reset();
    assert_eq!(
        form,
        FormState { feedback_message: "hello".to_owned(), ..FormState::default() }
    );
}

// =============================================================
// register_request
// =============================================================

#[test]
fn register_request_copies_fields() {
    let req = filled().register_request();
    assert_eq!(req.name, "Ada");
    assert_eq!(req.email, "ada@example.com");
    assert_eq!(req.password, "analytical1");
    assert!(req.remember_me);
}
