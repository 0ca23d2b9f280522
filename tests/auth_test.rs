//! Tests for the mock sign-in and sign-up forms.

use senipy::{AuthError, Field, Form, SignInForm, SignUpForm, VerificationPhase};

#[test]
fn test_sign_in_requires_email_first() {
    let form = SignInForm::new();
    let err = form.submit().expect_err("Blank form");
    assert_eq!(err, AuthError::Missing(Field::Email));
    assert_eq!(err.to_string(), "Please enter your email");
}

#[test]
fn test_sign_in_requires_password() {
    let form = SignInForm::with_values("ada@example.com", "   ");
    assert_eq!(form.submit(), Err(AuthError::Missing(Field::Password)));
}

#[test]
fn test_sign_in_returns_trimmed_email() {
    let form = SignInForm::with_values("  ada@example.com ", "hunter2");
    let email = form.submit().expect("Complete form");
    assert_eq!(email, "ada@example.com");
}

#[test]
fn test_sign_in_typing_and_focus() {
    let mut form = SignInForm::new();
    assert_eq!(form.focused(), Field::Email);
    for c in "ada@x.io".chars() {
        form.type_char(c);
    }
    form.next_field();
    assert_eq!(form.focused(), Field::Password);
    form.type_char('p');
    form.type_char('w');
    form.backspace();

    assert_eq!(form.value(Field::Email), "ada@x.io");
    assert_eq!(form.value(Field::Password), "p");
    assert_eq!(form.value(Field::Name), "");

    form.next_field();
    assert_eq!(form.focused(), Field::Email, "Focus wraps");
    form.previous_field();
    assert_eq!(form.focused(), Field::Password);
}

#[test]
fn test_sign_in_ignores_foreign_field() {
    let mut form = SignInForm::new();
    form.focus(Field::Name);
    assert_eq!(form.focused(), Field::Email);
}

#[test]
fn test_sign_up_reports_first_missing_field() {
    let form = SignUpForm::new();
    assert_eq!(form.submit(), Err(AuthError::Missing(Field::Name)));

    let form = SignUpForm::with_values("Ada", "", "secret");
    let err = form.submit().expect_err("Email blank");
    assert_eq!(err.to_string(), "Please enter your email");

    let form = SignUpForm::with_values("Ada", "ada@example.com", "");
    assert_eq!(form.submit(), Err(AuthError::Missing(Field::Password)));
}

#[test]
fn test_sign_up_opens_verification() {
    let form = SignUpForm::with_values("Ada", " ada@example.com ", "secret");
    let session = form.submit().expect("Complete form");
    assert_eq!(session.email(), "ada@example.com");
    assert_eq!(session.phase(), VerificationPhase::Entering);
    assert!(!session.is_verified());
}

#[test]
fn test_sign_up_field_order() {
    let mut form = SignUpForm::new();
    assert_eq!(form.fields(), &[Field::Name, Field::Email, Field::Password]);
    assert_eq!(form.focused(), Field::Name);
    form.previous_field();
    assert_eq!(form.focused(), Field::Password);
    form.next_field();
    form.next_field();
    assert_eq!(form.focused(), Field::Email);
}
