use super::*;
use crate::forms::rules::{
    EMAIL_INVALID, PASSWORD_NEEDS_SPECIAL, PASSWORD_REQUIRED, PASSWORD_TOO_SHORT, PASSWORDS_MISMATCH, StrengthLabel,
    TOKEN_TOO_SHORT,
};

// =============================================================
// Login
// =============================================================

#[test]
fn login_submit_trims_email_and_keeps_password() {
    let mut form = FormState::new(LoginForm { email: " a@b.com ".to_owned(), password: "pw".to_owned() });
    let payload = form.submit().unwrap();
    assert_eq!(payload.email, "a@b.com");
    assert_eq!(payload.password, "pw");
}

#[test]
fn login_blocks_bad_email() {
    let mut form = FormState::new(LoginForm { email: "nope".to_owned(), password: String::new() });
    assert!(form.submit().is_none());
    assert_eq!(form.error(LoginField::Email), Some(EMAIL_INVALID));
    assert_eq!(form.error(LoginField::Password), Some(PASSWORD_REQUIRED));
}

// =============================================================
// Sign up
// =============================================================

fn personal() -> SignUpForm {
    SignUpForm {
        account_type: AccountType::Personal,
        email: "new@b.com".to_owned(),
        password: "Abcdef12!".to_owned(),
        name: "Grace".to_owned(),
        company_name: String::new(),
    }
}

#[test]
fn personal_sign_up_sends_full_name_only() {
    let payload = FormState::new(personal()).submit().unwrap();
    assert_eq!(payload.full_name, "Grace");
    assert_eq!(payload.company_name, None);
    assert_eq!(payload.account_type, AccountType::Personal);
}

#[test]
fn company_sign_up_requires_company_name() {
    let mut form = FormState::new(SignUpForm { account_type: AccountType::Company, name: String::new(), ..personal() });
    assert!(form.submit().is_none());
    assert_eq!(form.error(SignUpField::CompanyName), Some(COMPANY_REQUIRED));
    assert_eq!(form.error(SignUpField::Name), None);
}

#[test]
fn company_sign_up_uses_company_as_full_name() {
    let form = SignUpForm {
        account_type: AccountType::Company,
        company_name: "Acme".to_owned(),
        name: String::new(),
        ..personal()
    };
    let payload = FormState::new(form).submit().unwrap();
    assert_eq!(payload.full_name, "Acme");
    assert_eq!(payload.company_name.as_deref(), Some("Acme"));
}

#[test]
fn switching_account_type_revalidates_touched_name_field() {
    let mut form = FormState::new(SignUpForm { name: String::new(), ..personal() });
    form.blur(SignUpField::Name);
    assert_eq!(form.error(SignUpField::Name), Some(NAME_REQUIRED));

    form.set_account_type(AccountType::Company);
    assert_eq!(form.error(SignUpField::Name), None);
    assert_eq!(form.values().identity_field(), SignUpField::CompanyName);
}

#[test]
fn sign_up_reports_first_unmet_password_rule() {
    let mut form = FormState::new(SignUpForm { password: "Abcdefg12".to_owned(), ..personal() });
    form.blur(SignUpField::Password);
    assert_eq!(form.error(SignUpField::Password), Some(PASSWORD_NEEDS_SPECIAL));

    form.input(|f| f.password = "Ab1!".to_owned());
    assert_eq!(form.error(SignUpField::Password), Some(PASSWORD_TOO_SHORT));
    assert_eq!(form.values().password_checks().unmet(), vec![PASSWORD_TOO_SHORT]);
}

#[test]
fn sign_up_strength_tracks_password() {
    assert_eq!(personal().strength(), (90, StrengthLabel::Strong));
    assert_eq!(SignUpForm::default().strength(), (0, StrengthLabel::Weak));
}

// =============================================================
// Verify and forgot
// =============================================================

#[test]
fn verify_requires_eight_character_token() {
    let mut form = FormState::new(VerifyForm { token: "abc".to_owned() });
    assert!(form.submit().is_none());
    assert_eq!(form.error(VerifyField::Token), Some(TOKEN_TOO_SHORT));

    form.input(|f| f.token = "  verify-123 ".to_owned());
    assert_eq!(form.submit().map(|p| p.token).as_deref(), Some("verify-123"));
}

#[test]
fn forgot_password_validates_email() {
    let mut form = FormState::new(ForgotPasswordForm { email: "a@b".to_owned() });
    assert!(form.submit().is_none());
    form.input(|f| f.email = "a@b.com".to_owned());
    assert_eq!(form.submit().map(|p| p.email).as_deref(), Some("a@b.com"));
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_blocks_mismatched_confirmation_locally() {
    let mut form = FormState::new(ResetPasswordForm {
        token: "reset-tok".to_owned(),
        password: "Abcdef12!".to_owned(),
        confirmation: "Abcdef13!".to_owned(),
    });
    assert!(form.submit().is_none());
    assert_eq!(form.error(ResetPasswordField::Confirmation), Some(PASSWORDS_MISMATCH));
}

#[test]
fn reset_requires_token() {
    let mut form = FormState::new(ResetPasswordForm {
        token: " ".to_owned(),
        password: "Abcdef12!".to_owned(),
        confirmation: "Abcdef12!".to_owned(),
    });
    assert!(form.submit().is_none());
    assert_eq!(form.error(ResetPasswordField::Token), Some(RESET_TOKEN_REQUIRED));
}

#[test]
fn reset_yields_trimmed_token_and_new_password() {
    let mut form = FormState::new(ResetPasswordForm {
        token: " reset-tok ".to_owned(),
        password: "Abcdef12!".to_owned(),
        confirmation: "Abcdef12!".to_owned(),
    });
    let payload = form.submit().unwrap();
    assert_eq!(payload.token, "reset-tok");
    assert_eq!(payload.new_password, "Abcdef12!");
}
