//! The five auth forms and the payloads they produce.

#[cfg(test)]
#[path = "auth_forms_test.rs"]
mod auth_forms_test;

use crate::net::types::{
    AccountType, ForgotPasswordPayload, ResetPasswordPayload, SignInPayload, SignUpPayload, VerifyPayload,
};

use super::form_state::{Form, FormState};
use super::rules::{
    self, COMPANY_REQUIRED, NAME_REQUIRED, PasswordChecks, RESET_TOKEN_REQUIRED, StrengthLabel,
};

/// `full_name` sent for a company account that left both names blank.
const COMPANY_FALLBACK_NAME: &str = "HireSight partner";

// =============================================================================
// Sign in
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Form for LoginForm {
    type Field = LoginField;
    type Payload = SignInPayload;

    fn required_fields(&self) -> Vec<LoginField> {
        vec![LoginField::Email, LoginField::Password]
    }

    fn validate(&self, field: LoginField) -> Option<&'static str> {
        match field {
            LoginField::Email => rules::validate_email(&self.email),
            LoginField::Password => rules::validate_login_password(&self.password),
        }
    }

    fn payload(&self) -> SignInPayload {
        SignInPayload { email: self.email.trim().to_owned(), password: self.password.clone() }
    }
}

// =============================================================================
// Sign up
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignUpField {
    Email,
    Password,
    Name,
    CompanyName,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub account_type: AccountType,
    pub email: String,
    pub password: String,
    pub name: String,
    pub company_name: String,
}

impl SignUpForm {
    /// The name field the selected account type requires.
    pub fn identity_field(&self) -> SignUpField {
        match self.account_type {
            AccountType::Personal => SignUpField::Name,
            AccountType::Company => SignUpField::CompanyName,
        }
    }

    pub fn password_checks(&self) -> PasswordChecks {
        rules::password_checks(&self.password)
    }

    pub fn strength(&self) -> (u8, StrengthLabel) {
        let score = rules::password_strength(&self.password);
        (score, rules::strength_label(score))
    }
}

impl Form for SignUpForm {
    type Field = SignUpField;
    type Payload = SignUpPayload;

    fn required_fields(&self) -> Vec<SignUpField> {
        vec![SignUpField::Email, SignUpField::Password, self.identity_field()]
    }

    fn validate(&self, field: SignUpField) -> Option<&'static str> {
        match field {
            SignUpField::Email => rules::validate_email(&self.email),
            SignUpField::Password => rules::validate_signup_password(&self.password),
            SignUpField::Name if self.account_type == AccountType::Personal => {
                rules::validate_required(&self.name, NAME_REQUIRED)
            }
            SignUpField::CompanyName if self.account_type == AccountType::Company => {
                rules::validate_required(&self.company_name, COMPANY_REQUIRED)
            }
            SignUpField::Name | SignUpField::CompanyName => None,
        }
    }

    fn payload(&self) -> SignUpPayload {
        let name = self.name.trim();
        let company = self.company_name.trim();
        let (full_name, company_name) = match self.account_type {
            AccountType::Personal => (name.to_owned(), None),
            AccountType::Company => {
                let full_name = [company, name].into_iter().find(|v| !v.is_empty()).unwrap_or(COMPANY_FALLBACK_NAME);
                (full_name.to_owned(), Some(company.to_owned()))
            }
        };
        SignUpPayload {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            full_name,
            account_type: self.account_type,
            company_name,
        }
    }
}

impl FormState<SignUpForm> {
    /// Switch account type; a touched name/company field is re-checked
    /// against the new requirement.
    pub fn set_account_type(&mut self, account_type: AccountType) {
        self.input(|form| form.account_type = account_type);
    }
}

// =============================================================================
// Email verification
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerifyField {
    Token,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerifyForm {
    pub token: String,
}

impl Form for VerifyForm {
    type Field = VerifyField;
    type Payload = VerifyPayload;

    fn required_fields(&self) -> Vec<VerifyField> {
        vec![VerifyField::Token]
    }

    fn validate(&self, field: VerifyField) -> Option<&'static str> {
        match field {
            VerifyField::Token => rules::validate_verification_token(&self.token),
        }
    }

    fn payload(&self) -> VerifyPayload {
        VerifyPayload { token: self.token.trim().to_owned() }
    }
}

// =============================================================================
// Forgot password
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ForgotPasswordField {
    Email,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl Form for ForgotPasswordForm {
    type Field = ForgotPasswordField;
    type Payload = ForgotPasswordPayload;

    fn required_fields(&self) -> Vec<ForgotPasswordField> {
        vec![ForgotPasswordField::Email]
    }

    fn validate(&self, field: ForgotPasswordField) -> Option<&'static str> {
        match field {
            ForgotPasswordField::Email => rules::validate_email(&self.email),
        }
    }

    fn payload(&self) -> ForgotPasswordPayload {
        ForgotPasswordPayload { email: self.email.trim().to_owned() }
    }
}

// =============================================================================
// Reset password
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ResetPasswordField {
    Token,
    Password,
    Confirmation,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub token: String,
    pub password: String,
    pub confirmation: String,
}

impl Form for ResetPasswordForm {
    type Field = ResetPasswordField;
    type Payload = ResetPasswordPayload;

    fn required_fields(&self) -> Vec<ResetPasswordField> {
        vec![ResetPasswordField::Token, ResetPasswordField::Password, ResetPasswordField::Confirmation]
    }

    fn validate(&self, field: ResetPasswordField) -> Option<&'static str> {
        match field {
            ResetPasswordField::Token => rules::validate_required(&self.token, RESET_TOKEN_REQUIRED),
            ResetPasswordField::Password => rules::validate_new_password(&self.password),
            ResetPasswordField::Confirmation => rules::validate_passwords_match(&self.password, &self.confirmation),
        }
    }

    fn payload(&self) -> ResetPasswordPayload {
        ResetPasswordPayload { token: self.token.trim().to_owned(), new_password: self.password.clone() }
    }
}
