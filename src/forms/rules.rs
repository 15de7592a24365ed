//! Field validation rules.
//!
//! Every check returns the message to show next to the field, or `None` when
//! the value is acceptable. Nothing here touches the network.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::sync::LazyLock;

use regex::Regex;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORD_NEEDS_MIXED_CASE: &str = "Password must contain uppercase and lowercase letters";
pub const PASSWORD_NEEDS_DIGIT: &str = "Password must contain at least one number";
pub const PASSWORD_NEEDS_SPECIAL: &str = "Password must contain at least one special character";
pub const NAME_REQUIRED: &str = "Name is required";
pub const COMPANY_REQUIRED: &str = "Company name is required";
pub const PASSWORDS_MISMATCH: &str = "Passwords must match";
pub const TOKEN_REQUIRED: &str = "Verification token is required";
pub const TOKEN_TOO_SHORT: &str = "Verification token must be at least 8 characters";
pub const RESET_TOKEN_REQUIRED: &str = "Reset token is required";

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_TOKEN_LEN: usize = 8;

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$"));

pub fn validate_required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

pub fn validate_email(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some(EMAIL_REQUIRED);
    }
    let valid = EMAIL_PATTERN.as_ref().is_ok_and(|pattern| pattern.is_match(value));
    (!valid).then_some(EMAIL_INVALID)
}

/// The four sign-up password rules, each reported independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordChecks {
    pub min_length: bool,
    pub mixed_case: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordChecks {
    pub fn all_met(self) -> bool {
        self.min_length && self.mixed_case && self.digit && self.special
    }

    /// Messages for every unmet rule, in display order.
    pub fn unmet(self) -> Vec<&'static str> {
        [
            (self.min_length, PASSWORD_TOO_SHORT),
            (self.mixed_case, PASSWORD_NEEDS_MIXED_CASE),
            (self.digit, PASSWORD_NEEDS_DIGIT),
            (self.special, PASSWORD_NEEDS_SPECIAL),
        ]
        .into_iter()
        .filter(|(met, _)| !met)
        .map(|(_, message)| message)
        .collect()
    }
}

pub fn password_checks(password: &str) -> PasswordChecks {
    PasswordChecks {
        min_length: password.chars().count() >= MIN_PASSWORD_LEN,
        mixed_case: password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_uppercase()),
        digit: password.chars().any(|c| c.is_ascii_digit()),
        special: password.chars().any(|c| !c.is_ascii_alphanumeric()),
    }
}

/// Sign-in only needs a password to be present.
pub fn validate_login_password(password: &str) -> Option<&'static str> {
    password.is_empty().then_some(PASSWORD_REQUIRED)
}

/// First unmet sign-up rule.
pub fn validate_signup_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        return Some(PASSWORD_REQUIRED);
    }
    password_checks(password).unmet().first().copied()
}

/// New password on the reset screen: present and long enough.
pub fn validate_new_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        return Some(PASSWORD_REQUIRED);
    }
    (password.chars().count() < MIN_PASSWORD_LEN).then_some(PASSWORD_TOO_SHORT)
}

pub fn validate_passwords_match(password: &str, confirmation: &str) -> Option<&'static str> {
    (password != confirmation).then_some(PASSWORDS_MISMATCH)
}

pub fn validate_verification_token(token: &str) -> Option<&'static str> {
    let token = token.trim();
    if token.is_empty() {
        return Some(TOKEN_REQUIRED);
    }
    (token.chars().count() < MIN_TOKEN_LEN).then_some(TOKEN_TOO_SHORT)
}

/// Advisory strength score in `0..=100`.
pub fn password_strength(password: &str) -> u8 {
    let len = password.chars().count();
    let checks = password_checks(password);
    let mut score: u8 = 0;
    if len >= MIN_PASSWORD_LEN {
        score += 25;
    }
    if len >= 12 {
        score += 10;
    }
    if checks.mixed_case {
        score += 20;
    }
    if checks.digit {
        score += 20;
    }
    if checks.special {
        score += 25;
    }
    score.min(100)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }
}

pub fn strength_label(score: u8) -> StrengthLabel {
    match score {
        0..30 => StrengthLabel::Weak,
        30..60 => StrengthLabel::Fair,
        60..85 => StrengthLabel::Good,
        _ => StrengthLabel::Strong,
    }
}
