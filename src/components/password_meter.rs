//! Sign-up password strength bar and requirement checklist.
//!
//! The score is advisory; the checklist mirrors the rules that actually
//! gate submission.

#[cfg(test)]
#[path = "password_meter_test.rs"]
mod password_meter_test;

use leptos::prelude::*;

use crate::forms::rules::{self, PasswordChecks, StrengthLabel};

fn meter_class(label: StrengthLabel) -> &'static str {
    match label {
        StrengthLabel::Weak => "strength-bar strength-bar--weak",
        StrengthLabel::Fair => "strength-bar strength-bar--fair",
        StrengthLabel::Good => "strength-bar strength-bar--good",
        StrengthLabel::Strong => "strength-bar strength-bar--strong",
    }
}

/// Checklist rows as `(met, text)`.
fn checklist(checks: PasswordChecks) -> [(bool, &'static str); 4] {
    [
        (checks.min_length, "At least 8 characters"),
        (checks.mixed_case, "Upper and lowercase letters"),
        (checks.digit, "At least one number"),
        (checks.special, "At least one special character"),
    ]
}

#[component]
pub fn PasswordMeter(#[prop(into)] password: Signal<String>) -> impl IntoView {
    let score = Memo::new(move |_| password.with(|p| rules::password_strength(p)));
    let label = move || rules::strength_label(score.get());
    let rows = move || password.with(|p| checklist(rules::password_checks(p)));

    view! {
        <Show when=move || password.with(|p| !p.is_empty())>
            <div class="password-strength">
                <div class="strength-track">
                    <div class=move || meter_class(label()) style=move || format!("width: {}%", score.get())></div>
                </div>
                <span class="strength-label">{move || label().as_str()}</span>
            </div>
            <ul class="password-checklist">
                {move || {
                    rows()
                        .into_iter()
                        .map(|(met, text)| {
                            let class = if met { "check check--met" } else { "check" };
                            view! { <li class=class>{text}</li> }
                        })
                        .collect_view()
                }}
            </ul>
        </Show>
    }
}
