//! Labeled input bound to one field of a `FormState`.
//!
//! Edits go through `FormState::input` and focus loss through
//! `FormState::blur`, so the inline error appears only once the field has
//! been touched.

use leptos::prelude::*;

use crate::forms::form_state::{Form, FormState};

#[component]
pub fn FormField<F>(
    form: RwSignal<FormState<F>>,
    field: F::Field,
    label: &'static str,
    read: fn(&F) -> String,
    write: fn(&mut F, String),
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] autocomplete: &'static str,
) -> impl IntoView
where
    F: Form + Send + Sync + 'static,
    F::Field: Send + Sync + 'static,
{
    let error = move || form.with(|state| state.error(field));
    let input_class = move || if error().is_some() { "form-input error" } else { "form-input" };

    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                class=input_class
                type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || form.with(|state| read(state.values()))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|state| state.input(|values| write(values, value)));
                }
                on:blur=move |_| form.update(|state| state.blur(field))
            />
            <Show when=move || error().is_some()>
                <span class="field-error">{move || error().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
