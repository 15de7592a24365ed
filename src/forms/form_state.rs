//! Touched/error bookkeeping shared by every form.
//!
//! INVARIANTS
//! ==========
//! - No error is shown for a field the user has not blurred yet, unless a
//!   submit has been attempted.
//! - `submit` always re-validates every required field, touched or not, and
//!   only yields a payload when no field error remains.

#[cfg(test)]
#[path = "form_state_test.rs"]
mod form_state_test;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

/// A form's values plus its per-field rules.
pub trait Form: Clone + Default {
    type Field: Copy + Ord + Debug;
    type Payload;

    /// Fields that must validate before submission. May depend on the values
    /// (e.g. the selected account type).
    fn required_fields(&self) -> Vec<Self::Field>;

    fn validate(&self, field: Self::Field) -> Option<&'static str>;

    /// Build the request payload. Only called once every field validates.
    fn payload(&self) -> Self::Payload;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState<F: Form> {
    values: F,
    touched: BTreeSet<F::Field>,
    errors: BTreeMap<F::Field, &'static str>,
}

impl<F: Form> FormState<F> {
    pub fn new(values: F) -> Self {
        Self { values, touched: BTreeSet::new(), errors: BTreeMap::new() }
    }

    pub fn values(&self) -> &F {
        &self.values
    }

    /// Visible error for `field`.
    pub fn error(&self, field: F::Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_touched(&self, field: F::Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Field lost focus: mark it touched and validate it.
    pub fn blur(&mut self, field: F::Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// Apply an edit, then re-validate every field already touched.
    pub fn input(&mut self, edit: impl FnOnce(&mut F)) {
        edit(&mut self.values);
        let touched: Vec<F::Field> = self.touched.iter().copied().collect();
        for field in touched {
            self.revalidate(field);
        }
    }

    /// Touch and validate everything required; yield the payload when clean.
    pub fn submit(&mut self) -> Option<F::Payload> {
        self.touched.extend(self.values.required_fields());
        let touched: Vec<F::Field> = self.touched.iter().copied().collect();
        for field in touched {
            self.revalidate(field);
        }
        if self.has_errors() {
            log::debug!("form submission blocked: {:?}", self.errors.keys().collect::<Vec<_>>());
            return None;
        }
        Some(self.values.payload())
    }

    fn revalidate(&mut self, field: F::Field) {
        match self.values.validate(field) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}
