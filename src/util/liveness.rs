//! Teardown flag for async work started by a component.
//!
//! DESIGN
//! ======
//! A request resolves after its triggering component may already be gone.
//! The component owns a `Liveness`, clones it into the task, and flips it on
//! cleanup; the task checks it before writing any state. Nothing is aborted,
//! only stale writes are suppressed.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// A flag that dies with the current reactive owner.
    pub fn bound_to_scope() -> Self {
        let liveness = Self::new();
        let on_teardown = liveness.clone();
        leptos::prelude::on_cleanup(move || on_teardown.kill());
        liveness
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn kill(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}
