//! Where async results land.
//!
//! A request outlives the click that started it. Controllers never hold the
//! state itself; they push closures through a `StateSink`, which may refuse
//! them once the owning view is gone.

#[cfg(test)]
#[path = "sink_test.rs"]
mod sink_test;

use leptos::prelude::*;

use crate::util::liveness::Liveness;

/// Destination for state updates.
///
/// Returns `None` when the update was not applied, e.g. because the owning
/// view has been disposed.
pub trait StateSink<T> {
    fn apply<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateSink<T> for RwSignal<T> {
    fn apply<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Sink that goes silent once its component is torn down.
#[derive(Clone, Debug)]
pub struct ScopedSink<S> {
    inner: S,
    alive: Liveness,
}

impl<S> ScopedSink<S> {
    pub fn new(inner: S, alive: Liveness) -> Self {
        Self { inner, alive }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn is_alive(&self) -> bool {
        self.alive.is_alive()
    }
}

impl<T, S: StateSink<T>> StateSink<T> for ScopedSink<S> {
    fn apply<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        if !self.is_alive() {
            return None;
        }
        self.inner.apply(f)
    }
}
